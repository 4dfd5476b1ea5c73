use serde::Serialize;
use std::fmt;

/// DVB 服务引用类型（收藏类型标志）
pub const FAVORITES_TYPE_DVB: &str = "1";

/// 描述行标签
pub const DESCRIPTION_TAG: &str = "#DESCRIPTION";

/// 空描述占位符（25 个短横线）
pub const EMPTY_DESCRIPTION_PLACEHOLDER: &str = "-------------------------";

/// 默认标记编号
pub const DEFAULT_MARKER_NUMBER: &str = "0";

/// 书签条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BouquetItemType {
    /// 普通频道
    Service,
    /// 分隔标记
    Marker,
    /// 引用另一个书签文件
    FileBouquet,
    /// 网络流
    Stream,
}

impl fmt::Display for BouquetItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BouquetItemType::Service => "Service",
            BouquetItemType::Marker => "Marker",
            BouquetItemType::FileBouquet => "FileBouquet",
            BouquetItemType::Stream => "Stream",
        };
        f.write_str(name)
    }
}

// 服务引用标志位定义（行说明标志）
bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ServiceRefFlags: u32 {
        const IS_DIRECTORY = 0x00000001;       // 目录
        const MUST_DESCENT = 0x00000002;       // 必须进入
        const CAN_DESCENT = 0x00000004;        // 可以进入
        const HAS_SORT_KEY = 0x00000008;       // 带排序键
        const SORT1 = 0x00000010;              // 排序方式 1
        const IS_MARKER = 0x00000040;          // 分隔标记
        const IS_GROUP = 0x00000080;           // 分组
        const IS_NUMBERED_MARKER = 0x00000100; // 带编号的标记
        const IS_INVISIBLE = 0x00000200;       // 隐藏
    }
}

impl fmt::Display for ServiceRefFlags {
    /// 按十进制写出，与设备文件格式一致
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_render_decimal() {
        assert_eq!(ServiceRefFlags::IS_MARKER.to_string(), "64");
        assert_eq!(ServiceRefFlags::empty().to_string(), "0");
        assert_eq!(
            (ServiceRefFlags::IS_DIRECTORY | ServiceRefFlags::SORT1).to_string(),
            "17"
        );
    }

    #[test]
    fn test_placeholder_length() {
        assert_eq!(EMPTY_DESCRIPTION_PLACEHOLDER.len(), 25);
        assert!(EMPTY_DESCRIPTION_PLACEHOLDER.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_item_type_display() {
        assert_eq!(BouquetItemType::Marker.to_string(), "Marker");
        assert_eq!(BouquetItemType::FileBouquet.to_string(), "FileBouquet");
    }
}
