/// 书签条目模块
///
/// 书签文件中的每一行对应一个条目。条目由持有它的书签集合独占，
/// 本模块只负责单个条目的状态与文本编码。
///
/// - **marker**: 分隔标记条目
pub mod marker;

use std::fmt;

use crate::datatypes::{BouquetItemType, ServiceRefFlags};
use crate::editable::Editable;

pub use marker::BouquetItemMarker;

/// 书签条目的公共接口
///
/// `Display` 输出即写入书签文件的行文本。
pub trait BouquetItem: Editable + fmt::Display {
    /// 条目类型，集合层代码据此区分条目而无需类型检查
    fn bouquet_item_type(&self) -> BouquetItemType;

    /// 收藏类型标志（各条目类型固定）
    fn favorites_type_flag(&self) -> &str;

    /// 行说明标志（各条目类型固定）
    fn line_specifier_flag(&self) -> ServiceRefFlags;

    /// 生成写入书签文件的行
    fn to_line(&self) -> String {
        self.to_string()
    }
}
