/// 分隔标记条目
///
/// 标记是书签中的可见分隔行，带有顺序编号和描述文本。
/// 写入文件的格式为：
///
/// ```text
/// 1:64:<编号>:0:0:0:0:0:0:0:\t#DESCRIPTION <描述>
/// ```
///
/// 冒号分隔的 11 个字段（末尾为空字段，产生结尾冒号）与描述组之间以制表符分隔。

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::BouquetItem;
use crate::datatypes::{
    BouquetItemType, ServiceRefFlags, DEFAULT_MARKER_NUMBER, DESCRIPTION_TAG, FAVORITES_TYPE_DVB,
};
use crate::editable::{EditSession, Editable, PropertyChangedHandlers, SubscriptionId};
use crate::utils::{normalize_description, normalize_marker_number, BouquetError};

/// 编号之后固定写出的 7 个零字段
const RESERVED_FIELDS: [&str; 7] = ["0"; 7];

/// 开始编辑时捕获的字段值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSnapshot {
    pub description: String,
    pub marker_number: String,
}

/// 分隔标记
///
/// # 字段约束
/// - `description`: 永不为空白，已去除首尾空白
/// - `marker_number`: 文本形式的编号，默认 "0"，不做数字校验
#[derive(Debug)]
pub struct BouquetItemMarker {
    description: String,
    marker_number: String,
    session: EditSession<MarkerSnapshot>,
    property_changed: PropertyChangedHandlers,
}

impl BouquetItemMarker {
    /// `description` 的属性名
    pub const DESCRIPTION: &'static str = "Description";
    /// `marker_number` 的属性名
    pub const MARKER_NUMBER: &'static str = "MarkerNumber";

    /// 创建新的标记
    ///
    /// # 参数
    /// * `description` - 描述文本（不含 `#DESCRIPTION` 标签）
    /// * `marker_number` - 整个设置中的标记顺序编号，`None` 时为 "0"
    ///
    /// # 错误
    /// `description` 为 `None` 时返回 `BouquetError::ArgumentNull`
    pub fn new(description: Option<&str>, marker_number: Option<&str>) -> Result<Self, BouquetError> {
        let description = description.ok_or(BouquetError::ArgumentNull {
            param: "description",
        })?;

        Ok(Self {
            description: normalize_description(description),
            marker_number: normalize_marker_number(marker_number),
            session: EditSession::new(),
            property_changed: PropertyChangedHandlers::new(),
        })
    }

    /// 标记描述
    pub fn description(&self) -> &str {
        &self.description
    }

    /// 设置描述
    ///
    /// 空白值替换为 25 个短横线的占位符，其余去除首尾空白。
    /// 只有存储值实际改变时才发出 "Description" 通知。
    pub fn set_description(&mut self, value: &str) {
        if value == self.description {
            return;
        }
        let normalized = normalize_description(value);
        if normalized == self.description {
            return;
        }
        self.description = normalized;
        self.property_changed.notify(Self::DESCRIPTION);
    }

    /// 标记编号（默认 "0"）
    pub fn marker_number(&self) -> &str {
        &self.marker_number
    }

    /// 设置标记编号
    ///
    /// `None` 规范化为 "0"，不修剪。
    pub fn set_marker_number(&mut self, value: Option<&str>) {
        let value = value.unwrap_or(DEFAULT_MARKER_NUMBER);
        if value == self.marker_number {
            return;
        }
        self.marker_number = value.to_string();
        self.property_changed.notify(Self::MARKER_NUMBER);
    }

    /// 订阅所有属性变更
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: Fn(&str) + 'static,
    {
        self.property_changed.subscribe(handler)
    }

    /// 订阅单个属性的变更
    pub fn subscribe_property<F>(&mut self, property: &'static str, handler: F) -> SubscriptionId
    where
        F: Fn(&str) + 'static,
    {
        self.property_changed.subscribe_property(property, handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.property_changed.unsubscribe(id)
    }

    /// 当前编辑会话的快照
    pub fn edit_snapshot(&self) -> Option<&MarkerSnapshot> {
        self.session.snapshot()
    }
}

impl Editable for BouquetItemMarker {
    fn begin_edit(&mut self) {
        let description = &self.description;
        let marker_number = &self.marker_number;
        let started = self.session.begin(|| MarkerSnapshot {
            description: description.clone(),
            marker_number: marker_number.clone(),
        });
        if started {
            log::debug!("begin edit: marker {} \"{}\"", self.marker_number, self.description);
        }
    }

    fn end_edit(&mut self) {
        if self.session.end() {
            log::debug!("end edit: marker {} \"{}\"", self.marker_number, self.description);
        }
    }

    fn cancel_edit(&mut self) {
        let Some(snapshot) = self.session.cancel() else {
            return;
        };
        log::debug!(
            "cancel edit: restoring marker {} \"{}\"",
            snapshot.marker_number,
            snapshot.description
        );
        // 通过 setter 恢复，实际变化的字段会发出通知
        self.set_description(&snapshot.description);
        self.set_marker_number(Some(&snapshot.marker_number));
    }

    fn is_editing(&self) -> bool {
        self.session.is_editing()
    }
}

impl BouquetItem for BouquetItemMarker {
    fn bouquet_item_type(&self) -> BouquetItemType {
        BouquetItemType::Marker
    }

    fn favorites_type_flag(&self) -> &str {
        FAVORITES_TYPE_DVB
    }

    fn line_specifier_flag(&self) -> ServiceRefFlags {
        ServiceRefFlags::IS_MARKER
    }
}

/// 逐字段复制：包括进行中的编辑快照和订阅者
impl Clone for BouquetItemMarker {
    fn clone(&self) -> Self {
        Self {
            description: self.description.clone(),
            marker_number: self.marker_number.clone(),
            session: self.session.clone(),
            property_changed: self.property_changed.clone(),
        }
    }
}

impl fmt::Display for BouquetItemMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line_specifier = self.line_specifier_flag().to_string();

        let mut descriptor: Vec<&str> = Vec::with_capacity(11);
        descriptor.push(self.favorites_type_flag());
        descriptor.push(&line_specifier);
        descriptor.push(&self.marker_number);
        descriptor.extend_from_slice(&RESERVED_FIELDS);
        descriptor.push("");

        let description = [DESCRIPTION_TAG, self.description.as_str()];

        write!(f, "{}\t{}", descriptor.join(":"), description.join(" "))
    }
}

impl Serialize for BouquetItemMarker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("BouquetItemMarker", 4)?;
        state.serialize_field("bouquet_item_type", &self.bouquet_item_type())?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("marker_number", &self.marker_number)?;
        state.serialize_field("line", &self.to_line())?;
        state.end()
    }
}
