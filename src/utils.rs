use thiserror::Error;

use crate::datatypes::{DEFAULT_MARKER_NUMBER, EMPTY_DESCRIPTION_PLACEHOLDER};

/// 自定义错误类型
#[derive(Error, Debug)]
pub enum BouquetError {
    #[error("Value cannot be null: {param}")]
    ArgumentNull { param: &'static str },

    #[error("Marker number overflow: auto numbering exceeded 4294967295")]
    MarkerNumberOverflow,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// 规范化标记描述
///
/// 空白或空字符串替换为占位符，其余去除首尾空白
pub fn normalize_description(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        EMPTY_DESCRIPTION_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// 规范化标记编号（不校验数字格式，按文本保存）
pub fn normalize_marker_number(value: Option<&str>) -> String {
    value.unwrap_or(DEFAULT_MARKER_NUMBER).to_string()
}
