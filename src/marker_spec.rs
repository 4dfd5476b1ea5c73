use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::bouquet_item::BouquetItemMarker;
use crate::utils::BouquetError;

/// 标记输入记录
///
/// 用于从 JSON 批量创建标记：
/// - `description` 允许为 null，创建时报告参数为空错误
/// - `marker_number` 可省略，可由自动编号补齐
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub description: Option<String>,
    #[serde(default)]
    pub marker_number: Option<String>,
}

impl MarkerSpec {
    pub fn new(description: Option<String>, marker_number: Option<String>) -> Self {
        MarkerSpec {
            description,
            marker_number,
        }
    }

    /// 按记录内容创建标记
    pub fn to_marker(&self) -> Result<BouquetItemMarker, BouquetError> {
        BouquetItemMarker::new(self.description.as_deref(), self.marker_number.as_deref())
    }

    /// 从 JSON 文本解析记录数组
    pub fn parse_list(json: &str) -> Result<Vec<MarkerSpec>, BouquetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从 JSON 文件读取记录数组
    pub fn load_list(path: &Path) -> Result<Vec<MarkerSpec>, BouquetError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_list(&content)
    }
}

/// 批量创建标记
///
/// # 参数
/// * `specs` - 输入记录
/// * `start_number` - 为缺少编号的记录自动分配编号的起点；`None` 时缺少的编号保持默认 "0"
///
/// # 返回
/// 任意记录的描述为空时立即返回错误；自动编号超过 `u32::MAX` 时返回
/// `BouquetError::MarkerNumberOverflow`
pub fn build_markers(
    specs: &[MarkerSpec],
    start_number: Option<u32>,
) -> Result<Vec<BouquetItemMarker>, BouquetError> {
    // 计数器用 u64，分配时再检查是否仍在 u32 范围内
    let mut next_number = start_number.map(u64::from);
    let mut markers = Vec::with_capacity(specs.len());

    for spec in specs {
        let mut marker = spec.to_marker()?;
        if spec.marker_number.is_none() {
            if let Some(number) = next_number {
                let number =
                    u32::try_from(number).map_err(|_| BouquetError::MarkerNumberOverflow)?;
                marker.set_marker_number(Some(&number.to_string()));
                next_number = Some(u64::from(number) + 1);
            }
        }
        markers.push(marker);
    }

    Ok(markers)
}
