/// 可编辑条目模块
///
/// 该模块为所有书签条目提供统一的事务式编辑协议（开始/提交/取消），
/// 以及字段变更通知。
///
/// # 架构设计
///
/// - **session**: `Editable` trait 与可复用的 `EditSession` 快照辅助器
/// - **notify**: 属性变更订阅表
///
/// # 使用示例
///
/// ```rust,ignore
/// use enigma_bouquet::{BouquetItemMarker, Editable};
///
/// let mut marker = BouquetItemMarker::new(Some("Sports"), Some("5"))?;
/// marker.begin_edit();
/// marker.set_description("News");
/// marker.cancel_edit();
/// assert_eq!(marker.description(), "Sports");
/// ```
pub mod notify;
pub mod session;

// === 导出公共接口 ===
pub use notify::{PropertyChangedHandlers, SubscriptionId};
pub use session::{EditSession, EditState, Editable};
