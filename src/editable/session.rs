/// 编辑会话模块
///
/// 提供 `Editable` 能力接口，以及每个条目持有的 `EditSession` 辅助器。
/// 会话状态用显式的标签枚举表示：快照只在 `Editing` 状态中存在，
/// 因此重复开始编辑无法覆盖已有快照。

/// 事务式编辑能力
///
/// 实现者负责快照/恢复自身的全部可变字段。
/// 所有方法在"错误"状态下调用都是无操作，不会报错。
pub trait Editable {
    /// 开始编辑会话（已在编辑中则忽略）
    fn begin_edit(&mut self);

    /// 提交会话，保留当前字段值（不在编辑中则忽略）
    fn end_edit(&mut self);

    /// 取消会话，恢复到 `begin_edit` 时的字段值（不在编辑中则忽略）
    fn cancel_edit(&mut self);

    /// 是否处于编辑会话中
    fn is_editing(&self) -> bool;
}

/// 编辑会话状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState<S> {
    /// 空闲
    Idle,
    /// 编辑中，持有开始编辑时的快照
    Editing(S),
}

/// 编辑会话辅助器
///
/// # 状态机
/// - `begin`: Idle → Editing（唯一入口）
/// - `end` / `cancel`: Editing → Idle
///
/// 只跟踪空闲/编辑状态时可使用 `EditSession<()>`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession<S> {
    state: EditState<S>,
}

impl<S> EditSession<S> {
    /// 创建空闲会话
    pub fn new() -> Self {
        Self {
            state: EditState::Idle,
        }
    }

    /// 开始编辑
    ///
    /// 仅在空闲时调用 `snapshot` 捕获字段值。
    ///
    /// # 返回
    /// 是否真正进入了新会话
    pub fn begin<F>(&mut self, snapshot: F) -> bool
    where
        F: FnOnce() -> S,
    {
        match self.state {
            EditState::Editing(_) => false,
            EditState::Idle => {
                self.state = EditState::Editing(snapshot());
                true
            }
        }
    }

    /// 提交编辑，丢弃快照
    ///
    /// # 返回
    /// 是否结束了一个活动会话
    pub fn end(&mut self) -> bool {
        matches!(
            std::mem::replace(&mut self.state, EditState::Idle),
            EditState::Editing(_)
        )
    }

    /// 取消编辑，交出快照供调用者恢复字段
    ///
    /// 不在编辑中时返回 `None`。
    pub fn cancel(&mut self) -> Option<S> {
        match std::mem::replace(&mut self.state, EditState::Idle) {
            EditState::Editing(snapshot) => Some(snapshot),
            EditState::Idle => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing(_))
    }

    /// 当前快照（仅编辑中存在）
    pub fn snapshot(&self) -> Option<&S> {
        match &self.state {
            EditState::Editing(snapshot) => Some(snapshot),
            EditState::Idle => None,
        }
    }

    pub fn state(&self) -> &EditState<S> {
        &self.state
    }
}

impl<S> Default for EditSession<S> {
    fn default() -> Self {
        Self::new()
    }
}
