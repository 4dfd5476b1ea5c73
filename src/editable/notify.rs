/// 属性变更通知模块
///
/// 以属性名为键的同步订阅表。通知在 setter 返回之前
/// 按订阅顺序逐一送达所有当前订阅者。

use std::fmt;
use std::rc::Rc;

type Handler = Rc<dyn Fn(&str)>;

/// 订阅标识，用于取消订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    /// 为 `None` 时接收所有属性
    property: Option<&'static str>,
    handler: Handler,
}

/// 属性变更订阅表
///
/// # 实现细节
/// - 处理函数以 `Rc` 共享，克隆订阅表会共享同一批处理函数
/// - 单线程使用，不做同步
#[derive(Default)]
pub struct PropertyChangedHandlers {
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl PropertyChangedHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// 订阅所有属性的变更
    ///
    /// 处理函数收到发生变更的属性名
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: Fn(&str) + 'static,
    {
        self.insert(None, Rc::new(handler))
    }

    /// 只订阅指定属性的变更
    pub fn subscribe_property<F>(&mut self, property: &'static str, handler: F) -> SubscriptionId
    where
        F: Fn(&str) + 'static,
    {
        self.insert(Some(property), Rc::new(handler))
    }

    fn insert(&mut self, property: Option<&'static str>, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            property,
            handler,
        });
        id
    }

    /// 取消订阅
    ///
    /// # 返回
    /// 找到并移除了订阅时返回 true
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// 通知属性已变更
    pub fn notify(&self, property: &str) {
        for subscription in &self.subscriptions {
            if subscription.property.map_or(true, |p| p == property) {
                log::trace!("property changed: {}", property);
                (subscription.handler)(property);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl Clone for PropertyChangedHandlers {
    fn clone(&self) -> Self {
        Self {
            subscriptions: self
                .subscriptions
                .iter()
                .map(|s| Subscription {
                    id: s.id,
                    property: s.property,
                    handler: Rc::clone(&s.handler),
                })
                .collect(),
            next_id: self.next_id,
        }
    }
}

impl fmt::Debug for PropertyChangedHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyChangedHandlers")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |name: &str| sink.borrow_mut().push(name.to_string()))
    }

    #[test]
    fn test_notify_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut handlers = PropertyChangedHandlers::new();

        let first = Rc::clone(&order);
        handlers.subscribe(move |_| first.borrow_mut().push(1));
        let second = Rc::clone(&order);
        handlers.subscribe(move |_| second.borrow_mut().push(2));

        handlers.notify("Description");
        assert_eq!(*order.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_property_filter() {
        let (log, handler) = recorder();
        let mut handlers = PropertyChangedHandlers::new();
        handlers.subscribe_property("MarkerNumber", handler);

        handlers.notify("Description");
        handlers.notify("MarkerNumber");

        assert_eq!(*log.borrow(), vec!["MarkerNumber".to_string()]);
    }

    #[test]
    fn test_unsubscribe() {
        let (log, handler) = recorder();
        let mut handlers = PropertyChangedHandlers::new();
        let id = handlers.subscribe(handler);
        assert_eq!(handlers.len(), 1);

        assert!(handlers.unsubscribe(id));
        assert!(!handlers.unsubscribe(id));
        assert!(handlers.is_empty());

        handlers.notify("Description");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_clone_shares_handlers() {
        let (log, handler) = recorder();
        let mut handlers = PropertyChangedHandlers::new();
        handlers.subscribe(handler);

        let copy = handlers.clone();
        copy.notify("Description");
        handlers.notify("MarkerNumber");

        assert_eq!(
            *log.borrow(),
            vec!["Description".to_string(), "MarkerNumber".to_string()]
        );
    }
}
