use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

/// Shared, append-only log of developer-facing messages.
///
/// Clones share the same buffer, so the service and the views that display
/// the log all see the same lines.
///
/// # Examples
/// ```
/// use service::MessageService;
/// let messages = MessageService::new();
/// messages.add("HeroService: fetched heroes");
/// assert_eq!(messages.messages(), vec!["HeroService: fetched heroes".to_string()]);
/// messages.clear();
/// assert!(messages.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MessageService {
    inner: Arc<RwLock<Vec<String>>>,
}

impl MessageService {
    pub fn new() -> Self { Self::default() }

    pub fn add(&self, message: impl Into<String>) {
        let message = message.into();
        info!(event = "message", %message);
        self.inner.write().unwrap_or_else(PoisonError::into_inner).push(message);
    }

    /// Snapshot of all messages in insertion order.
    pub fn messages(&self) -> Vec<String> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn clear(&self) {
        self.inner.write().unwrap_or_else(PoisonError::into_inner).clear();
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_buffer() {
        let a = MessageService::new();
        let b = a.clone();
        a.add("one");
        b.add("two");
        assert_eq!(a.messages(), vec!["one", "two"]);
        assert_eq!(b.len(), 2);
    }
}
