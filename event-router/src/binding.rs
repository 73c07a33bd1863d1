//! One-time rich-menu binding per user.
//!
//! Binding is advisory: every failure here (flag read, link call, flag write)
//! is logged and swallowed so it can never block the reply path.

use memobot_core::{BindingStore, MenuLinker};
use std::sync::Arc;
use tracing::{info, warn};

/// Ensures the platform menu is linked to a user at most meaningfully once.
///
/// The read-then-write sequence is not transactional: two near-simultaneous
/// first-contact events from the same user can both observe "absent" and
/// both issue a link call. The platform treats a duplicate link as a no-op,
/// so this is tolerated rather than locked.
pub struct MenuBindingTracker {
    bindings: Arc<dyn BindingStore>,
    linker: Arc<dyn MenuLinker>,
    menu_id: String,
}

impl MenuBindingTracker {
    pub fn new(bindings: Arc<dyn BindingStore>, linker: Arc<dyn MenuLinker>, menu_id: String) -> Self {
        Self {
            bindings,
            linker,
            menu_id,
        }
    }

    /// Links the menu if this user has not been bound before. Never fails.
    pub async fn ensure_bound(&self, user_id: &str) {
        match self.bindings.is_bound(user_id).await {
            Ok(true) => return,
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, user_id = %user_id, "Binding state read failed, skipping menu link");
                return;
            }
        }

        if let Err(e) = self.linker.link_menu(user_id, &self.menu_id).await {
            warn!(error = %e, user_id = %user_id, "Menu link failed");
            return;
        }

        info!(user_id = %user_id, menu_id = %self.menu_id, "Linked rich menu");

        if let Err(e) = self.bindings.mark_bound(user_id).await {
            warn!(error = %e, user_id = %user_id, "Failed to record menu binding");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use memobot_core::{StoreError, TransportError};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryBindings {
        bound: Mutex<HashSet<String>>,
        fail_reads: bool,
    }

    #[async_trait]
    impl BindingStore for MemoryBindings {
        async fn is_bound(&self, user_id: &str) -> Result<bool, StoreError> {
            if self.fail_reads {
                return Err(StoreError::Database("read failed".to_string()));
            }
            Ok(self.bound.lock().unwrap().contains(user_id))
        }

        async fn mark_bound(&self, user_id: &str) -> Result<(), StoreError> {
            self.bound.lock().unwrap().insert(user_id.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingLinker {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl MenuLinker for CountingLinker {
        async fn link_menu(&self, _user_id: &str, _menu_id: &str) -> Result<(), TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(TransportError::Status(500));
            }
            Ok(())
        }
    }

    fn tracker(
        bindings: Arc<MemoryBindings>,
        linker: Arc<CountingLinker>,
    ) -> MenuBindingTracker {
        MenuBindingTracker::new(bindings, linker, "richmenu-test".to_string())
    }

    #[tokio::test]
    async fn test_first_contact_links_once() {
        let bindings = Arc::new(MemoryBindings::default());
        let linker = Arc::new(CountingLinker::default());
        let tracker = tracker(bindings.clone(), linker.clone());

        tracker.ensure_bound("U1").await;
        tracker.ensure_bound("U1").await;

        assert_eq!(linker.calls.load(Ordering::SeqCst), 1);
        assert!(bindings.bound.lock().unwrap().contains("U1"));
    }

    #[tokio::test]
    async fn test_link_failure_is_swallowed_and_retried_next_event() {
        let bindings = Arc::new(MemoryBindings::default());
        let linker = Arc::new(CountingLinker {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let tracker = tracker(bindings.clone(), linker.clone());

        // Does not panic or propagate; the flag stays unset so the next
        // event tries again.
        tracker.ensure_bound("U1").await;
        assert!(!bindings.bound.lock().unwrap().contains("U1"));

        tracker.ensure_bound("U1").await;
        assert_eq!(linker.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_read_failure_skips_link_call() {
        let bindings = Arc::new(MemoryBindings {
            bound: Mutex::new(HashSet::new()),
            fail_reads: true,
        });
        let linker = Arc::new(CountingLinker::default());
        let tracker = tracker(bindings, linker.clone());

        tracker.ensure_bound("U1").await;
        assert_eq!(linker.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_distinct_users_each_get_linked() {
        let bindings = Arc::new(MemoryBindings::default());
        let linker = Arc::new(CountingLinker::default());
        let tracker = tracker(bindings, linker.clone());

        tracker.ensure_bound("U1").await;
        tracker.ensure_bound("U2").await;
        assert_eq!(linker.calls.load(Ordering::SeqCst), 2);
    }
}
