use std::cell::Cell;

thread_local! {
    static ACTIVE: Cell<usize> = const { Cell::new(0) };
}

/// Number of subscriptions currently alive on this thread.
pub fn active_subscriptions() -> usize {
    ACTIVE.with(Cell::get)
}

/// Owns a listener, timer, frame or observer handle and counts it in the
/// per-thread ledger until dropped.
pub struct Subscription<H> {
    handle: Option<H>,
}

impl<H> Subscription<H> {
    pub fn new(handle: H) -> Self {
        ACTIVE.with(|active| active.set(active.get() + 1));
        Self {
            handle: Some(handle),
        }
    }
}

impl<H> Drop for Subscription<H> {
    fn drop(&mut self) {
        // Release the handle first so its own teardown runs before the count drops.
        drop(self.handle.take());
        ACTIVE.with(|active| active.set(active.get().saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct Detach(Rc<Cell<bool>>);

    impl Drop for Detach {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn dropping_a_subscription_releases_handle_and_ledger_slot() {
        let before = active_subscriptions();
        let released = Rc::new(Cell::new(false));

        let subscription = Subscription::new(Detach(released.clone()));
        assert_eq!(active_subscriptions(), before + 1);
        assert!(!released.get());

        drop(subscription);
        assert!(released.get());
        assert_eq!(active_subscriptions(), before);
    }

    #[test]
    fn ledger_returns_to_prior_count_after_nested_scopes() {
        let before = active_subscriptions();
        {
            let _scroll = Subscription::new(());
            let _resize = Subscription::new(());
            {
                let _frame = Subscription::new(());
                assert_eq!(active_subscriptions(), before + 3);
            }
            assert_eq!(active_subscriptions(), before + 2);
        }
        assert_eq!(active_subscriptions(), before);
    }
}
