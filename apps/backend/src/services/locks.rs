//! Per-session mutual exclusion.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

/// Registry of per-game async locks.
///
/// `start` and `end` hold a game's lock for their full duration
/// (including external store and channel calls) so no two operations
/// interleave on the same session. Operations on different sessions
/// proceed fully in parallel.
#[derive(Default)]
pub struct GameLocks {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl GameLocks {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    pub fn lock_for(&self, game_id: i64) -> Arc<Mutex<()>> {
        self.locks
            .entry(game_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drop a session's lock entry once the session itself is gone.
    ///
    /// A waiter still holding the old `Arc` can overlap with a caller
    /// that re-creates the entry through `lock_for`. Both then operate
    /// on a deleted id and fail `NotFound` on their first load, so the
    /// overlap never touches live state.
    pub fn forget(&self, game_id: i64) {
        self.locks.remove(&game_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_game_shares_a_lock() {
        let locks = GameLocks::new();
        let a = locks.lock_for(7);
        let b = locks.lock_for(7);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn forget_hands_out_a_fresh_lock() {
        let locks = GameLocks::new();
        let old = locks.lock_for(7);
        locks.forget(7);
        let fresh = locks.lock_for(7);
        assert!(!Arc::ptr_eq(&old, &fresh));
    }

    #[test]
    fn different_games_get_different_locks() {
        let locks = GameLocks::new();
        let a = locks.lock_for(1);
        let b = locks.lock_for(2);
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn lock_serializes_critical_sections() {
        let locks = Arc::new(GameLocks::new());
        let counter = Arc::new(std::sync::atomic::AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let locks = Arc::clone(&locks);
            let counter = Arc::clone(&counter);
            handles.push(tokio::spawn(async move {
                let lock = locks.lock_for(42);
                let _guard = lock.lock().await;
                let seen = counter.load(std::sync::atomic::Ordering::SeqCst);
                tokio::task::yield_now().await;
                counter.store(seen + 1, std::sync::atomic::Ordering::SeqCst);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(counter.load(std::sync::atomic::Ordering::SeqCst), 8);
    }
}
