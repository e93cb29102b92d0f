//! In-memory record store
//!
//! Holds the user and trade sequences for the lifetime of the process.
//! Both sequences sit behind one mutex that is held for the whole of each
//! operation, so every read, append and rename is atomic with respect to
//! the others. Callers only ever receive owned copies.

use std::ops::Range;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::{debug, info};
use types::errors::StoreError;
use types::seed;
use types::trade::Trade;
use types::user::{User, UserId};

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    trades: Vec<Trade>,
}

#[derive(Debug, Default)]
pub struct RecordStore {
    inner: Mutex<Collections>,
}

impl RecordStore {
    pub fn new(users: Vec<User>, trades: Vec<Trade>) -> Self {
        Self {
            inner: Mutex::new(Collections { users, trades }),
        }
    }

    /// Store loaded with the startup seed data.
    pub fn seeded() -> Self {
        let store = Self::new(seed::users(Utc::now()), seed::trades());
        info!(
            users = store.user_count(),
            trades = store.trade_count(),
            "Record store seeded"
        );
        store
    }

    // A panic while holding the lock cannot leave the vectors half-updated:
    // every mutation is a single push/extend/assignment.
    fn lock(&self) -> MutexGuard<'_, Collections> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every user whose id equals `user_id`, in stored order.
    pub fn find_users_by_id(&self, user_id: UserId) -> Vec<User> {
        let users: Vec<User> = self
            .lock()
            .users
            .iter()
            .filter(|user| user.id == user_id)
            .cloned()
            .collect();
        debug!(user_id, matches = users.len(), "User lookup");
        users
    }

    /// Skip `offset` trades, then take at most `limit`.
    ///
    /// Out-of-range values never fail: see [`page_bounds`].
    pub fn list_trades(&self, limit: i64, offset: i64) -> Vec<Trade> {
        let collections = self.lock();
        let range = page_bounds(collections.trades.len(), limit, offset);
        debug!(limit, offset, start = range.start, end = range.end, "Trade page");
        collections.trades[range].to_vec()
    }

    /// Rename the first user with a matching id and return the updated copy.
    ///
    /// Later users sharing the same id are left untouched.
    pub fn rename_user(
        &self,
        user_id: UserId,
        new_name: impl Into<String>,
    ) -> Result<User, StoreError> {
        let mut collections = self.lock();
        let user = collections
            .users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(StoreError::UserNotFound { user_id })?;

        user.rename(new_name);
        info!(user_id, name = %user.name, "User renamed");
        Ok(user.clone())
    }

    /// Append `new_trades` in order and return the whole resulting sequence.
    pub fn append_trades(&self, new_trades: Vec<Trade>) -> Vec<Trade> {
        let mut collections = self.lock();
        let added = new_trades.len();
        collections.trades.extend(new_trades);
        info!(added, total = collections.trades.len(), "Trades appended");
        collections.trades.clone()
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    pub fn trade_count(&self) -> usize {
        self.lock().trades.len()
    }
}

/// Index range selected by `limit`/`offset` over a sequence of `len` items.
///
/// `offset` is clamped to `[0, len]`. A `limit` of zero or less selects
/// nothing; otherwise at most `limit` items from `offset` on.
pub fn page_bounds(len: usize, limit: i64, offset: i64) -> Range<usize> {
    let start = usize::try_from(offset).unwrap_or(0).min(len);
    if limit <= 0 {
        return start..start;
    }
    let take = usize::try_from(limit).unwrap_or(usize::MAX);
    start..start.saturating_add(take).min(len)
}
