//! Database handle contract shared by repositories.
//!
//! # Responsibility
//! - Give repositories scoped access to a live connection.
//! - Offer a thread-shareable handle for multi-threaded callers.
//!
//! # Invariants
//! - A handle never outlives the connection it was built from.
//! - Access through `SharedDb` is serialized by one mutex per connection.

use super::DbError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Capability to run work against an externally owned connection.
///
/// Implementations decide how the connection is reached (borrowed, locked,
/// pooled); callers only see a `&Connection` for the duration of `op`.
pub trait DbHandle {
    fn with_conn<T, E>(&self, op: impl FnOnce(&Connection) -> Result<T, E>) -> Result<T, E>
    where
        E: From<DbError>;
}

impl DbHandle for Connection {
    fn with_conn<T, E>(&self, op: impl FnOnce(&Connection) -> Result<T, E>) -> Result<T, E>
    where
        E: From<DbError>,
    {
        op(self)
    }
}

impl<H: DbHandle + ?Sized> DbHandle for &H {
    fn with_conn<T, E>(&self, op: impl FnOnce(&Connection) -> Result<T, E>) -> Result<T, E>
    where
        E: From<DbError>,
    {
        (**self).with_conn(op)
    }
}

/// Cloneable connection handle that can be moved across threads.
#[derive(Debug, Clone)]
pub struct SharedDb {
    inner: Arc<Mutex<Connection>>,
}

impl SharedDb {
    /// Wraps a ready connection. Ownership moves into the shared handle.
    pub fn new(conn: Connection) -> Self {
        Self {
            inner: Arc::new(Mutex::new(conn)),
        }
    }
}

impl DbHandle for SharedDb {
    fn with_conn<T, E>(&self, op: impl FnOnce(&Connection) -> Result<T, E>) -> Result<T, E>
    where
        E: From<DbError>,
    {
        let conn = self.inner.lock().map_err(|_| DbError::PoisonedHandle)?;
        op(&conn)
    }
}
