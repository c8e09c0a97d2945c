//! Type aliases for commonly used shared-state types.
//!
//! Complex types like `Arc<Mutex<Vec<T>>>` are hard to read at a glance.
//! These aliases give the recurring patterns meaningful names and keep the
//! locking strategy (`parking_lot`) in one place.

use parking_lot::Mutex;
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Use when mutable state is shared between the move stream and the
/// command/event layer. Uses `parking_lot::Mutex` for better performance
/// than `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// A thread-safe optional wrapper for lazily-initialized cross-thread state.
pub type ThreadSafeOption<T> = Arc<Mutex<Option<T>>>;

/// A thread-safe vector for cross-thread collection management.
pub type ThreadSafeVec<T> = Arc<Mutex<Vec<T>>>;

/// Wrap a value in a [`ThreadSafe`] handle
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
