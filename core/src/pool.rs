//! Free-list pooling for per-frame allocations.
//!
//! Command buffers and scratch arrays are acquired and released many times per
//! frame. [`Pool<T>`] keeps released values (cleared, but with their `Vec`
//! capacity intact) and hands them back out on the next acquire, so steady-state
//! recording does not allocate.
//!
//! # Example
//!
//! ```
//! use framekit_core::pool::{Pool, Poolable};
//!
//! #[derive(Debug, Default)]
//! struct Scratch {
//!     data: Vec<u8>,
//! }
//!
//! impl Poolable for Scratch {
//!     fn new_empty() -> Self {
//!         Self::default()
//!     }
//!     fn reset(&mut self) {
//!         self.data.clear();
//!     }
//! }
//!
//! let mut pool = Pool::<Scratch>::new();
//! let mut scratch = pool.acquire();
//! scratch.data.extend_from_slice(&[1, 2, 3]);
//! pool.release(scratch);
//!
//! // The next acquire reuses the allocation, already cleared.
//! let scratch = pool.acquire();
//! assert!(scratch.data.is_empty());
//! assert!(scratch.data.capacity() >= 3);
//! ```

/// Trait for types that can be pooled and reused.
///
/// Implementors must be able to create an empty instance and clear their
/// contents while preserving allocated capacity.
pub trait Poolable {
    /// Create a new empty instance.
    fn new_empty() -> Self;

    /// Reset the value to an empty state, preserving allocated capacity.
    ///
    /// For example, call `Vec::clear()` rather than replacing with a new `Vec`.
    fn reset(&mut self);
}

/// A free list of reusable values.
#[derive(Debug)]
pub struct Pool<T: Poolable> {
    free: Vec<T>,
    created: usize,
}

impl<T: Poolable> Pool<T> {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            free: Vec::new(),
            created: 0,
        }
    }

    /// Take a value out of the pool, creating a new one if none is free.
    ///
    /// The returned value is always in its reset state.
    pub fn acquire(&mut self) -> T {
        match self.free.pop() {
            Some(value) => value,
            None => {
                self.created += 1;
                T::new_empty()
            }
        }
    }

    /// Return a value to the pool. It is reset before being stored.
    pub fn release(&mut self, mut value: T) {
        value.reset();
        self.free.push(value);
    }

    /// Number of values currently waiting in the free list.
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Total number of values this pool has ever created.
    pub fn created(&self) -> usize {
        self.created
    }
}

impl<T: Poolable> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}
