//! Segring - Segmented Ring FIFO Queue
//!
//! An unbounded first-in-first-out queue that stores its elements in a ring
//! of fixed-capacity segments. Segments that have been fully drained are not
//! returned to the allocator; they stay linked in the ring and are reused by
//! later pushes. Under a steady push/pop churn (request/response style
//! workloads) the queue quickly stops allocating altogether.
//!
//! # Key Features
//!
//! - Amortized O(1) push and pop with no per-element allocation
//! - Drained segments recycled in FIFO order instead of freed
//! - Only the very first segment grows in place (4 → 16 → 64 slots);
//!   every later segment is a fixed 256-slot block
//! - `Queue::new()` is const and allocation-free; the default value is an
//!   empty queue ready to use
//!
//! Not thread-safe: all operations take `&mut self`, so the borrow checker
//! enforces the single-owner discipline. Wrap the queue in a mutex or feed
//! it from a channel if multiple threads need access.
//!
//! # Example
//!
//! ```
//! use segring::Queue;
//!
//! let mut queue = Queue::new();
//! queue.push("a");
//! queue.push("b");
//!
//! assert_eq!(queue.front(), Some(&"a"));
//! assert_eq!(queue.pop(), Some("a"));
//! assert_eq!(queue.pop(), Some("b"));
//! assert_eq!(queue.pop(), None);
//! ```

mod config;
mod invariants;
mod queue;
mod segment;

pub use queue::Queue;
