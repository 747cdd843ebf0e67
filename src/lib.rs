//! Bounded admissions queue.
//!
//! Orders admission records by priority in a fixed-capacity binary min-heap
//! and always exposes the record that goes next.

pub mod prelude;

pub use heap::Heap;
pub use service::{AdmissionQueue, AdmissionReport};
