pub mod queue;

pub use queue::{AdmissionQueue, AdmissionReport};
