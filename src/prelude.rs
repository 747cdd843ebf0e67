pub use base::error::{HeapError, OptionsError};
pub use base::options::QueueOptions;
pub use base::record::{AdmissionRecord, Gender, Triage};
pub use heap::{Heap, IntoIterSorted};
pub use service::{AdmissionQueue, AdmissionReport};
