// Hospital domain module
// Contains the hospital entity and its write models

#![allow(clippy::module_inception)]

pub mod hospital;

// Re-export main types for convenience
pub use hospital::{Hospital, HospitalDraft, HospitalInput};
