//! Inflammation data model.
//!
//! Holds the patient-by-day measurement [`Table`] consumed by the analysis
//! crate, and the clinical records ([`Patient`], [`Doctor`], [`Observation`])
//! built by direct construction.

pub mod doctor;
pub mod error;
pub mod observation;
pub mod patient;
pub mod person;
pub mod table;

pub use doctor::{Doctor, SharedPatient};
pub use error::{Result, TableError};
pub use observation::Observation;
pub use patient::Patient;
pub use person::Person;
pub use table::Table;
