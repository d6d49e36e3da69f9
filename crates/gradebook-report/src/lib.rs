//! gradebook-report: Report generation for gradebook.

pub mod error;
pub mod text;

pub use error::ReportError;
