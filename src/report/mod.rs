//! Report Module
//!
//! Contracts for the external report collaborators. The ingestion core never
//! renders documents or sends mail itself; it produces the store the report
//! generator reads, and these traits fix the shape of that hand-off.
//!
//! ## Collaborators
//! - [`ReportRenderer`]: customer record + forecast payload → one document
//!   artifact, named deterministically from the customer's name
//! - [`MailTransport`]: recipient address + document artifact → delivery
//!   attempt; configured through [`crate::config::MailConfig`], supplied
//!   externally and never hard-coded

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::Record;

mod forecast;

pub use forecast::{Forecast, ForecastEntry};

/// Renders one report document for one customer
pub trait ReportRenderer {
    /// Produce a document artifact from a resolved customer record and a
    /// forecast payload. Returns the path of the rendered document.
    fn render(&self, customer: &Record, forecast: &Forecast) -> Result<PathBuf>;
}

/// Delivers a rendered document to a recipient
pub trait MailTransport {
    /// Attempt delivery, reporting success or failure
    fn deliver(&self, recipient: &str, document: &Path) -> Result<()>;
}
