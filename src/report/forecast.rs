//! Forecast payload model
//!
//! Typed form of the forecast file the report renderer consumes: structured
//! weather data keyed by a timestamp, split into an analysis section and a
//! forecast section.
//!
//! ## File Format
//! ```json
//! {
//!   "analysis": [
//!     { "phenomenon": "rain", "timestamp": "2024-01-01T06:00", "message": "..." }
//!   ],
//!   "forecast": [
//!     { "phenomenon": "wind", "timestamp": "2024-01-02T12:00", "message": "..." }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// A full forecast payload: past analysis plus upcoming events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    /// Observed conditions, first section of a report
    pub analysis: Vec<ForecastEntry>,

    /// Predicted events, second section of a report
    pub forecast: Vec<ForecastEntry>,
}

/// One weather event, observed or predicted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Phenomenon name (rain, wind, hail, ...)
    pub phenomenon: String,

    /// Event timestamp, ISO-8601 minute precision
    pub timestamp: String,

    /// Free-text description shown in the report
    pub message: String,
}

impl Forecast {
    /// Load a forecast payload from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            IngestError::Serialization(format!("forecast file {}: {}", path.display(), e))
        })
    }

    /// Group predicted events by phenomenon
    ///
    /// Groups appear in order of each phenomenon's first occurrence, and
    /// entries keep their order within a group, so renderers can emit one
    /// block per phenomenon.
    pub fn grouped_forecast(&self) -> Vec<(&str, Vec<&ForecastEntry>)> {
        let mut groups: Vec<(&str, Vec<&ForecastEntry>)> = Vec::new();

        for entry in &self.forecast {
            match groups.iter_mut().find(|(name, _)| *name == entry.phenomenon) {
                Some((_, entries)) => entries.push(entry),
                None => groups.push((entry.phenomenon.as_str(), vec![entry])),
            }
        }

        groups
    }
}

impl ForecastEntry {
    /// Whether this entry describes a severe event
    ///
    /// Severe entries get highlighted by renderers. Matching is
    /// case-insensitive on the message text.
    pub fn is_severe(&self) -> bool {
        self.message.to_lowercase().contains("severe")
    }
}
