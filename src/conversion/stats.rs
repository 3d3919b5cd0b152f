//! Statistics for conversion runs

use crate::conversion::engine::DocumentMetadata;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Statistics for one conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Number of bookmarks written
    pub records_converted: usize,
    /// Whether a header row was discarded
    pub header_skipped: bool,
    /// Input CSV size in bytes
    pub input_size_bytes: u64,
    /// Output document size in bytes
    pub output_size_bytes: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Records converted per second
    pub records_per_sec: f32,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl ConversionStatistics {
    /// Build statistics from document metadata and total elapsed time
    pub fn from_metadata(metadata: &DocumentMetadata, elapsed: Duration) -> Self {
        let records_per_sec = if elapsed.as_secs_f64() > 0.0 {
            (metadata.record_count as f64 / elapsed.as_secs_f64()) as f32
        } else {
            0.0
        };

        Self {
            records_converted: metadata.record_count,
            header_skipped: metadata.header_skipped,
            input_size_bytes: metadata.input_size,
            output_size_bytes: metadata.output_size,
            processing_time_ms: elapsed.as_millis() as u64,
            records_per_sec,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        format!(
            "Converted {} bookmark(s) in {}ms - {} bytes in, {} bytes out{}",
            self.records_converted,
            self.processing_time_ms,
            self.input_size_bytes,
            self.output_size_bytes,
            if self.header_skipped {
                " (header row skipped)"
            } else {
                ""
            }
        )
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
