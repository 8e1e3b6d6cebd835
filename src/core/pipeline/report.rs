//! Pipeline run reporting
//!
//! This module defines the structure returned by a pipeline run for
//! logging and CLI display.

use std::time::Duration;

/// Summary of one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Number of partner records fetched from the dataset endpoint
    pub partners_fetched: usize,

    /// Number of countries summarized
    pub countries_summarized: usize,

    /// Number of countries that received a start date
    pub countries_scheduled: usize,

    /// Whether the result was posted to the submission endpoint
    pub submitted: bool,

    /// Raw response body from the submission endpoint, when posted
    pub response_body: Option<String>,

    /// Duration of the run
    pub duration: Duration,
}

impl PipelineReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            partners_fetched: 0,
            countries_summarized: 0,
            countries_scheduled: 0,
            submitted: false,
            response_body: None,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a completed submission and the server's response body
    pub fn record_submission(&mut self, response_body: String) {
        self.submitted = true;
        self.response_body = Some(response_body);
    }

    /// Share of summarized countries that received a start date
    pub fn scheduled_rate(&self) -> f64 {
        if self.countries_summarized == 0 {
            return 100.0;
        }
        (self.countries_scheduled as f64 / self.countries_summarized as f64) * 100.0
    }

    /// Log the report
    pub fn log_summary(&self) {
        tracing::info!(
            partners = self.partners_fetched,
            countries = self.countries_summarized,
            scheduled = self.countries_scheduled,
            scheduled_rate = format!("{:.2}%", self.scheduled_rate()),
            submitted = self.submitted,
            duration_ms = self.duration.as_millis() as u64,
            "Pipeline completed"
        );
    }
}

impl Default for PipelineReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_creation() {
        let report = PipelineReport::new();

        assert_eq!(report.partners_fetched, 0);
        assert_eq!(report.countries_summarized, 0);
        assert_eq!(report.countries_scheduled, 0);
        assert!(!report.submitted);
        assert!(report.response_body.is_none());
        assert_eq!(report.duration, Duration::from_secs(0));
    }

    #[test]
    fn test_report_with_duration() {
        let report = PipelineReport::new().with_duration(Duration::from_secs(3));

        assert_eq!(report.duration, Duration::from_secs(3));
    }

    #[test]
    fn test_record_submission() {
        let mut report = PipelineReport::new();
        report.record_submission("{\"status\":\"ok\"}".to_string());

        assert!(report.submitted);
        assert_eq!(report.response_body.as_deref(), Some("{\"status\":\"ok\"}"));
    }

    #[test]
    fn test_scheduled_rate() {
        let mut report = PipelineReport::new();
        report.countries_summarized = 4;
        report.countries_scheduled = 3;

        assert_eq!(report.scheduled_rate(), 75.0);

        report.countries_summarized = 0;
        assert_eq!(report.scheduled_rate(), 100.0);
    }
}
