//! Pipeline coordinator - main orchestrator for a scheduling run
//!
//! This module wires the event API adapter and the scheduling logic into
//! the fetch, compute, submit cycle. A run is one-shot: any failure aborts
//! the run before the submission step, so the endpoint never receives a
//! partial result.

use crate::adapters::api::EventApiClient;
use crate::config::SummitConfig;
use crate::core::pipeline::report::PipelineReport;
use crate::core::schedule::{build_summaries, SequenceSelector};
use crate::domain::date::EventDate;
use crate::domain::summary::SubmissionPayload;
use crate::domain::{Result, SummitError};
use std::time::Instant;

/// Pipeline coordinator
pub struct Pipeline {
    config: SummitConfig,
    api_client: EventApiClient,
    selector: SequenceSelector,
}

impl Pipeline {
    /// Create a new pipeline from configuration
    pub fn new(config: SummitConfig) -> Result<Self> {
        let api_client = EventApiClient::new(config.api.clone())?;
        let selector = SequenceSelector::new(config.schedule.lookback);

        Ok(Self {
            config,
            api_client,
            selector,
        })
    }

    /// Execute the pipeline
    ///
    /// This is the main entry point for a scheduling run. It:
    /// 1. Validates configuration
    /// 2. Fetches the partner dataset
    /// 3. Builds one summary per country
    /// 4. Submits the result (unless dry run is enabled)
    /// 5. Returns a report of what happened
    pub async fn execute(&self) -> Result<PipelineReport> {
        let start_time = Instant::now();

        tracing::info!(
            base_url = %self.api_client.base_url(),
            lookback = self.selector.lookback(),
            dry_run = self.config.pipeline.dry_run,
            "Starting scheduling pipeline"
        );

        // Validate configuration; CLI flags may have changed it after load
        if let Err(e) = self.config.validate() {
            return Err(SummitError::Configuration(e));
        }

        let dataset = self.api_client.fetch_partners().await?;
        let summaries = build_summaries(&dataset.partners, &self.selector)?;

        let mut report = PipelineReport::new();
        report.partners_fetched = dataset.partners.len();
        report.countries_summarized = summaries.len();
        report.countries_scheduled = summaries
            .iter()
            .filter(|summary| summary.start_date.is_some())
            .count();

        for summary in &summaries {
            let start_date = summary
                .start_date
                .as_ref()
                .map_or("none", EventDate::as_str);
            tracing::info!(
                country = %summary.name,
                start_date = %start_date,
                attendee_count = summary.attendee_count,
                "Country summarized"
            );
        }

        if self.config.pipeline.dry_run {
            tracing::info!("Dry run enabled - skipping result submission");
        } else {
            let response = self.api_client.submit_countries(&summaries).await?;
            tracing::debug!(response = %response, "Submission response");
            report.record_submission(response);
        }

        let report = report.with_duration(start_time.elapsed());
        report.log_summary();

        Ok(report)
    }

    /// Fetch and compute without submitting
    ///
    /// Returns the document that `execute` would POST, for display.
    pub async fn preview(&self) -> Result<SubmissionPayload> {
        let dataset = self.api_client.fetch_partners().await?;
        let countries = build_summaries(&dataset.partners, &self.selector)?;

        Ok(SubmissionPayload { countries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{
        ApiConfig, ApplicationConfig, LoggingConfig, PipelineConfig, RetryConfig, ScheduleConfig,
    };
    use crate::config::{secret_string, Environment};

    fn test_config() -> SummitConfig {
        SummitConfig {
            application: ApplicationConfig {
                log_level: "info".to_string(),
            },
            environment: Environment::Development,
            api: ApiConfig {
                base_url: "https://events.example.com".to_string(),
                dataset_path: "/api/dataset".to_string(),
                result_path: "/api/result".to_string(),
                user_key: secret_string("test-key".to_string()),
                timeout_seconds: 5,
                tls_verify: true,
                retry: RetryConfig::default(),
            },
            schedule: ScheduleConfig::default(),
            pipeline: PipelineConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_pipeline_creation() {
        let pipeline = Pipeline::new(test_config()).unwrap();
        assert_eq!(pipeline.api_client.base_url(), "https://events.example.com");
        assert_eq!(pipeline.selector.lookback(), 2);
    }

    #[tokio::test]
    async fn test_execute_rejects_invalid_config() {
        let mut config = test_config();
        config.schedule.lookback = 0;

        // Selector construction accepts any value; validation catches it
        let pipeline = Pipeline::new(config).unwrap();
        let result = pipeline.execute().await;

        assert!(matches!(result, Err(SummitError::Configuration(_))));
    }
}
