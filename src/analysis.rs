/// Simulated analysis backend
///
/// Stands in for the remote CassavaAI services. Both calls sleep for a
/// fixed processing window and answer with a canned payload; the types and
/// signatures are the contract a real backend client will keep.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::form::PredictionRequest;

/// How long the placeholder backend "works" before answering
pub const PROCESSING_DELAY: Duration = Duration::from_secs(3);

/// Failures the analysis services can report.
/// The simulated services never fail, but callers already handle the
/// error branch so swapping in a real client changes nothing upstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The service could not be reached or gave no usable answer
    #[error("analysis service unavailable: {0}")]
    Unavailable(String),
}

/// Classification returned by the disease detection service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Disease label, or "healthy"
    pub label: String,
    /// Classifier confidence in [0, 1]
    pub confidence: f32,
    /// Suggested treatment, when the service has one
    pub remediation: Option<String>,
}

/// Estimate returned by the yield prediction service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldEstimate {
    pub tonnes_per_hectare: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
}

/// Run the disease analysis on one photo.
pub async fn analyze_image(_photo: PathBuf) -> Result<Diagnosis, AnalysisError> {
    // TODO: replace with the real upload + inference call
    tokio::time::sleep(PROCESSING_DELAY).await;

    Ok(Diagnosis {
        label: "healthy".to_string(),
        confidence: 0.0,
        remediation: None,
    })
}

/// Run the yield prediction on one validated form record.
pub async fn predict_yield(_request: PredictionRequest) -> Result<YieldEstimate, AnalysisError> {
    // TODO: replace with the real prediction call
    tokio::time::sleep(PROCESSING_DELAY).await;

    Ok(YieldEstimate {
        tonnes_per_hectare: 0.0,
        confidence_low: 0.0,
        confidence_high: 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_analyze_image_waits_out_the_delay_then_succeeds() {
        let started = tokio::time::Instant::now();
        let result = analyze_image(PathBuf::from("/photos/leaf.jpg")).await;

        assert!(result.is_ok());
        assert!(started.elapsed() >= PROCESSING_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_predict_yield_succeeds() {
        let request = PredictionRequest {
            plant_height_cm: 180.0,
            stem_diameter_cm: 2.5,
            leaf_count: 45.0,
            plant_age_months: 8.0,
            temperature_celsius: 28.0,
            planting_density_per_ha: 10_000.0,
            soil_moisture: "moderate".to_string(),
            fertilizer: "organic".to_string(),
            variety: "mu51".to_string(),
        };

        let estimate = predict_yield(request).await.unwrap();
        assert!(estimate.confidence_low <= estimate.confidence_high);
    }

    #[test]
    fn test_diagnosis_round_trips_through_json() {
        let diagnosis = Diagnosis {
            label: "cassava mosaic disease".to_string(),
            confidence: 0.93,
            remediation: Some("Remove and destroy infected plants".to_string()),
        };

        let json = serde_json::to_string(&diagnosis).unwrap();
        let restored: Diagnosis = serde_json::from_str(&json).unwrap();
        assert_eq!(diagnosis, restored);
    }
}
