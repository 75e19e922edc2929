// src/api/types.rs
// Wire types for the calculator HTTP API

use serde::{Deserialize, Serialize};

/// Body of every /calculate response.
///
/// Untagged so the JSON is either `{"result": n}` or `{"error": "..."}`,
/// never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalculationResult {
    Success { result: f64 },
    Failure { error: String },
}

impl CalculationResult {
    pub fn success(result: f64) -> Self {
        Self::Success { result }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure { error: error.into() }
    }

    pub fn result(&self) -> Option<f64> {
        match self {
            Self::Success { result } => Some(*result),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}

/// Response for GET /health
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serializes_result_only() {
        let value = serde_json::to_value(CalculationResult::success(2.0)).unwrap();
        assert_eq!(value, json!({"result": 2.0}));
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failure_serializes_error_only() {
        let value = serde_json::to_value(CalculationResult::failure("Invalid input")).unwrap();
        assert_eq!(value, json!({"error": "Invalid input"}));
        assert!(value.get("result").is_none());
    }

    #[test]
    fn test_deserialize_picks_variant_by_field() {
        let ok: CalculationResult = serde_json::from_str(r#"{"result": 7}"#).unwrap();
        assert_eq!(ok.result(), Some(7.0));
        assert_eq!(ok.error(), None);

        let err: CalculationResult =
            serde_json::from_str(r#"{"error": "Cannot divide by zero!"}"#).unwrap();
        assert_eq!(err.error(), Some("Cannot divide by zero!"));
        assert_eq!(err.result(), None);
    }
}
