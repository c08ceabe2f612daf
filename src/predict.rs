//! Typed view of the classifier's reply schema.
//!
//! The backend answers `{"predictions": [{"label": ..., "score": ...}]}`.
//! The raw JSON stays the canonical displayed form; this module adds a
//! best-effort ranked summary on top of it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

/// Pull the prediction list out of an arbitrary reply, if it matches the
/// known schema. Absent or differently shaped replies yield an empty list,
/// never an error.
pub fn extract_predictions(value: &Value) -> Vec<Prediction> {
    let mut predictions: Vec<Prediction> = value
        .get("predictions")
        .and_then(|p| serde_json::from_value(p.clone()).ok())
        .unwrap_or_default();
    predictions.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    predictions
}

/// Ranked one-line-per-class summary, highest score first.
pub fn format_summary(predictions: &[Prediction]) -> String {
    predictions
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {:<20} {:>5.1}%", i + 1, p.label, p.score * 100.0))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_predictions_sorted() {
        let value = json!({
            "predictions": [
                {"label": "no_tumor", "score": 0.05},
                {"label": "glioma", "score": 0.87},
                {"label": "meningioma", "score": 0.08}
            ]
        });
        let predictions = extract_predictions(&value);
        assert_eq!(predictions.len(), 3);
        assert_eq!(predictions[0].label, "glioma");
        assert_eq!(predictions[2].label, "no_tumor");
    }

    #[test]
    fn test_extract_predictions_missing_key() {
        let value = json!({"message": "hello"});
        assert!(extract_predictions(&value).is_empty());
    }

    #[test]
    fn test_extract_predictions_wrong_shape() {
        let value = json!({"predictions": "not an array"});
        assert!(extract_predictions(&value).is_empty());
    }

    #[test]
    fn test_format_summary() {
        let predictions = vec![
            Prediction { label: "glioma".to_string(), score: 0.87 },
            Prediction { label: "no_tumor".to_string(), score: 0.05 },
        ];
        let summary = format_summary(&predictions);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. glioma"));
        assert!(lines[0].contains("87.0%"));
        assert!(lines[1].contains("5.0%"));
    }

    #[test]
    fn test_format_summary_empty() {
        assert_eq!(format_summary(&[]), "");
    }
}
