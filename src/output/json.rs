//! JSON serialization for experiment reports.

use crate::result::ExperimentReport;

/// Serialize an ExperimentReport to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for ExperimentReport).
pub fn to_json(report: &ExperimentReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize an ExperimentReport to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for ExperimentReport).
pub fn to_json_pretty(report: &ExperimentReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::fixtures::sample_report;

    #[test]
    fn test_to_json() {
        let report = sample_report();
        let json = to_json(&report).unwrap();
        assert!(json.contains("\"arithmetic_ns\":40.0"));
        assert!(json.contains("\"label\":\"1B\""));
    }

    #[test]
    fn test_to_json_pretty() {
        let report = sample_report();
        let json = to_json_pretty(&report).unwrap();
        assert!(json.contains('\n')); // Pretty print has newlines
        let parsed: ExperimentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
