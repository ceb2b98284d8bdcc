use serde::{Deserialize, Deserializer, Serialize};

/// Severity band over the 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Safe,
    Caution,
    Danger,
}

impl Verdict {
    /// Band a risk score: Safe [0,29], Caution [30,69], Danger [70,100].
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => Verdict::Safe,
            30..=69 => Verdict::Caution,
            _ => Verdict::Danger,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "Safe",
            Verdict::Caution => "Caution",
            Verdict::Danger => "Danger",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-guess scam taxonomy from the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScamCategory {
    #[serde(rename = "KYC")]
    Kyc,
    Job,
    Bank,
    Other,
    None,
}

/// Maps the classifier's `scam_category` onto the taxonomy. The model
/// sometimes emits `""` or null for "no category"; both read as absent.
/// An unknown non-empty label still counts as a category being present.
fn category_from_any<'de, D>(deserializer: D) -> Result<Option<ScamCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        None | Some("") => None,
        Some("KYC") => Some(ScamCategory::Kyc),
        Some("Job") => Some(ScamCategory::Job),
        Some("Bank") => Some(ScamCategory::Bank),
        Some("None") => Some(ScamCategory::None),
        Some(_) => Some(ScamCategory::Other),
    })
}

/// The unit of output: built fresh per request from the classifier's
/// parsed text, escalated at most once by the aggregator when the
/// reputation signal fires, then serialized and discarded.
///
/// Absent fields are skipped on serialization so a degraded payload
/// comes out as exactly `{"error": "..."}` plus whatever escalation set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_scam: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,

    #[serde(
        default,
        deserialize_with = "category_from_any",
        skip_serializing_if = "Option::is_none"
    )]
    pub scam_category: Option<ScamCategory>,

    /// Append-only during aggregation: order preserved, duplicates allowed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub red_flags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation_en: Option<String>,

    /// Degradation marker; absent on a healthy classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RiskAssessment {
    /// An otherwise-empty assessment carrying a degradation marker.
    pub fn degraded(marker: &str) -> Self {
        Self {
            error: Some(marker.to_string()),
            ..Default::default()
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Per-request reputation verdict. No lifecycle of its own: produced when
/// the request carries a URL candidate and consumed by the aggregator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReputationSignal {
    pub listed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banding_safe_range() {
        assert_eq!(Verdict::from_score(0), Verdict::Safe);
        assert_eq!(Verdict::from_score(15), Verdict::Safe);
        assert_eq!(Verdict::from_score(29), Verdict::Safe);
    }

    #[test]
    fn test_banding_caution_range() {
        assert_eq!(Verdict::from_score(30), Verdict::Caution);
        assert_eq!(Verdict::from_score(50), Verdict::Caution);
        assert_eq!(Verdict::from_score(69), Verdict::Caution);
    }

    #[test]
    fn test_banding_danger_range() {
        assert_eq!(Verdict::from_score(70), Verdict::Danger);
        assert_eq!(Verdict::from_score(90), Verdict::Danger);
        assert_eq!(Verdict::from_score(100), Verdict::Danger);
    }

    #[test]
    fn test_verdict_serializes_as_literal() {
        assert_eq!(serde_json::to_string(&Verdict::Danger).unwrap(), "\"Danger\"");
        let parsed: Verdict = serde_json::from_str("\"Caution\"").unwrap();
        assert_eq!(parsed, Verdict::Caution);
    }

    #[test]
    fn test_category_kyc_rename() {
        let parsed: ScamCategory = serde_json::from_str("\"KYC\"").unwrap();
        assert_eq!(parsed, ScamCategory::Kyc);
        assert_eq!(serde_json::to_string(&ScamCategory::Kyc).unwrap(), "\"KYC\"");
    }

    #[test]
    fn test_empty_category_reads_as_absent() {
        let a: RiskAssessment =
            serde_json::from_str(r#"{"scam_category": ""}"#).unwrap();
        assert!(a.scam_category.is_none());

        let b: RiskAssessment =
            serde_json::from_str(r#"{"scam_category": null}"#).unwrap();
        assert!(b.scam_category.is_none());
    }

    #[test]
    fn test_unknown_category_counts_as_present() {
        let a: RiskAssessment =
            serde_json::from_str(r#"{"scam_category": "Romance"}"#).unwrap();
        assert_eq!(a.scam_category, Some(ScamCategory::Other));
    }

    #[test]
    fn test_empty_object_parses_to_empty_assessment() {
        let a: RiskAssessment = serde_json::from_str("{}").unwrap();
        assert_eq!(a, RiskAssessment::default());
        assert!(!a.is_degraded());
    }

    #[test]
    fn test_degraded_serializes_to_single_key() {
        let a = RiskAssessment::degraded("AI response parsing failed.");
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "AI response parsing failed."})
        );
    }

    #[test]
    fn test_full_assessment_roundtrip() {
        let raw = r#"{
            "is_scam": true,
            "risk_score": 85,
            "verdict": "Danger",
            "scam_category": "Bank",
            "red_flags": ["urgency language", "lookalike domain"],
            "explanation_en": "Impersonates a bank login page."
        }"#;
        let a: RiskAssessment = serde_json::from_str(raw).unwrap();
        assert_eq!(a.is_scam, Some(true));
        assert_eq!(a.risk_score, Some(85));
        assert_eq!(a.verdict, Some(Verdict::Danger));
        assert_eq!(a.scam_category, Some(ScamCategory::Bank));
        assert_eq!(a.red_flags.len(), 2);
        assert!(a.error.is_none());
    }
}
