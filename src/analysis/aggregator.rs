use tracing::debug;

use crate::models::{ReputationSignal, RiskAssessment, ScamCategory, Verdict};

/// Floor applied to the risk score when the reputation oracle flags a URL.
const REPUTATION_SCORE_FLOOR: u8 = 90;

/// Red flag appended on reputation escalation.
const SAFE_BROWSING_FLAG: &str = "URL flagged by Google Safe Browsing";

/// Sentence appended to the explanation on reputation escalation.
const SAFE_BROWSING_NOTE: &str = "Google Safe Browsing flagged this URL as dangerous.";

/// Marker surfaced when the classifier replied with something other than
/// the expected JSON object.
pub const PARSE_FAILURE_MARKER: &str = "AI response parsing failed.";

/// Marker surfaced when the classifier could not be reached at all.
/// Distinct from [`PARSE_FAILURE_MARKER`] so a caller can tell
/// "classifier said safe" from "classifier was unreachable".
pub const UNAVAILABLE_MARKER: &str = "AI classifier unavailable.";

/// What came back from the generative classifier, before aggregation.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierOutcome {
    /// The model answered and its text parsed as the structured object.
    Assessment(RiskAssessment),
    /// The model answered but its text was not valid JSON.
    Unparseable,
    /// Transport failure or timeout reaching the classifier.
    Unavailable,
}

impl ClassifierOutcome {
    /// Parse the model's raw text against the output contract. The empty
    /// object `{}` is valid and yields an empty assessment.
    pub fn from_raw(text: &str) -> Self {
        match serde_json::from_str::<RiskAssessment>(text) {
            Ok(assessment) => ClassifierOutcome::Assessment(assessment),
            Err(e) => {
                debug!(error = %e, "classifier output did not parse");
                ClassifierOutcome::Unparseable
            }
        }
    }
}

/// Resolve the classifier's output and the reputation signal into the
/// final risk object. Never fails: every path yields a
/// RiskAssessment-shaped value.
///
/// When the reputation oracle flagged the URL, the result is a strict
/// override toward danger and never a downgrade: `is_scam` is forced,
/// the score is floored at 90 (a higher classifier score survives), the
/// verdict is re-derived through the banding table, and the fixed Safe
/// Browsing flag and explanation sentence are appended after whatever
/// the classifier produced. An existing scam category is preserved;
/// only an absent one becomes `Other`.
pub fn aggregate(outcome: ClassifierOutcome, reputation: ReputationSignal) -> RiskAssessment {
    let mut report = match outcome {
        ClassifierOutcome::Assessment(assessment) => assessment,
        ClassifierOutcome::Unparseable => RiskAssessment::degraded(PARSE_FAILURE_MARKER),
        ClassifierOutcome::Unavailable => RiskAssessment::degraded(UNAVAILABLE_MARKER),
    };

    if !reputation.listed {
        return report;
    }

    let score = report.risk_score.unwrap_or(0).max(REPUTATION_SCORE_FLOOR);
    report.is_scam = Some(true);
    report.risk_score = Some(score);
    report.verdict = Some(Verdict::from_score(score));
    report.red_flags.push(SAFE_BROWSING_FLAG.to_string());
    report.explanation_en = Some(match report.explanation_en.take() {
        Some(existing) if !existing.is_empty() => format!("{} {}", existing, SAFE_BROWSING_NOTE),
        _ => SAFE_BROWSING_NOTE.to_string(),
    });
    if report.scam_category.is_none() {
        report.scam_category = Some(ScamCategory::Other);
    }

    report
}
