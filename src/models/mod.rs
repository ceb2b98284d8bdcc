pub mod assessment;

pub use assessment::{ReputationSignal, RiskAssessment, ScamCategory, Verdict};
