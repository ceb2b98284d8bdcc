pub mod aggregator;

pub use aggregator::{aggregate, ClassifierOutcome};
pub use aggregator::{PARSE_FAILURE_MARKER, UNAVAILABLE_MARKER};
