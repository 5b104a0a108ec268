pub mod engine;
pub mod orchestrator;
pub mod types;

pub use engine::evaluate;
pub use orchestrator::recommend_tests;
pub use types::{Recommendation, MATCH_CONFIDENCE, MIN_CONFIDENCE, SUPPRESSED_CONFIDENCE};
