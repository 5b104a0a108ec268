pub mod audit;
pub mod config;
pub mod pipeline;
pub mod recommend; // rule evaluation + explanation orchestration
pub mod rules;

pub use pipeline::entities::EntitySet;
pub use pipeline::processor::{AnalysisOutcome, ReportProcessor};
pub use recommend::Recommendation;
pub use rules::{Rule, RuleStore, Urgency};
