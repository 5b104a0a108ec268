pub mod extractor;
pub mod patterns;
pub mod types;

pub use extractor::extract_entities;
pub use types::EntitySet;
