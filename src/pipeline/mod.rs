pub mod entities;
pub mod extraction;
pub mod processor;
