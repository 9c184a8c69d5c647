//! Data models module
//! 
//! Contains the question record, the option label set, and the ordered
//! question store loaded from CSV.

pub mod question;
pub mod store;

// Re-export commonly used types
pub use question::{OptionLabel, Question, RawQuestion};
pub use store::QuestionStore;
