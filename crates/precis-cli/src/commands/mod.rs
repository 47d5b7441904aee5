//! Command implementations.

pub mod input;
pub mod keywords;
pub mod summarize;

pub use self::input::read_input;
pub use self::keywords::execute_keywords;
pub use self::summarize::execute_summarize;
