//! CLI command implementations.

pub mod convert;
pub mod repl;
pub mod search;
pub mod translate;

pub use convert::ConvertCommand;
pub use repl::ReplCommand;
pub use search::SearchCommand;
pub use translate::TranslateCommand;
