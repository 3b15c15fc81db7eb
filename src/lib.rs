// Library interface for refine-wordlist
// This allows integration tests to drive the curator directly

pub mod cli;
pub mod curator;
pub mod error;
pub mod logging;
pub mod related;
pub mod wordfile;

// Re-export commonly used items for easier testing
pub use curator::{CuratorInterface, Curator, Decisions, RunSummary};
pub use error::CurateError;
pub use related::{find_related_words, is_auto_accepted, normalize_word};
pub use wordfile::{WordlistPaths, load_words_from_file, load_words_from_str};
