use thiserror::Error;

use crate::parse::MAX_SUPPORTED_REPEAT_COUNT;

pub type Result<T> = std::result::Result<T, StrmakeError>;

#[derive(Error, Debug)]
pub enum StrmakeError {
    /// The underlying parser rejected the pattern.
    #[error("parse error: {0}")]
    Parse(#[from] regex_syntax::Error),

    /// A parser flag the generator cannot honor.
    #[error("{0} not supported")]
    UnsupportedFlag(&'static str),

    #[error(
        "repetition count {count} exceeds the maximum supported count {max}",
        max = MAX_SUPPORTED_REPEAT_COUNT
    )]
    RepeatCountExceeded { count: u32 },

    /// A character class with no members; nothing can be sampled from it.
    #[error("cannot generate from an empty character class")]
    EmptyCharClass,
}
