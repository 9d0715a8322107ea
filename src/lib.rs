//! Random string generation from regular expressions.
//!
//! Given a pattern, `strmake` produces strings the same pattern matches.
//! It is built for test-data fabrication, fuzzing seeds, and
//! property-based testing harnesses. Parsing is delegated to
//! `regex-syntax`; the engine walks the parsed tree and samples
//! codepoints, alternation branches, and repetition counts from an RNG
//! that can be seeded for reproducible output.
//!
//! ```
//! let s = strmake::generate("[ab]{5}").unwrap();
//! assert!(regex::Regex::new("^[ab]{5}$").unwrap().is_match(&s));
//! ```
//!
//! Seed the RNG for deterministic output:
//!
//! ```
//! use strmake::{Generator, GeneratorArgs};
//!
//! let a = Generator::with_args(r"\d{5}", GeneratorArgs::from_seed(0)).unwrap();
//! let b = Generator::with_args(r"\d{5}", GeneratorArgs::from_seed(0)).unwrap();
//! assert_eq!(a.generate(), b.generate());
//! ```
//!
//! Capture groups can be intercepted and rewritten:
//!
//! ```
//! use strmake::{Generator, GeneratorArgs};
//!
//! let mut args = GeneratorArgs::from_seed(0);
//! args.capture_group_handler = Some(Box::new(|_index, name, _group, sub, _args| {
//!     format!("<{name}>{}</{name}>", sub.generate())
//! }));
//!
//! let generator = Generator::with_args("(?P<word>[a-z]{3})", args).unwrap();
//! let s = generator.generate();
//! assert!(s.starts_with("<word>") && s.ends_with("</word>"));
//! ```
//!
//! # Semantics worth knowing
//!
//! - Open-ended repeats (`*`, `+`, `{n,}`) are capped by
//!   [`GeneratorArgs::max_unbounded_repeat_count`] (default 10) and
//!   floored by `min_unbounded_repeat_count`.
//! - Repetition counts are drawn uniformly, so both endpoints of a bound
//!   show up given enough samples.
//! - `.` samples printable ASCII and never produces `\n`; `(?s:.)` adds
//!   `\n` to the range.
//! - Anchors are zero-width and ignored; `$abc^` generates `abc`.
//! - No attempt is made at uniform sampling over the pattern's language.
//!
//! A generator is cheap to keep around and reuse; it is not `Sync`, and
//! generators constructed separately never share RNG state.

// Configuration and errors
pub mod args;
pub mod error;
pub mod flags;

// Parsing bridge and sampling primitives
mod parse;
mod sample;

// The generation engine
pub mod generator;

pub use args::{CaptureGroupHandler, DEFAULT_MAX_UNBOUNDED_REPEAT_COUNT, GeneratorArgs};
pub use error::{Result, StrmakeError};
pub use flags::Flags;
pub use generator::{Generator, SubGenerator};
pub use parse::MAX_SUPPORTED_REPEAT_COUNT;

/// Re-export of the parser's syntax tree type, so capture handlers can be
/// written without a direct `regex-syntax` dependency.
pub use regex_syntax::hir::Hir;

/// Generate one string matching `pattern` with default settings.
///
/// Equivalent to building a [`Generator`] with [`GeneratorArgs::default`]
/// and calling [`Generator::generate`] once.
pub fn generate(pattern: &str) -> Result<String> {
    Ok(Generator::new(pattern)?.generate())
}
