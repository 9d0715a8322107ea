//! Bridge to the external regex parser.
//!
//! Patterns are parsed by `regex-syntax` into its high-level intermediate
//! representation ([`Hir`]), which is the tree the generator walks. The
//! bridge configures the parser from [`Flags`] and then enforces the
//! representability limits the generator relies on.

use regex_syntax::ParserBuilder;
use regex_syntax::hir::{Class, Hir, HirKind};

use crate::error::{Result, StrmakeError};
use crate::flags::Flags;

/// Largest repetition count accepted in an explicit `{n,m}`.
///
/// Counts above this are rejected when the generator is built, keeping the
/// worst-case output length bounded by the pattern itself.
pub const MAX_SUPPORTED_REPEAT_COUNT: u32 = 1000;

/// Parse `pattern` under `flags` and validate the resulting tree.
pub(crate) fn parse_pattern(pattern: &str, flags: Flags) -> Result<Hir> {
    let mut builder = ParserBuilder::new();
    builder
        .case_insensitive(flags.contains(Flags::FOLD_CASE))
        .multi_line(flags.contains(Flags::MULTI_LINE))
        .dot_matches_new_line(flags.contains(Flags::DOT_NL))
        .swap_greed(flags.contains(Flags::SWAP_GREED))
        .ignore_whitespace(flags.contains(Flags::IGNORE_WHITESPACE));

    let hir = builder.build().parse(pattern)?;
    validate(&hir)?;
    tracing::trace!(pattern, "pattern parsed");
    Ok(hir)
}

/// Reject constructs the generator cannot sample from: repetition counts
/// above [`MAX_SUPPORTED_REPEAT_COUNT`] and empty character classes.
fn validate(hir: &Hir) -> Result<()> {
    match hir.kind() {
        HirKind::Empty | HirKind::Literal(_) | HirKind::Look(_) => Ok(()),
        HirKind::Class(Class::Unicode(cls)) if cls.ranges().is_empty() => {
            Err(StrmakeError::EmptyCharClass)
        }
        HirKind::Class(Class::Bytes(cls)) if cls.ranges().is_empty() => {
            Err(StrmakeError::EmptyCharClass)
        }
        HirKind::Class(_) => Ok(()),
        HirKind::Repetition(rep) => {
            let bound = rep.max.unwrap_or(rep.min);
            if rep.min > MAX_SUPPORTED_REPEAT_COUNT || bound > MAX_SUPPORTED_REPEAT_COUNT {
                return Err(StrmakeError::RepeatCountExceeded {
                    count: rep.min.max(bound),
                });
            }
            validate(&rep.sub)
        }
        HirKind::Capture(cap) => validate(&cap.sub),
        HirKind::Concat(subs) | HirKind::Alternation(subs) => {
            subs.iter().try_for_each(validate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_literal() {
        let hir = parse_pattern("abc", Flags::default()).unwrap();
        assert!(matches!(hir.kind(), HirKind::Literal(_)));
    }

    #[test]
    fn fold_case_turns_literals_into_classes() {
        let hir = parse_pattern("a", Flags::FOLD_CASE).unwrap();
        assert!(matches!(hir.kind(), HirKind::Class(_)));
    }

    #[test]
    fn surfaces_parse_errors() {
        let err = parse_pattern("(abc", Flags::default()).unwrap_err();
        assert!(matches!(err, StrmakeError::Parse(_)));
    }

    #[test]
    fn rejects_exact_repeat_above_cap() {
        let err = parse_pattern("a{1001}", Flags::default()).unwrap_err();
        assert!(matches!(
            err,
            StrmakeError::RepeatCountExceeded { count: 1001 }
        ));
    }

    #[test]
    fn rejects_range_repeat_above_cap() {
        let err = parse_pattern("a{2,1001}", Flags::default()).unwrap_err();
        assert!(matches!(err, StrmakeError::RepeatCountExceeded { .. }));
    }

    #[test]
    fn rejects_nested_repeat_above_cap() {
        let err = parse_pattern("(b|a{1001})", Flags::default()).unwrap_err();
        assert!(matches!(err, StrmakeError::RepeatCountExceeded { .. }));
    }

    #[test]
    fn accepts_repeat_at_cap() {
        parse_pattern("a{0,1000}", Flags::default()).unwrap();
    }

    #[test]
    fn accepts_unbounded_repeat() {
        parse_pattern("a{2,}", Flags::default()).unwrap();
    }
}
