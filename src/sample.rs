//! Sampling primitives: codepoints out of character classes and counts out
//! of repetition bounds.

use rand::Rng;
use rand::rngs::StdRng;
use regex_syntax::hir::{ClassBytes, ClassUnicode, ClassUnicodeRange};

use crate::args::GeneratorArgs;

/// Printable ASCII, the range the any-char nodes sample from instead of
/// the full codepoint space.
const PRINTABLE: (u32, u32) = (0x20, 0x7E);

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

/// True when `class` is the desugared `.` (any char except `\n`).
pub(crate) fn is_any_char_except_nl(class: &ClassUnicode) -> bool {
    matches!(class.ranges(),
        [a, b] if a.start() == '\0' && a.end() == '\x09'
            && b.start() == '\x0B' && b.end() == char::MAX)
}

/// True when `class` is the desugared `(?s:.)` (any char).
pub(crate) fn is_any_char(class: &ClassUnicode) -> bool {
    matches!(class.ranges(), [r] if r.start() == '\0' && r.end() == char::MAX)
}

/// One codepoint from printable ASCII. Never `\n`.
pub(crate) fn printable_char(rng: &mut StdRng) -> char {
    let cp = weighted_span_pick([PRINTABLE].into_iter(), rng)
        .expect("printable range is non-empty");
    char::from_u32(cp).expect("printable range contains only scalar values")
}

/// One codepoint from printable ASCII or `\n`.
pub(crate) fn printable_or_nl_char(rng: &mut StdRng) -> char {
    let cp = weighted_span_pick([PRINTABLE, (0x0A, 0x0A)].into_iter(), rng)
        .expect("printable range is non-empty");
    char::from_u32(cp).expect("printable range contains only scalar values")
}

/// One codepoint uniformly over the union of a Unicode class's ranges,
/// weighted by range size.
pub(crate) fn unicode_class_char(class: &ClassUnicode, rng: &mut StdRng) -> char {
    let spans = class
        .ranges()
        .iter()
        .flat_map(|r| split_surrogate_gap(span_of(r)));
    let cp = weighted_span_pick(spans, rng).expect("character class is empty");
    char::from_u32(cp).expect("class sampling produced a surrogate codepoint")
}

/// One byte uniformly over the union of a byte class's ranges, emitted as
/// the codepoint of the same value.
pub(crate) fn byte_class_char(class: &ClassBytes, rng: &mut StdRng) -> char {
    let spans = class
        .ranges()
        .iter()
        .map(|r| (u32::from(r.start()), u32::from(r.end())));
    let cp = weighted_span_pick(spans, rng).expect("character class is empty");
    char::from_u32(cp).expect("byte values are scalar values")
}

/// Resolve repetition bounds against the configured caps and draw a count
/// uniformly from the resulting inclusive interval.
///
/// An unbounded upper bound becomes `args.max_unbounded_repeat_count`, and
/// only then does the configured floor apply to the lower bound.
///
/// # Panics
///
/// Panics when the resolved bounds are out of order, e.g. `a{20,}` under a
/// cap of 10.
pub(crate) fn repeat_count(
    min: u32,
    max: Option<u32>,
    args: &GeneratorArgs,
    rng: &mut StdRng,
) -> u32 {
    let (lo, hi) = match max {
        Some(hi) => (min, hi),
        None => (
            min.max(args.min_unbounded_repeat_count),
            args.max_unbounded_repeat_count,
        ),
    };
    if lo > hi {
        panic!("repeat bounds out of order: {lo} > {hi}");
    }
    rng.random_range(lo..=hi)
}

fn span_of(range: &ClassUnicodeRange) -> (u32, u32) {
    (u32::from(range.start()), u32::from(range.end()))
}

/// A `char` range may conceptually span the surrogate gap, which contains
/// no scalar values; split it so every span holds scalars only.
fn split_surrogate_gap((lo, hi): (u32, u32)) -> impl Iterator<Item = (u32, u32)> + Clone {
    let spans_gap = lo < SURROGATE_START && hi > SURROGATE_END;
    let head = if spans_gap { (lo, SURROGATE_START - 1) } else { (lo, hi) };
    let tail = spans_gap.then_some((SURROGATE_END + 1, hi));
    std::iter::once(head).chain(tail)
}

/// Pick one value uniformly over the union of inclusive spans: total the
/// widths, draw into the total, then locate the span holding the draw.
fn weighted_span_pick<I>(spans: I, rng: &mut StdRng) -> Option<u32>
where
    I: Iterator<Item = (u32, u32)> + Clone,
{
    let total: u64 = spans
        .clone()
        .map(|(lo, hi)| u64::from(hi - lo + 1))
        .sum();
    if total == 0 {
        return None;
    }

    let mut draw = rng.random_range(0..total);
    for (lo, hi) in spans {
        let width = u64::from(hi - lo + 1);
        if draw < width {
            return Some(lo + draw as u32);
        }
        draw -= width;
    }
    None
}
