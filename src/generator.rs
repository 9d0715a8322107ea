//! The generation engine: a recursive walk over the parsed tree that
//! emits one conforming string per call.

use rand::Rng;
use regex_syntax::hir::{Class, Hir, HirKind};

use crate::args::GeneratorArgs;
use crate::error::Result;
use crate::parse;
use crate::sample;

/// Generates random strings matching a compiled pattern.
///
/// Built once per pattern, then [`generate`](Self::generate) can be called
/// any number of times. Each call walks the syntax tree with a fresh
/// output buffer, drawing every decision (codepoints, alternation
/// branches, repeat counts) from the RNG owned by the args, so a seeded
/// source makes the output sequence fully reproducible.
///
/// A generator is single-owner: the RNG sits behind a `RefCell`, so the
/// type is not `Sync`. Generators built separately from the same pattern
/// are fully independent.
pub struct Generator {
    hir: Hir,
    args: GeneratorArgs,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator").field("hir", &self.hir).finish_non_exhaustive()
    }
}

impl Generator {
    /// Compile `pattern` with default [`GeneratorArgs`].
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_args(pattern, GeneratorArgs::default())
    }

    /// Compile `pattern` with explicit args. Args are validated first, so
    /// flag and bound errors surface before parse errors.
    pub fn with_args(pattern: &str, mut args: GeneratorArgs) -> Result<Self> {
        args.initialize()?;
        let hir = parse::parse_pattern(pattern, args.flags)?;
        tracing::debug!(pattern, "generator compiled");
        Ok(Self { hir, args })
    }

    /// Produce one string matching the pattern.
    ///
    /// Anchors (`^`, `$`, `\b`, …) are zero-width and emit nothing, so
    /// `$abc^` generates `abc`. Capture groups are replaced by the
    /// configured handler's output when one is set; that output is not
    /// re-validated against the group's subpattern.
    pub fn generate(&self) -> String {
        let mut out = String::new();
        let mut ctx = GenContext {
            args: &self.args,
            next_capture_index: 0,
        };
        generate_node(&self.hir, &mut ctx, &mut out);
        tracing::trace!(len = out.len(), "string generated");
        out
    }

    /// The initialized args, including the RNG cell.
    pub fn args(&self) -> &GeneratorArgs {
        &self.args
    }
}

/// A generation handle over one capture group's subtree, passed to
/// [`CaptureGroupHandler`](crate::CaptureGroupHandler)s.
///
/// Draws from the same RNG as the parent walk, so calling it consumes
/// randomness from the shared stream. It may be called zero or more
/// times; each call is an independent sample of the subtree. Only valid
/// for the duration of the handler invocation it was created for.
pub struct SubGenerator<'a> {
    hir: &'a Hir,
    args: &'a GeneratorArgs,
}

impl SubGenerator<'_> {
    /// Produce one string matching the group's subtree.
    pub fn generate(&self) -> String {
        let mut out = String::new();
        let mut ctx = GenContext {
            args: self.args,
            next_capture_index: 0,
        };
        generate_node(self.hir, &mut ctx, &mut out);
        out
    }
}

/// State threaded through one top-level walk: the shared args and the
/// traversal-order capture counter.
struct GenContext<'a> {
    args: &'a GeneratorArgs,
    next_capture_index: usize,
}

fn generate_node(hir: &Hir, ctx: &mut GenContext<'_>, out: &mut String) {
    match hir.kind() {
        HirKind::Empty => {}

        HirKind::Literal(lit) => out.push_str(&String::from_utf8_lossy(&lit.0)),

        HirKind::Class(Class::Unicode(cls)) => {
            let mut rng = ctx.args.rng().borrow_mut();
            // The parser desugars `.` into a class; the any-char shapes
            // get the narrowed printable sampling, everything else is
            // sampled uniformly over the range union.
            let c = if sample::is_any_char_except_nl(cls) {
                sample::printable_char(&mut rng)
            } else if sample::is_any_char(cls) {
                sample::printable_or_nl_char(&mut rng)
            } else {
                sample::unicode_class_char(cls, &mut rng)
            };
            out.push(c);
        }

        HirKind::Class(Class::Bytes(cls)) => {
            let mut rng = ctx.args.rng().borrow_mut();
            out.push(sample::byte_class_char(cls, &mut rng));
        }

        // Zero-width assertions; generation has no positional semantics.
        HirKind::Look(_) => {}

        HirKind::Repetition(rep) => {
            let count = {
                let mut rng = ctx.args.rng().borrow_mut();
                sample::repeat_count(rep.min, rep.max, ctx.args, &mut rng)
            };
            for _ in 0..count {
                generate_node(&rep.sub, ctx, out);
            }
        }

        HirKind::Capture(cap) => {
            let index = ctx.next_capture_index;
            ctx.next_capture_index += 1;

            match &ctx.args.capture_group_handler {
                Some(handler) => {
                    let name = cap.name.as_deref().unwrap_or("");
                    let sub = SubGenerator {
                        hir: &cap.sub,
                        args: ctx.args,
                    };
                    tracing::trace!(index, name, "capture group handler invoked");
                    out.push_str(&handler(index, name, &cap.sub, &sub, ctx.args));
                }
                None => generate_node(&cap.sub, ctx, out),
            }
        }

        HirKind::Concat(subs) => {
            for sub in subs {
                generate_node(sub, ctx, out);
            }
        }

        HirKind::Alternation(subs) => {
            let pick = {
                let mut rng = ctx.args.rng().borrow_mut();
                rng.random_range(0..subs.len())
            };
            generate_node(&subs[pick], ctx, out);
        }
    }
}
