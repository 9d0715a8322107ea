use std::cell::RefCell;
use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use regex_syntax::hir::Hir;

use crate::error::{Result, StrmakeError};
use crate::flags::Flags;
use crate::generator::SubGenerator;

/// Upper bound substituted for open-ended repeats (`*`, `+`, `{n,}`) when
/// [`GeneratorArgs::max_unbounded_repeat_count`] is left unset.
pub const DEFAULT_MAX_UNBOUNDED_REPEAT_COUNT: u32 = 10;

/// Replaces the output of a capture group during generation.
///
/// Receives the zero-based capture index in traversal order, the group
/// name (empty for unnamed groups), the group's subtree, a
/// [`SubGenerator`] that samples the subtree from the shared RNG, and the
/// generator's args. The returned string is emitted verbatim in place of
/// the group's output; it is not validated against the group's subpattern.
pub type CaptureGroupHandler =
    Box<dyn Fn(usize, &str, &Hir, &SubGenerator<'_>, &GeneratorArgs) -> String>;

/// Configuration for a [`Generator`](crate::Generator).
///
/// All knobs are public fields; construct with `Default` and set what you
/// need. Validation and defaulting happen once when the generator is
/// built, after which the args are read-only.
#[derive(Default)]
pub struct GeneratorArgs {
    /// Seeded random source. Left unset, a fresh OS-seeded source is
    /// created, so output differs between runs.
    pub rng_source: Option<StdRng>,

    /// Flags forwarded to the pattern parser. [`Flags::UNICODE_GROUPS`]
    /// is rejected.
    pub flags: Flags,

    /// Floor substituted for the lower bound of open-ended repeats whose
    /// own lower bound is smaller.
    pub min_unbounded_repeat_count: u32,

    /// Upper bound substituted for open-ended repeats. Zero means unset:
    /// it defaults to [`DEFAULT_MAX_UNBOUNDED_REPEAT_COUNT`], or to
    /// `min_unbounded_repeat_count` when that is the only bound given.
    /// A bounded repeat with a lower bound above this cap (e.g. `a{20,}`
    /// under the default of 10) panics at generation time.
    pub max_unbounded_repeat_count: u32,

    /// Intercepts capture groups; see [`CaptureGroupHandler`].
    pub capture_group_handler: Option<CaptureGroupHandler>,

    rng: Option<RefCell<StdRng>>,
}

impl GeneratorArgs {
    /// Args with a deterministic RNG seeded from `seed` and everything
    /// else defaulted.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng_source: Some(StdRng::seed_from_u64(seed)),
            ..Self::default()
        }
    }

    /// Validate and default the configuration. Idempotent; the first
    /// successful call fixes the state.
    pub(crate) fn initialize(&mut self) -> Result<()> {
        if self.rng.is_some() {
            return Ok(());
        }

        if self.flags.contains(Flags::UNICODE_GROUPS) {
            return Err(StrmakeError::UnsupportedFlag("UnicodeGroups"));
        }

        // Unbounded repeats are bounded. An unset max follows the min if
        // one was given, so a min-only config stays satisfiable.
        if self.max_unbounded_repeat_count == 0 && self.min_unbounded_repeat_count == 0 {
            self.max_unbounded_repeat_count = DEFAULT_MAX_UNBOUNDED_REPEAT_COUNT;
        } else if self.max_unbounded_repeat_count == 0 {
            self.max_unbounded_repeat_count = self.min_unbounded_repeat_count;
        } else if self.min_unbounded_repeat_count > self.max_unbounded_repeat_count {
            panic!(
                "min_unbounded_repeat_count ({}) > max_unbounded_repeat_count ({})",
                self.min_unbounded_repeat_count, self.max_unbounded_repeat_count
            );
        }

        let rng = self.rng_source.take().unwrap_or_else(StdRng::from_os_rng);
        self.rng = Some(RefCell::new(rng));

        tracing::trace!(
            min = self.min_unbounded_repeat_count,
            max = self.max_unbounded_repeat_count,
            flags = ?self.flags,
            "generator args initialized"
        );
        Ok(())
    }

    /// The configured RNG. Every sampling decision draws from this cell.
    ///
    /// # Panics
    ///
    /// Panics if the args have not yet been initialized by constructing a
    /// generator from them.
    pub fn rng(&self) -> &RefCell<StdRng> {
        self.rng
            .as_ref()
            .expect("GeneratorArgs RNG accessed before initialization; build a Generator first")
    }
}

impl fmt::Debug for GeneratorArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorArgs")
            .field("flags", &self.flags)
            .field("min_unbounded_repeat_count", &self.min_unbounded_repeat_count)
            .field("max_unbounded_repeat_count", &self.max_unbounded_repeat_count)
            .field(
                "capture_group_handler",
                &self.capture_group_handler.as_ref().map(|_| "…"),
            )
            .field("initialized", &self.rng.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_handles_empty_args() {
        let mut args = GeneratorArgs::default();
        args.initialize().unwrap();
        assert_eq!(
            args.max_unbounded_repeat_count,
            DEFAULT_MAX_UNBOUNDED_REPEAT_COUNT
        );
    }

    #[test]
    fn unicode_groups_not_supported() {
        let mut args = GeneratorArgs {
            flags: Flags::UNICODE_GROUPS,
            ..Default::default()
        };
        let err = args.initialize().unwrap_err();
        assert_eq!(err.to_string(), "UnicodeGroups not supported");
    }

    #[test]
    #[should_panic(expected = "min_unbounded_repeat_count (2) > max_unbounded_repeat_count (1)")]
    fn panics_on_inverted_repeat_bounds() {
        let mut args = GeneratorArgs {
            min_unbounded_repeat_count: 2,
            max_unbounded_repeat_count: 1,
            ..Default::default()
        };
        let _ = args.initialize();
    }

    #[test]
    fn allows_equal_repeat_bounds() {
        let mut args = GeneratorArgs {
            min_unbounded_repeat_count: 1,
            max_unbounded_repeat_count: 1,
            ..Default::default()
        };
        args.initialize().unwrap();
        assert_eq!(args.max_unbounded_repeat_count, 1);
    }

    #[test]
    fn min_only_raises_max_to_min() {
        let mut args = GeneratorArgs {
            min_unbounded_repeat_count: 200,
            ..Default::default()
        };
        args.initialize().unwrap();
        assert_eq!(args.max_unbounded_repeat_count, 200);
    }

    #[test]
    fn initialize_is_idempotent() {
        let mut args = GeneratorArgs::from_seed(0);
        args.initialize().unwrap();
        args.initialize().unwrap();
        assert_eq!(
            args.max_unbounded_repeat_count,
            DEFAULT_MAX_UNBOUNDED_REPEAT_COUNT
        );
    }

    #[test]
    #[should_panic(expected = "before initialization")]
    fn rng_panics_before_initialization() {
        let args = GeneratorArgs::default();
        let _ = args.rng();
    }

    #[test]
    fn rng_available_after_initialization() {
        let mut args = GeneratorArgs::from_seed(7);
        args.initialize().unwrap();
        let _ = args.rng().borrow_mut();
    }
}
