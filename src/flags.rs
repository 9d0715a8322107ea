use bitflags::bitflags;

bitflags! {
    /// Parser flags forwarded to the regex parser.
    ///
    /// Most bits map directly onto `regex_syntax::ParserBuilder` options.
    /// `PERL` and `PERL_X` are accepted for compatibility with engines
    /// where Perl escapes and named captures are opt-in; the parser used
    /// here enables both unconditionally. `UNICODE_GROUPS` is rejected
    /// when a generator is constructed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u16 {
        /// Case-insensitive matching (`i`). Literals are folded into
        /// character classes by the parser.
        const FOLD_CASE = 1 << 0;
        /// `^` and `$` match at line boundaries (`m`).
        const MULTI_LINE = 1 << 1;
        /// `.` matches `\n` (`s`).
        const DOT_NL = 1 << 2;
        /// Swap the meaning of `x*` and `x*?` (`U`). Greediness has no
        /// effect on generation; retained for parser fidelity.
        const SWAP_GREED = 1 << 3;
        /// Ignore whitespace and allow `#` comments in the pattern (`x`).
        const IGNORE_WHITESPACE = 1 << 4;
        /// Perl character classes (`\d`, `\s`, `\w` and negations).
        const PERL = 1 << 5;
        /// Perl extensions such as named capture groups.
        const PERL_X = 1 << 6;
        /// Unicode character property groups (`\p{...}`). Not supported.
        const UNICODE_GROUPS = 1 << 7;
    }
}
