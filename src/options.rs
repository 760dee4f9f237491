//! Tokenize options shared by the cursor and the bulk split engine.

use bitflags::bitflags;

bitflags! {
    /// Independent flags controlling how delimiters are treated.
    ///
    /// `INCLUDE_ALL_DELIMITERS` takes precedence over `INCLUDE_1ST_DELIMITER`
    /// when both are set. `COMPRESS_DELIMITERS` has no effect while all
    /// delimiters are included, since the delimiter run is then part of the
    /// token itself.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct SplitOptions: u8 {
        /// Treat a run of adjacent delimiters as a single separator.
        const COMPRESS_DELIMITERS = 1 << 0;
        /// Append the first delimiter byte of a separator to the token before it.
        const INCLUDE_1ST_DELIMITER = 1 << 1;
        /// Append the whole run of delimiter bytes to the token before it.
        const INCLUDE_ALL_DELIMITERS = 1 << 2;
    }
}

impl SplitOptions {
    /// No compression, delimiters excluded from tokens.
    pub const DEFAULT: SplitOptions = SplitOptions::empty();

    /// Whether adjacent delimiters collapse into one separator event.
    #[inline(always)]
    pub fn compress(self) -> bool {
        self.contains(SplitOptions::COMPRESS_DELIMITERS) && !self.include_all()
    }

    /// Whether exactly one delimiter byte is appended to each token.
    #[inline(always)]
    pub fn include_first(self) -> bool {
        self.contains(SplitOptions::INCLUDE_1ST_DELIMITER) && !self.include_all()
    }

    /// Whether the whole delimiter run is appended to each token.
    #[inline(always)]
    pub fn include_all(self) -> bool {
        self.contains(SplitOptions::INCLUDE_ALL_DELIMITERS)
    }
}
