/// A position within a source document.
///
/// Lexers compute these while scanning; nothing mutates a `SourcePosition`
/// after it is produced.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col`: character count (not bytes) from the start of the current line
/// - `byte_offset`: byte offset within the whole document
///
/// Use [`SourcePosition::display_line()`] and
/// [`SourcePosition::display_col()`] for the 1-based values shown to humans.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, col: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character column within the current line.
    ///
    /// This increments by 1 for each character regardless of its UTF-8
    /// length.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// 1-based line number for diagnostics.
    pub fn display_line(&self) -> usize {
        self.line + 1
    }

    /// 1-based column number for diagnostics.
    pub fn display_col(&self) -> usize {
        self.col + 1
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.display_line(), self.display_col())
    }
}
