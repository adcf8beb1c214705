//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str` input.
//!
//! Token text borrows directly from the source string. Lexical problems are
//! reported in-band as [`GraphQLTokenKind::Error`] tokens so the caller
//! decides how to surface them; [`tokenize()`](crate::tokenize) and the
//! parser both stop at the first one.
//!
//! ```rust
//! use graphplan_parser::token::GraphQLTokenKind;
//! use graphplan_parser::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> = StrGraphQLTokenSource::new("{ name }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::Name("name"),
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::token::GraphQLTriviaTokenVec;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;

const INT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Int-Value";
const FLOAT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Float-Value";
const STRING_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-String-Value";

/// Lexes GraphQL tokens from a `&str`.
///
/// The `'src` lifetime ties token text to the source string.
pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,

    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    curr_line: usize,

    /// Counts characters, not bytes.
    curr_col: usize,

    /// Set after a `\r` so that a following `\n` does not count as a second
    /// line break.
    last_char_was_cr: bool,

    /// Trivia (comments, commas) accumulated before the next token.
    pending_trivia: GraphQLTriviaTokenVec<'src>,

    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col: 0,
            last_char_was_cr: false,
            pending_trivia: smallvec![],
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.curr_line, self.curr_col, self.curr_byte_offset)
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character, tracking lines (`\n`, `\r`, `\r\n`) and
    /// character columns.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' => {
                self.curr_line += 1;
                self.curr_col = 0;
            },
            '\r' => {
                self.curr_line += 1;
                self.curr_col = 0;
                self.last_char_was_cr = true;
            },
            _ => {
                self.curr_col += 1;
                self.last_char_was_cr = false;
            },
        }
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes characters while `pred` holds.
    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.curr_position())
    }

    fn make_token(
        &mut self,
        kind: GraphQLTokenKind<'src>,
        span: GraphQLSourceSpan,
    ) -> GraphQLToken<'src> {
        if let GraphQLTokenKind::Error { message, .. } = &kind {
            log::trace!("lexical error at {}: {message}", span.start_inclusive);
        }
        GraphQLToken {
            kind,
            preceding_trivia: std::mem::take(&mut self.pending_trivia),
            span,
        }
    }

    fn make_error(
        &mut self,
        start: SourcePosition,
        message: impl Into<String>,
        error_notes: GraphQLErrorNotes,
    ) -> GraphQLToken<'src> {
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::error(message, error_notes), span)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        loop {
            self.consume_while(|ch| matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{FEFF}'));

            let start = self.curr_position();
            let Some(ch) = self.peek_char() else {
                let span = self.make_span(start);
                return self.make_token(GraphQLTokenKind::Eof, span);
            };

            if let Some(kind) = single_char_punctuator(ch) {
                self.consume();
                let span = self.make_span(start);
                return self.make_token(kind, span);
            }

            match ch {
                '#' => self.lex_comment(start),
                ',' => {
                    self.consume();
                    let span = self.make_span(start);
                    self.pending_trivia.push(GraphQLTriviaToken::Comma { span });
                },
                '.' => return self.lex_dot_or_ellipsis(start),
                '"' => return self.lex_string(start),
                c if is_name_start(c) => return self.lex_name(start),
                c if c == '-' || c.is_ascii_digit() => return self.lex_number(start),
                _ => return self.lex_invalid_character(start),
            }
        }
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// A comment runs from `#` to the end of the line.
    ///
    /// Comments never contain a line terminator, so the column advances by
    /// the comment's character count.
    fn lex_comment(&mut self, start: SourcePosition) {
        self.consume();
        let rest = self.remaining();
        let content_len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let value = &rest[..content_len];

        self.curr_byte_offset += content_len;
        self.curr_col += value.chars().count();

        let span = self.make_span(start);
        self.pending_trivia.push(GraphQLTriviaToken::Comment { value, span });
    }

    // =========================================================================
    // Dots
    // =========================================================================

    /// `...` is the only legal dot sequence. Interrupted sequences on one
    /// line (`. ..`, `.. .`) get a hint; a lone `.` does not.
    fn lex_dot_or_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("...") {
            for _ in 0..3 {
                self.consume();
            }
            let span = self.make_span(start);
            return self.make_token(GraphQLTokenKind::Ellipsis, span);
        }

        self.consume();
        let mut last_dot_end = self.curr_position();
        let mut dot_count = 1;
        while dot_count < 3 {
            self.consume_while(|ch| matches!(ch, ' ' | '\t'));
            if self.peek_char() != Some('.') {
                break;
            }
            self.consume();
            last_dot_end = self.curr_position();
            dot_count += 1;
        }

        let span = GraphQLSourceSpan::new(start, last_dot_end);
        let text = span.byte_span();
        let written = &self.source[text.start as usize..text.end as usize];
        let (message, notes) = match (dot_count, written) {
            (1, _) => ("Unexpected `.`".to_string(), smallvec![]),
            (2, "..") => (
                "Unexpected `..` (use `...` for spread operator)".to_string(),
                smallvec![GraphQLErrorNote::help(
                    "Add one more `.` to form the spread operator `...`"
                )],
            ),
            _ => (
                format!("Unexpected `{written}`"),
                smallvec![GraphQLErrorNote::help(
                    "These dots may have been intended to form a `...` spread operator. \
                     Try removing the spacing between the dots."
                )],
            ),
        };
        self.make_token(GraphQLTokenKind::error(message, notes), span)
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Names match `/[_A-Za-z][_0-9A-Za-z]*/`. `true`, `false`, and `null`
    /// get distinct token kinds.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let name_start = self.curr_byte_offset;
        self.consume_while(is_name_continue);
        let name = &self.source[name_start..self.curr_byte_offset];
        let span = self.make_span(start);

        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::Name(name),
        };
        self.make_token(kind, span)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes `-? (0 | [1-9][0-9]*) ('.' [0-9]+)? ([eE] [+-]? [0-9]+)?`.
    ///
    /// A number immediately followed by `.` or a name-start character is an
    /// error (`1.`, `0x1F`, `123abc`).
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                        INT_VALUE_SPEC_URL,
                    );
                }
            },
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_while(|ch| ch.is_ascii_digit());
            },
            _ => {
                return self.make_error(start, "Unexpected `-`", smallvec![]);
            },
        }

        if self.peek_char() == Some('.') {
            if !self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: expected a digit after `.`",
                    FLOAT_VALUE_SPEC_URL,
                );
            }
            is_float = true;
            self.consume();
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                    FLOAT_VALUE_SPEC_URL,
                );
            }
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if let Some(ch) = self.peek_char()
            && (ch == '.' || is_name_start(ch))
        {
            return self.lex_number_error(
                start,
                num_start,
                "Invalid number: a number cannot be directly followed by `.` or a name",
                if is_float { FLOAT_VALUE_SPEC_URL } else { INT_VALUE_SPEC_URL },
            );
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let span = self.make_span(start);
        let kind = if is_float {
            GraphQLTokenKind::FloatValue(num_text)
        } else {
            GraphQLTokenKind::IntValue(num_text)
        };
        self.make_token(kind, span)
    }

    /// Swallows the rest of the malformed number so the error span covers it.
    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
        spec_url: &str,
    ) -> GraphQLToken<'src> {
        self.consume_while(|ch| {
            ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '+' | '-')
        });
        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        self.make_error(
            start,
            format!("{message}: `{invalid_text}`"),
            smallvec![GraphQLErrorNote::spec(spec_url)],
        )
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Lexes a single-line string, validating (but not decoding) its escapes.
    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, str_start);
        }

        self.consume();
        loop {
            let escape_start = self.curr_position();
            match self.peek_char() {
                None => {
                    let opened_at = GraphQLSourceSpan::point(start);
                    return self.make_error(
                        start,
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general_with_span("String started here", opened_at),
                            GraphQLErrorNote::help("Add closing `\"`"),
                        ],
                    );
                },
                Some('\n' | '\r') => {
                    self.consume();
                    if self.last_char_was_cr && self.peek_char() == Some('\n') {
                        self.consume();
                    }
                    return self.make_error(
                        start,
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general(
                                "Single-line strings cannot contain unescaped newlines"
                            ),
                            GraphQLErrorNote::help(
                                "Use a block string (triple quotes) for multi-line strings, \
                                 or escape the newline with `\\n`"
                            ),
                        ],
                    );
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if let Err(message) = self.lex_escape_sequence() {
                        return self.make_error(
                            escape_start,
                            message,
                            smallvec![GraphQLErrorNote::spec(STRING_VALUE_SPEC_URL)],
                        );
                    }
                },
                Some(ch) if is_illegal_string_char(ch) => {
                    self.consume();
                    return self.make_error(
                        escape_start,
                        format!("Invalid character {} in string", describe_char(ch)),
                        smallvec![GraphQLErrorNote::help(
                            "Control characters must be escaped (e.g. `\\u0000`)"
                        )],
                    );
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::StringValue(string_text), span)
    }

    /// Validates the escape sequence following an already-consumed `\`.
    fn lex_escape_sequence(&mut self) -> Result<(), String> {
        match self.peek_char() {
            Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {
                self.consume();
                Ok(())
            },
            Some('u') => {
                self.consume();
                if self.peek_char() == Some('{') {
                    self.consume();
                    let hex_start = self.curr_byte_offset;
                    self.consume_while(|ch| ch.is_ascii_hexdigit());
                    let hex = &self.source[hex_start..self.curr_byte_offset];
                    if self.peek_char() != Some('}') || hex.is_empty() {
                        return Err(format!("Invalid unicode escape sequence `\\u{{{hex}`"));
                    }
                    self.consume();
                    let valid = u32::from_str_radix(hex, 16)
                        .ok()
                        .and_then(char::from_u32)
                        .is_some();
                    if !valid {
                        return Err(format!("Invalid unicode code point `\\u{{{hex}}}`"));
                    }
                    return Ok(());
                }
                let hex_start = self.curr_byte_offset;
                for _ in 0..4 {
                    if !self.peek_char().is_some_and(|ch| ch.is_ascii_hexdigit()) {
                        let hex = &self.source[hex_start..self.curr_byte_offset];
                        return Err(format!(
                            "Invalid unicode escape sequence `\\u{hex}`: expected 4 hex digits"
                        ));
                    }
                    self.consume();
                }
                Ok(())
            },
            Some(other) => Err(format!("Invalid escape sequence `\\{other}`")),
            None => Err("Unterminated escape sequence".to_string()),
        }
    }

    fn lex_block_string(&mut self, start: SourcePosition, str_start: usize) -> GraphQLToken<'src> {
        for _ in 0..3 {
            self.consume();
        }

        loop {
            let char_start = self.curr_position();
            if self.remaining().starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume();
                }
                continue;
            }
            if self.remaining().starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.consume();
                }
                break;
            }
            match self.peek_char() {
                None => {
                    let opened_at = GraphQLSourceSpan::point(start);
                    return self.make_error(
                        start,
                        "Unterminated block string",
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "Block string started here",
                                opened_at,
                            ),
                            GraphQLErrorNote::help("Add closing `\"\"\"`"),
                        ],
                    );
                },
                Some(ch) if ch != '\n' && ch != '\r' && is_illegal_string_char(ch) => {
                    self.consume();
                    return self.make_error(
                        char_start,
                        format!("Invalid character {} in block string", describe_char(ch)),
                        smallvec![],
                    );
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        let span = self.make_span(start);
        self.make_token(GraphQLTokenKind::StringValue(string_text), span)
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let Some(ch) = self.consume() else {
            let span = self.make_span(start);
            return self.make_token(GraphQLTokenKind::Eof, span);
        };
        let mut notes = GraphQLErrorNotes::new();
        if ch == '\'' {
            notes.push(GraphQLErrorNote::help("GraphQL strings use double quotes (`\"`)"));
        }
        self.make_error(start, format!("Unexpected character {}", describe_char(ch)), notes)
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

fn single_char_punctuator<'src>(ch: char) -> Option<GraphQLTokenKind<'src>> {
    Some(match ch {
        '!' => GraphQLTokenKind::Bang,
        '$' => GraphQLTokenKind::Dollar,
        '&' => GraphQLTokenKind::Ampersand,
        '(' => GraphQLTokenKind::ParenOpen,
        ')' => GraphQLTokenKind::ParenClose,
        ':' => GraphQLTokenKind::Colon,
        '=' => GraphQLTokenKind::Equals,
        '@' => GraphQLTokenKind::At,
        '[' => GraphQLTokenKind::SquareBracketOpen,
        ']' => GraphQLTokenKind::SquareBracketClose,
        '{' => GraphQLTokenKind::CurlyBraceOpen,
        '|' => GraphQLTokenKind::Pipe,
        '}' => GraphQLTokenKind::CurlyBraceClose,
        _ => return None,
    })
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Control characters other than horizontal tab may not appear unescaped in
/// a string.
fn is_illegal_string_char(ch: char) -> bool {
    (ch < '\u{0020}' && ch != '\t') || ch == '\u{007F}'
}

/// Backticked character for error messages, with its code point when the
/// character is invisible.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || is_invisible_format_char(ch) {
        match known_char_name(ch) {
            Some(name) => format!("`{}` (U+{:04X}: {name})", ch.escape_debug(), ch as u32),
            None => format!("`{}` (U+{:04X})", ch.escape_debug(), ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

fn is_invisible_format_char(ch: char) -> bool {
    matches!(ch, '\u{200B}'..='\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2060}'..='\u{2064}')
}

fn known_char_name(ch: char) -> Option<&'static str> {
    Some(match ch {
        '\u{0000}' => "NULL",
        '\u{0007}' => "BELL",
        '\u{0008}' => "BACKSPACE",
        '\u{000B}' => "VERTICAL TAB",
        '\u{000C}' => "FORM FEED",
        '\u{001B}' => "ESCAPE",
        '\u{007F}' => "DELETE",
        '\u{0085}' => "NEXT LINE",
        '\u{00A0}' => "NO-BREAK SPACE",
        '\u{200B}' => "ZERO WIDTH SPACE",
        '\u{200C}' => "ZERO WIDTH NON-JOINER",
        '\u{200D}' => "ZERO WIDTH JOINER",
        '\u{200E}' => "LEFT-TO-RIGHT MARK",
        '\u{200F}' => "RIGHT-TO-LEFT MARK",
        '\u{2028}' => "LINE SEPARATOR",
        '\u{2029}' => "PARAGRAPH SEPARATOR",
        '\u{2060}' => "WORD JOINER",
        '\u{3000}' => "IDEOGRAPHIC SPACE",
        _ => return None,
    })
}
