use crate::GraphQLStringParsingError;

/// Decodes the raw source text of a `StringValue` token (quotes included)
/// into the string it denotes.
///
/// Single-line strings have their escape sequences processed. Block strings
/// (`"""..."""`) have `\"""` unescaped and their common indentation and
/// leading/trailing blank lines removed.
pub fn parse_string_value(raw: &str) -> Result<String, GraphQLStringParsingError> {
    if raw.starts_with("\"\"\"") {
        decode_block_string(raw)
    } else {
        decode_quoted_string(raw)
    }
}

fn decode_quoted_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    let content = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(GraphQLStringParsingError::UnterminatedString)?;

    let mut decoded = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        let escaped = match chars.next() {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => decode_unicode_escape(&mut chars)?,
            Some(other) => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(format!(
                    "\\{other}"
                )));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        };
        decoded.push(escaped);
    }
    Ok(decoded)
}

type CharCursor<'a> = std::iter::Peekable<std::str::Chars<'a>>;

/// Decodes the code point following `\u`, either `XXXX` or `{X...}`.
///
/// A fixed-width high surrogate must be followed by a `\uXXXX` low
/// surrogate; the pair is combined into one scalar value.
fn decode_unicode_escape(chars: &mut CharCursor<'_>) -> Result<char, GraphQLStringParsingError> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() && hex.len() < 8 => hex.push(c),
                Some(c) => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}{c}"
                    )));
                },
                None => {
                    return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}"
                    )));
                },
            }
        }
        let invalid = || GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{{{hex}}}"));
        if hex.is_empty() {
            return Err(invalid());
        }
        let code_point = u32::from_str_radix(&hex, 16).map_err(|_| invalid())?;
        return char::from_u32(code_point).ok_or_else(invalid);
    }

    let high = read_four_hex_digits(chars)?;
    if let Some(c) = char::from_u32(high) {
        return Ok(c);
    }
    if !(0xD800..=0xDBFF).contains(&high) {
        return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
            "\\u{high:04X}"
        )));
    }

    // Expect the trailing `\uXXXX` of a surrogate pair.
    let unpaired = || GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{high:04X}"));
    if chars.next() != Some('\\') || chars.next() != Some('u') {
        return Err(unpaired());
    }
    let low = read_four_hex_digits(chars)?;
    if !(0xDC00..=0xDFFF).contains(&low) {
        return Err(unpaired());
    }
    let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(combined).ok_or_else(unpaired)
}

fn read_four_hex_digits(chars: &mut CharCursor<'_>) -> Result<u32, GraphQLStringParsingError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{hex}{c}"
                )));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{hex}"
                )));
            },
        }
    }
    u32::from_str_radix(&hex, 16)
        .map_err(|_| GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{hex}")))
}

fn decode_block_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    let content = raw
        .strip_prefix("\"\"\"")
        .and_then(|rest| rest.strip_suffix("\"\"\""))
        .ok_or(GraphQLStringParsingError::UnterminatedString)?;
    let content = content.replace("\\\"\"\"", "\"\"\"");

    let lines = split_block_lines(&content);

    let is_whitespace_only = |line: &str| line.chars().all(|c| c == ' ' || c == '\t');
    let indent_of = |line: &str| line.len() - line.trim_start_matches([' ', '\t']).len();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_whitespace_only(line))
        .map(|line| indent_of(line))
        .min()
        .unwrap_or(0);

    let mut stripped: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line
            } else {
                line.get(common_indent..).unwrap_or("")
            }
        })
        .collect();

    while stripped.first().is_some_and(|line| is_whitespace_only(line)) {
        stripped.remove(0);
    }
    while stripped.last().is_some_and(|line| is_whitespace_only(line)) {
        stripped.pop();
    }

    Ok(stripped.join("\n"))
}

/// Splits on `\r\n`, `\n`, or a lone `\r`, keeping a trailing empty line.
fn split_block_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = content.as_bytes();
    let mut line_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[line_start..i]);
                line_start = i + 1;
            },
            b'\r' => {
                lines.push(&content[line_start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                line_start = i + 1;
            },
            _ => {},
        }
        i += 1;
    }
    lines.push(&content[line_start..]);
    lines
}
