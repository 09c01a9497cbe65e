//! String normalization helpers shared by the context store and the keyword
//! formatter.

/// Normalizes an optional string: `None`, empty, and whitespace-only inputs
/// all become `None`; anything else is returned trimmed.
pub(crate) fn normalize(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalizes a value for embedding in a `KEYWORD[...]` token.
///
/// Blank inputs are dropped (`None`). Surviving values are trimmed and the
/// delimiter-unsafe characters escaped: `\` as `\\`, `,` as `\,`, `]` as
/// `\]`. The escaping is lossless: a reader splits on unescaped commas and
/// unescapes each segment to recover the original values.
pub(crate) fn normalize_keyword(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut escaped = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        match ch {
            '\\' | ',' | ']' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    Some(escaped)
}
