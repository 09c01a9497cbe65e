//! Keyword token formatting for free-text log lines.
//!
//! A keyword token embeds a bounded list of searchable values in a log line
//! as `KEYWORD[a,b,c]`, so plain-text search tooling can find every line
//! mentioning a given order id, user, or similar handle.

use std::fmt::Display;

use crate::strings;

/// Values beyond this count produce an empty token, guarding log lines
/// against pathologically large argument lists.
const MAX_KEYWORD_VALUES: usize = 100;

/// Renders a list of optional values into one searchable `KEYWORD[...]`
/// token.
///
/// `None` elements and elements that render to a blank string are dropped
/// entirely rather than leaving empty segments. Surviving values are trimmed,
/// delimiter-escaped (`\`, `,`, and `]` become `\\`, `\,`, `\]`), and joined
/// with `,` in input order — no reordering, no de-duplication. A list of more
/// than 100 elements returns the empty string.
///
/// ```
/// use xlog::keyword;
///
/// assert_eq!(keyword(&[Some("a"), None, Some("b,c")]), "KEYWORD[a,b\\,c]");
/// assert_eq!(keyword::<&str>(&[]), "KEYWORD[]");
/// ```
pub fn keyword<T: Display>(values: &[Option<T>]) -> String {
    if values.len() > MAX_KEYWORD_VALUES {
        return String::new();
    }
    let joined = values
        .iter()
        .filter_map(|value| {
            value
                .as_ref()
                .and_then(|v| strings::normalize_keyword(&v.to_string()))
        })
        .collect::<Vec<_>>()
        .join(",");
    format!("KEYWORD[{joined}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn output_is_always_wrapped_or_empty(values in proptest::collection::vec(
            proptest::option::of("[a-zA-Z0-9,\\] -]{0,16}"),
            0..=120,
        )) {
            let refs: Vec<Option<&str>> = values.iter().map(|v| v.as_deref()).collect();
            let out = keyword(&refs);
            if refs.len() > 100 {
                prop_assert_eq!(out, "");
            } else {
                prop_assert!(out.starts_with("KEYWORD["));
                prop_assert!(out.ends_with(']'));
            }
        }

        #[test]
        fn segment_count_matches_surviving_values(values in proptest::collection::vec(
            proptest::option::of("[a-zA-Z0-9]{1,8}"),
            0..=50,
        )) {
            // Alphanumeric inputs need no escaping, so unescaped commas in
            // the output correspond exactly to segment boundaries.
            let refs: Vec<Option<&str>> = values.iter().map(|v| v.as_deref()).collect();
            let survivors = refs.iter().filter(|v| v.is_some()).count();
            let out = keyword(&refs);
            let inner = &out["KEYWORD[".len()..out.len() - 1];
            let segments = if inner.is_empty() {
                0
            } else {
                inner.split(',').count()
            };
            prop_assert_eq!(segments, survivors);
        }
    }

    #[test]
    fn drops_nulls_and_escapes_embedded_commas() {
        assert_eq!(
            keyword(&[Some("a"), None, Some("b,c")]),
            "KEYWORD[a,b\\,c]"
        );
    }

    #[test]
    fn empty_list_renders_empty_brackets() {
        assert_eq!(keyword::<&str>(&[]), "KEYWORD[]");
    }

    #[test]
    fn guard_rejects_oversized_lists() {
        let over: Vec<Option<&str>> = vec![Some("a"); 101];
        assert_eq!(keyword(&over), "");

        let at_limit: Vec<Option<&str>> = vec![Some("a"); 100];
        assert!(keyword(&at_limit).starts_with("KEYWORD["));
    }

    #[test]
    fn preserves_input_order_without_deduplication() {
        assert_eq!(
            keyword(&[Some("b"), Some("a"), Some("b")]),
            "KEYWORD[b,a,b]"
        );
    }

    #[test]
    fn blank_values_leave_no_empty_segments() {
        assert_eq!(keyword(&[Some(""), Some("a"), Some("  ")]), "KEYWORD[a]");
    }

    #[test]
    fn accepts_any_display_type() {
        assert_eq!(keyword(&[Some(42u64), Some(7)]), "KEYWORD[42,7]");
    }
}
