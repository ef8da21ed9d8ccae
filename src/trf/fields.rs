//! Primitive helpers shared by the record grammars: blank-aware number
//! parsing, fixed-point display and fixed-width column slicing.

use smallvec::SmallVec;
use std::fmt::Display;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

pub(crate) type Chunks<'a> = SmallVec<[&'a str; 16]>;

fn parse_optional<T: FromStr>(text: &str) -> Result<Option<T>, T::Err> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse().map(Some)
}

/// Blank columns are absent; anything else must parse.
pub(crate) fn optional_int<T: FromStr<Err = ParseIntError>>(
    text: &str,
) -> Result<Option<T>, ParseIntError> {
    parse_optional(text)
}

pub(crate) fn optional_float(text: &str) -> Result<Option<f64>, ParseFloatError> {
    parse_optional(text)
}

/// Renders a nullable score: blank when absent, otherwise one decimal
/// place right-justified to `width`. Scores too wide for the column are
/// clamped to the widest value that fits (`99.9` or `-9.9` for width 4).
pub(crate) fn float_or_blank(value: Option<f64>, width: usize) -> String {
    let Some(v) = value else {
        return " ".repeat(width);
    };
    let text = format!("{:>width$.1}", v);
    if text.len() <= width {
        return text;
    }
    if v < 0.0 {
        format!("-{}.9", "9".repeat(width.saturating_sub(3).max(1)))
    } else {
        format!("{}.9", "9".repeat(width.saturating_sub(2).max(1)))
    }
}

pub(crate) fn or_blank<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub(crate) fn blank_if_zero(value: u64) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// Cuts `text` to at most `width` characters without splitting a code point.
pub(crate) fn truncate(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Slices `text` into `width`-character chunks up to its last non-blank
/// character and trims every chunk.
pub(crate) fn split_fixed_width(text: &str, width: usize) -> Chunks<'_> {
    let mut chunks = Chunks::new();
    let mut rest = text.trim_end();
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(idx, _)| idx);
        chunks.push(rest[..end].trim());
        rest = &rest[end..];
    }
    chunks
}

pub(crate) fn split_ints(text: &str, width: usize) -> Result<Vec<u32>, ParseIntError> {
    split_fixed_width(text, width)
        .iter()
        .map(|chunk| chunk.parse())
        .collect()
}

/// Like [`split_ints`], but blank chunks and literal zeros both become `None`.
///
/// The format cannot tell a zero id from an empty slot in these columns, so
/// a real `0` does not survive decoding.
pub(crate) fn split_optional_ints(
    text: &str,
    width: usize,
) -> Result<Vec<Option<u32>>, ParseIntError> {
    split_fixed_width(text, width)
        .iter()
        .map(|chunk| -> Result<Option<u32>, ParseIntError> {
            let value: u32 = if chunk.is_empty() { 0 } else { chunk.parse()? };
            Ok((value != 0).then_some(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_int_blank_is_none() {
        assert_eq!(optional_int::<u32>(""), Ok(None));
        assert_eq!(optional_int::<u32>("    "), Ok(None));
        assert_eq!(optional_int::<u32>("  42"), Ok(Some(42)));
        assert_eq!(optional_int::<u32>("0000"), Ok(Some(0)));
        assert!(optional_int::<u32>("4 2").is_err());
    }

    #[test]
    fn test_optional_float() {
        assert_eq!(optional_float("    "), Ok(None));
        assert_eq!(optional_float(" 6.5"), Ok(Some(6.5)));
        assert!(optional_float("6.5.").is_err());
    }

    #[test]
    fn test_float_or_blank() {
        assert_eq!(float_or_blank(None, 4), "    ");
        assert_eq!(float_or_blank(Some(6.5), 4), " 6.5");
        assert_eq!(float_or_blank(Some(2.0), 6), "   2.0");
        assert_eq!(float_or_blank(Some(19.5), 4), "19.5");
        assert_eq!(float_or_blank(Some(-2.5), 4), "-2.5");
    }

    #[test]
    fn test_float_or_blank_clamps_to_column() {
        assert_eq!(float_or_blank(Some(100.0), 4), "99.9");
        assert_eq!(float_or_blank(Some(99.96), 4), "99.9");
        assert_eq!(float_or_blank(Some(-12.0), 4), "-9.9");
        assert_eq!(float_or_blank(Some(12345.0), 6), "9999.9");
        assert_eq!(float_or_blank(Some(-1234.5), 6), "-999.9");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("Müller", 2), "Mü");
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_split_fixed_width_drops_trailing_blank_chunks() {
        let chunks = split_fixed_width("    1   22          ", 5);
        assert_eq!(chunks.as_slice(), &["1", "22"]);
    }

    #[test]
    fn test_split_fixed_width_keeps_inner_blank_chunks() {
        let chunks = split_fixed_width("    1         3", 5);
        assert_eq!(chunks.as_slice(), &["1", "", "3"]);
    }

    #[test]
    fn test_split_ints() {
        assert_eq!(split_ints("    8   75   54", 5), Ok(vec![8, 75, 54]));
        assert_eq!(split_ints("", 5), Ok(vec![]));
        assert!(split_ints("    8         9", 5).is_err());
    }

    #[test]
    fn test_split_optional_ints_collapses_zero_into_none() {
        // A legitimate zero cannot be told apart from an empty slot.
        assert_eq!(
            split_optional_ints("   51 0000  120    0", 5),
            Ok(vec![Some(51), None, Some(120), None])
        );
        assert_eq!(
            split_optional_ints("  50      49", 4),
            Ok(vec![Some(50), None, Some(49)])
        );
    }

    #[test]
    fn test_blank_helpers() {
        assert_eq!(blank_if_zero(0), "");
        assert_eq!(blank_if_zero(2500), "2500");
        assert_eq!(or_blank::<u32>(None), "");
        assert_eq!(or_blank(Some(0)), "0");
    }
}
