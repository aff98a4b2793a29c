//! Allocation-free helpers for interval line parsing.

use memchr::memchr2;

/// Parse a signed decimal coordinate.
///
/// Accepts an optional leading `+` or `-`. Returns None on empty input,
/// non-digit characters or a value outside `i64`.
#[inline]
pub fn parse_i64(bytes: &[u8]) -> Option<i64> {
    let (negative, digits) = match bytes.first()? {
        b'-' => (true, &bytes[1..]),
        b'+' => (false, &bytes[1..]),
        _ => (false, bytes),
    };
    if digits.is_empty() {
        return None;
    }
    // Accumulate toward the negative side so i64::MIN parses.
    let mut n: i64 = 0;
    for &b in digits {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        n = n.checked_mul(10)?.checked_sub(d as i64)?;
    }
    if negative {
        Some(n)
    } else {
        n.checked_neg()
    }
}

/// Strip a trailing `\n` or `\r\n` (and anything after the first of them).
#[inline]
pub fn trim_line_end(line: &[u8]) -> &[u8] {
    match memchr2(b'\r', b'\n', line) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Check if a line should be skipped (blank, comment, or header).
///
/// A header is a line whose first field is exactly `track` or `browser`;
/// a chromosome merely starting with those letters is data.
#[inline]
pub fn should_skip_line(line: &[u8]) -> bool {
    match line
        .split(u8::is_ascii_whitespace)
        .find(|field| !field.is_empty())
    {
        None => true,
        Some(first) => first[0] == b'#' || first == b"track" || first == b"browser",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64(b"12345"), Some(12345));
        assert_eq!(parse_i64(b"0"), Some(0));
        assert_eq!(parse_i64(b"-42"), Some(-42));
        assert_eq!(parse_i64(b"+42"), Some(42));
        assert_eq!(parse_i64(b"9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_i64(b"-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn test_parse_i64_rejects_garbage() {
        assert_eq!(parse_i64(b""), None);
        assert_eq!(parse_i64(b"-"), None);
        assert_eq!(parse_i64(b"abc"), None);
        assert_eq!(parse_i64(b"123abc"), None);
        assert_eq!(parse_i64(b"1.5"), None);
        assert_eq!(parse_i64(b"9223372036854775808"), None);
        assert_eq!(parse_i64(b"-9223372036854775809"), None);
    }

    #[test]
    fn test_trim_line_end() {
        assert_eq!(trim_line_end(b"chr1\t1\t2\n"), b"chr1\t1\t2");
        assert_eq!(trim_line_end(b"chr1\t1\t2\r\n"), b"chr1\t1\t2");
        assert_eq!(trim_line_end(b"chr1\t1\t2"), b"chr1\t1\t2");
    }

    #[test]
    fn test_should_skip_line() {
        assert!(should_skip_line(b""));
        assert!(should_skip_line(b"  \t "));
        assert!(should_skip_line(b"#comment"));
        assert!(should_skip_line(b"track name=foo"));
        assert!(should_skip_line(b"browser position chr1:1-100"));
        assert!(!should_skip_line(b"chr1\t100\t200"));
    }

    #[test]
    fn test_header_keywords_must_be_whole_field() {
        assert!(should_skip_line(b"track"));
        assert!(should_skip_line(b"browser\thide all"));
        assert!(!should_skip_line(b"trackA\t1\t200"));
        assert!(!should_skip_line(b"browser_contig\t1\t53"));
        assert!(!should_skip_line(b"tracks\t1\t2"));
    }
}
