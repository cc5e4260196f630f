use crate::errors::Error;
use crate::ranges::{Range, RangeKind};
use regex::Regex;
use std::sync::OnceLock;

/// Grammar of a range literal: both sides optional, "=" for inclusive
const LITERAL: &str = r"^(\d+)?\.\.(=?)(\d+)?$";

fn literal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(LITERAL).unwrap())
}

impl Range {
    /// Parse a textual range literal ("1..5", "1..=5", "3..", "..7",
    /// "..=7", "..") into a range.  A missing start means unbounded on
    /// the left, a missing end unbounded on the right.
    pub fn from_pattern(text: &str) -> Result<Self, Error> {
        let caps = literal_pattern()
            .captures(text.trim())
            .ok_or_else(|| Error::MalformedLiteral(text.to_string()))?;

        let start = match caps.get(1) {
            Some(m) => m.as_str().parse::<i64>()? as f64,
            None => f64::NEG_INFINITY,
        };
        let inclusive = caps.get(2).is_some_and(|m| !m.as_str().is_empty());
        let end = match caps.get(3) {
            Some(m) => m.as_str().parse::<i64>()? as f64,
            None => f64::INFINITY,
        };

        let kind = match (start.is_finite(), end.is_finite(), inclusive) {
            (true, true, false) => RangeKind::Bounded,
            (true, true, true) => RangeKind::Inclusive,
            (true, false, _) => RangeKind::From,
            (false, true, false) => RangeKind::To,
            (false, true, true) => RangeKind::ToInclusive,
            (false, false, _) => RangeKind::Full,
        };
        Range::with_kind(start, end, inclusive, kind)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_bounded() {
        let r = Range::from_pattern("1..5").unwrap();
        assert_eq!(r.kind(), RangeKind::Bounded);
        assert_eq!(r.bounds(), (1.0, 5.0));
        assert!(!r.is_inclusive());

        let r = Range::from_pattern("1..=5").unwrap();
        assert_eq!(r.kind(), RangeKind::Inclusive);
        assert_eq!(r.bounds(), (1.0, 6.0));
        assert!(r.is_inclusive());
        assert!(r.contains(5.0));
    }

    #[test]
    fn test_parse_unbounded() {
        let r = Range::from_pattern("3..").unwrap();
        assert_eq!(r.kind(), RangeKind::From);
        assert_eq!(r.start(), 3.0);
        assert_eq!(r.end_exclusive(), f64::INFINITY);

        let r = Range::from_pattern("..7").unwrap();
        assert_eq!(r.kind(), RangeKind::To);
        assert_eq!(r.start(), f64::NEG_INFINITY);
        assert_eq!(r.end_exclusive(), 7.0);

        let r = Range::from_pattern("..=7").unwrap();
        assert_eq!(r.kind(), RangeKind::ToInclusive);
        assert!(r.contains(7.0));

        let r = Range::from_pattern("..").unwrap();
        assert_eq!(r.kind(), RangeKind::Full);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_parse_whitespace() {
        let r = Range::from_pattern("  2..9 ").unwrap();
        assert_eq!(r.bounds(), (2.0, 9.0));
    }

    #[test]
    fn test_parse_malformed() {
        for text in ["", "1", "1..2..3", "a..b", "1...2", "-1..2", "1..=-2"]
        {
            assert!(
                matches!(
                    Range::from_pattern(text),
                    Err(Error::MalformedLiteral(_))
                ),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            Range::from_pattern("99999999999999999999..").unwrap_err(),
            Error::ParseIntError(_)
        ));
    }

    #[test]
    fn test_round_trip() {
        for text in ["1..5", "1..=5", "3..", "..7", "..=7", ".."] {
            let r = Range::from_pattern(text).unwrap();
            assert_eq!(r.to_string(), text);
        }
    }
}
