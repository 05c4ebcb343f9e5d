//! Limit classification
//!
//! The one decision rule, used identically at registration time and on
//! every subsequent input event.

/// A field's character limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLimit {
    /// Maximum permitted content length
    Chars(u32),
    /// Declared but non-numeric limit; fails every comparison, so the
    /// field is tracked but never flagged
    Invalid,
}

impl FieldLimit {
    /// Parse a declared maxlength attribute value
    ///
    /// Leading digits count, trailing junk is ignored ("10px" is a
    /// limit of 10); a value with no leading digits is invalid.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let digits = trimmed
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        match trimmed[..digits].parse::<u32>() {
            Ok(n) => Self::Chars(n),
            Err(_) => Self::Invalid,
        }
    }
}

/// Visual state of a tracked field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitState {
    /// Content is longer than the limit
    Exceeded,
    /// Remaining characters are at or below the warning threshold
    Warning,
    /// Neither class applies
    Clear,
}

impl LimitState {
    /// Classify a content length against a limit and warning threshold
    ///
    /// Exceeded takes precedence over warning: length strictly above the
    /// limit is always exceeded, regardless of the threshold.
    pub fn classify(len: usize, limit: FieldLimit, threshold: u32) -> Self {
        let FieldLimit::Chars(limit) = limit else {
            return Self::Clear;
        };
        let limit = limit as usize;

        if len > limit {
            Self::Exceeded
        } else if limit - len <= threshold as usize {
            Self::Warning
        } else {
            Self::Clear
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceeded_when_over_limit() {
        for len in [11, 12, 100] {
            assert_eq!(
                LimitState::classify(len, FieldLimit::Chars(10), 20),
                LimitState::Exceeded
            );
        }
    }

    #[test]
    fn test_warning_within_threshold() {
        // limit=10, threshold=20: every length up to the limit warns
        for len in [0, 5, 10] {
            assert_eq!(
                LimitState::classify(len, FieldLimit::Chars(10), 20),
                LimitState::Warning
            );
        }
    }

    #[test]
    fn test_at_limit_is_warning_not_exceeded() {
        assert_eq!(
            LimitState::classify(10, FieldLimit::Chars(10), 20),
            LimitState::Warning
        );
    }

    #[test]
    fn test_clear_above_threshold() {
        // limit=50, threshold=5: 44 remaining > 5
        assert_eq!(
            LimitState::classify(6, FieldLimit::Chars(50), 5),
            LimitState::Clear
        );
        // exactly threshold remaining warns
        assert_eq!(
            LimitState::classify(45, FieldLimit::Chars(50), 5),
            LimitState::Warning
        );
    }

    #[test]
    fn test_invalid_limit_always_clear() {
        for len in [0, 10, 1000] {
            assert_eq!(
                LimitState::classify(len, FieldLimit::Invalid, 20),
                LimitState::Clear
            );
        }
    }

    #[test]
    fn test_zero_threshold_warns_only_at_limit() {
        assert_eq!(
            LimitState::classify(9, FieldLimit::Chars(10), 0),
            LimitState::Clear
        );
        assert_eq!(
            LimitState::classify(10, FieldLimit::Chars(10), 0),
            LimitState::Warning
        );
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(FieldLimit::parse("50"), FieldLimit::Chars(50));
        assert_eq!(FieldLimit::parse(" 10 "), FieldLimit::Chars(10));
        assert_eq!(FieldLimit::parse("abc"), FieldLimit::Invalid);
        assert_eq!(FieldLimit::parse(""), FieldLimit::Invalid);
        assert_eq!(FieldLimit::parse("-5"), FieldLimit::Invalid);
    }

    #[test]
    fn test_parse_limit_takes_leading_digits() {
        assert_eq!(FieldLimit::parse("10px"), FieldLimit::Chars(10));
        assert_eq!(FieldLimit::parse("10.5"), FieldLimit::Chars(10));
        assert_eq!(FieldLimit::parse(" 30abc "), FieldLimit::Chars(30));
        assert_eq!(FieldLimit::parse("px10"), FieldLimit::Invalid);
    }
}
