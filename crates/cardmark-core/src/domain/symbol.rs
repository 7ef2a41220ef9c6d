use crate::ValidationError;

const MAX_TICKER_LEN: usize = 15;

/// Ticker accepted from the first argument of a card directive.
///
/// This only gates directive arguments. The synthesizers take any `&str`
/// (an empty key seeds to zero), so a `Symbol` is never needed to build data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Upper-cases `arg` and checks it looks like a ticker.
    pub fn from_arg(arg: &str) -> Result<Self, ValidationError> {
        let value = arg.trim();
        match rejection(value) {
            Some(reason) => Err(ValidationError::InvalidSymbol {
                value: value.to_owned(),
                reason,
            }),
            None => Ok(Self(value.to_ascii_uppercase())),
        }
    }

    /// Synthesizer key for this ticker.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn rejection(value: &str) -> Option<&'static str> {
    let Some(first) = value.chars().next() else {
        return Some("empty");
    };
    if !first.is_ascii_alphabetic() {
        return Some("must start with a letter");
    }
    if !value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-'))
    {
        return Some("only letters, digits, '.' and '-' are allowed");
    }
    if value.len() > MAX_TICKER_LEN {
        return Some("longer than 15 characters");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(arg: &str) -> &'static str {
        match Symbol::from_arg(arg) {
            Err(ValidationError::InvalidSymbol { reason, .. }) => reason,
            other => panic!("{arg:?} should be rejected, got {other:?}"),
        }
    }

    #[test]
    fn lowercase_argument_becomes_display_ticker() {
        let symbol = Symbol::from_arg("brk.b").expect("share class suffix is fine");
        assert_eq!(symbol.as_str(), "BRK.B");
    }

    #[test]
    fn digits_cannot_lead() {
        assert_eq!(reason("1AAPL"), "must start with a letter");
        assert_eq!(reason("$$$"), "must start with a letter");
    }

    #[test]
    fn punctuation_is_limited_to_dot_and_dash() {
        assert_eq!(reason("AAPL$"), "only letters, digits, '.' and '-' are allowed");
        assert!(Symbol::from_arg("RDS-A").is_ok());
    }

    #[test]
    fn sixteen_characters_is_too_long() {
        assert!(Symbol::from_arg("ZZZZZZZZZZZZZZZ").is_ok());
        assert_eq!(reason("ZZZZZZZZZZZZZZZZ"), "longer than 15 characters");
    }

    #[test]
    fn blank_argument_is_rejected() {
        let err = Symbol::from_arg("").expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::InvalidSymbol {
                value: String::new(),
                reason: "empty"
            }
        );
    }
}
