//! Shared validation patterns for the newsletter and contact forms.

use fancy_regex::Regex;

use crate::{Error, Result};

// Local-part, host and TLD are each "one or more characters that are
// neither whitespace nor @", joined by a literal @ and dot.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

// 7 to 15 characters drawn from digits, spaces, +, -, parentheses.
const PHONE_PATTERN: &str = r"^[\d\s+\-()]{7,15}$";

#[derive(Debug)]
pub(crate) struct Patterns {
    email: Regex,
    phone: Regex,
}

impl Patterns {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            email: compile(EMAIL_PATTERN)?,
            phone: compile(PHONE_PATTERN)?,
        })
    }

    pub(crate) fn email_ok(&self, input: &str) -> Result<bool> {
        is_match(&self.email, input)
    }

    pub(crate) fn phone_ok(&self, input: &str) -> Result<bool> {
        is_match(&self.phone, input)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|err| Error::Pattern(format!("{pattern}: {err}")))
}

fn is_match(regex: &Regex, input: &str) -> Result<bool> {
    regex
        .is_match(input)
        .map_err(|err| Error::Pattern(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern_accepts_and_rejects_expected_shapes() -> Result<()> {
        let patterns = Patterns::new()?;
        assert!(patterns.email_ok("a@b.co")?);
        assert!(patterns.email_ok("first.last@shop.example.com")?);
        assert!(!patterns.email_ok("a@b")?);
        assert!(!patterns.email_ok("@b.co")?);
        assert!(!patterns.email_ok("a b@c.co")?);
        assert!(!patterns.email_ok("")?);
        assert!(!patterns.email_ok("a@@b.co")?);
        Ok(())
    }

    #[test]
    fn phone_pattern_enforces_charset_and_length() -> Result<()> {
        let patterns = Patterns::new()?;
        assert!(patterns.phone_ok("123-4567")?);
        assert!(patterns.phone_ok("+1 (555) 123")?);
        assert!(!patterns.phone_ok("123456")?);
        assert!(!patterns.phone_ok("1234567890123456")?);
        assert!(!patterns.phone_ok("555-CALL")?);
        Ok(())
    }
}
