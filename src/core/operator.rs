use std::fmt;

use strum::EnumString;

/// Binary arithmetic operators for dataset combination.
///
/// Parsing is case-insensitive and accepts either the symbol or the
/// word form ("+" or "plus").
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Operator {
    /// Addition (+)
    #[strum(serialize = "+", serialize = "plus")]
    Add,

    /// Subtraction (-)
    #[strum(serialize = "-", serialize = "minus")]
    Subtract,

    /// Multiplication (*)
    #[strum(serialize = "*", serialize = "times")]
    Multiply,

    /// Division (/)
    #[strum(serialize = "/", serialize = "divide")]
    Divide,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Operator {
    /// The symbol interpolated into combined field names.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbol() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!("/".parse::<Operator>(), Ok(Operator::Divide));
    }

    #[test]
    fn test_parse_word_form_any_case() {
        assert_eq!("plus".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!("TIMES".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!("Minus".parse::<Operator>(), Ok(Operator::Subtract));
    }

    #[test]
    fn test_parse_unknown_fails() {
        assert!("%".parse::<Operator>().is_err());
    }

    #[test]
    fn test_display_is_symbol() {
        assert_eq!(Operator::Subtract.to_string(), "-");
    }
}
