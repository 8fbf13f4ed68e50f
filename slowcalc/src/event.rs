//! Calculator input events and button labels

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseEventError {
    #[error("unknown button label: {0:?}")]
    UnknownLabel(String),
    #[error("not a decimal digit: {0:?}")]
    InvalidDigit(char),
}

/// The four binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Glyph shown on the button.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "−",
            Operator::Mul => "×",
            Operator::Div => "÷",
        }
    }

    /// Accepts the button glyph or its ASCII spelling.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operator::Add),
            "−" | "-" => Some(Operator::Sub),
            "×" | "*" | "x" => Some(Operator::Mul),
            "÷" | "/" => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => {
                if b != 0.0 {
                    a / b
                } else {
                    f64::NAN
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Digit(char),
    DecimalPoint,
    Operator(Operator),
    Equals,
    /// "C": drop one character, or cancel a pending operator.
    Backspace,
    /// "AC"
    ClearAll,
}

impl Event {
    /// Checked constructor for [`Event::Digit`].
    pub fn digit(c: char) -> Result<Self, ParseEventError> {
        if c.is_ascii_digit() {
            Ok(Event::Digit(c))
        } else {
            Err(ParseEventError::InvalidDigit(c))
        }
    }

    pub fn from_label(label: &str) -> Result<Self, ParseEventError> {
        match label {
            "." => return Ok(Event::DecimalPoint),
            "=" => return Ok(Event::Equals),
            "C" => return Ok(Event::Backspace),
            "AC" => return Ok(Event::ClearAll),
            _ => {}
        }
        if let Some(op) = Operator::from_symbol(label) {
            return Ok(Event::Operator(op));
        }
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => Ok(Event::Digit(c)),
            _ => Err(ParseEventError::UnknownLabel(label.to_string())),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Event::Digit(c) => c.to_string(),
            Event::DecimalPoint => ".".into(),
            Event::Operator(op) => op.symbol().into(),
            Event::Equals => "=".into(),
            Event::Backspace => "C".into(),
            Event::ClearAll => "AC".into(),
        }
    }
}

impl FromStr for Event {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::from_label(s)
    }
}

/// Button grid, top to bottom.
pub const BUTTON_ROWS: [&[&str]; 5] = [
    &["7", "8", "9", "÷"],
    &["4", "5", "6", "×"],
    &["1", "2", "3", "−"],
    &["0", ".", "=", "+"],
    &["AC", "C"],
];
