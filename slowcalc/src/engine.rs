//! Calculator engine
//!
//! A two-operand accumulator driven by button events. The operands are kept
//! as the strings the user typed; they are only parsed when `=` runs.
//! Nothing in here fails: unparseable buffers read as zero, and division by
//! zero shows up only as the "Error" display.

use crate::event::{Event, Operator};

/// Display text after a failed calculation.
pub const ERROR_TEXT: &str = "Error";

#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    pub first_operand: String,
    pub second_operand: String,
    pub pending_operator: Option<Operator>,
    /// Next digit starts a new number instead of extending the last result.
    pub reset_on_next_digit: bool,
    pub display_text: String,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            first_operand: String::new(),
            second_operand: String::new(),
            pending_operator: None,
            reset_on_next_digit: false,
            display_text: "0".to_string(),
        }
    }
}

impl EngineState {
    /// Pure transition: consume the state, return the next one.
    pub fn apply(mut self, event: Event) -> Self {
        self.handle(event);
        self
    }

    fn handle(&mut self, event: Event) {
        match event {
            Event::Digit(d) => self.enter_digit(d),
            Event::DecimalPoint => self.enter_decimal(),
            Event::Operator(op) => self.enter_operator(op),
            Event::Equals => self.calculate(),
            Event::Backspace => self.clear_last(),
            Event::ClearAll => *self = Self::default(),
        }
    }

    /// Start over from whatever the display shows.
    fn start_fresh_if_needed(&mut self) {
        if self.reset_on_next_digit {
            self.first_operand = self.display_text.clone();
            self.second_operand.clear();
            self.pending_operator = None;
            self.reset_on_next_digit = false;
        }
    }

    fn enter_digit(&mut self, d: char) {
        self.start_fresh_if_needed();

        if self.pending_operator.is_none() {
            if self.first_operand == "0" || self.first_operand == ERROR_TEXT {
                self.first_operand.clear();
            }
            self.first_operand.push(d);
            self.display_text = self.first_operand.clone();
        } else {
            if self.second_operand == "0" {
                self.second_operand.clear();
            }
            self.second_operand.push(d);
            self.display_text = self.second_operand.clone();
        }
    }

    fn enter_decimal(&mut self) {
        self.start_fresh_if_needed();

        let buffer = if self.pending_operator.is_none() {
            &mut self.first_operand
        } else {
            &mut self.second_operand
        };
        if buffer.contains('.') {
            return;
        }
        if buffer.is_empty() {
            buffer.push('0');
        }
        buffer.push('.');
        self.display_text = buffer.clone();
    }

    fn enter_operator(&mut self, op: Operator) {
        if !self.first_operand.is_empty()
            && !self.second_operand.is_empty()
            && self.pending_operator.is_some()
        {
            self.calculate();
            self.first_operand = self.display_text.clone();
            self.second_operand.clear();
        }

        self.pending_operator = Some(op);
        self.reset_on_next_digit = false;
    }

    fn calculate(&mut self) {
        let op = match self.pending_operator {
            Some(op) if !self.first_operand.is_empty() => op,
            _ => return,
        };

        let a = parse_operand(&self.first_operand);
        let b = if self.second_operand.is_empty() {
            a
        } else {
            parse_operand(&self.second_operand)
        };
        let result = op.apply(a, b);

        if result.is_nan() {
            log::debug!("{} {} {} has no value", a, op, b);
            self.first_operand.clear();
            self.display_text = ERROR_TEXT.to_string();
        } else {
            self.first_operand = format_result(result);
            self.display_text = self.first_operand.clone();
        }
        self.second_operand.clear();
        self.pending_operator = None;
        self.reset_on_next_digit = true;
    }

    fn clear_last(&mut self) {
        if self.pending_operator.is_none() {
            if !self.first_operand.is_empty() {
                self.first_operand.pop();
                self.display_text = display_or_zero(&self.first_operand);
            }
        } else if !self.second_operand.is_empty() {
            self.second_operand.pop();
            self.display_text = display_or_zero(&self.second_operand);
        } else {
            self.pending_operator = None;
            self.display_text = self.first_operand.clone();
        }
        self.reset_on_next_digit = false;
    }
}

/// Unparseable buffers count as zero.
fn parse_operand(buffer: &str) -> f64 {
    buffer.parse().unwrap_or(0.0)
}

fn display_or_zero(buffer: &str) -> String {
    if buffer.is_empty() {
        "0".to_string()
    } else {
        buffer.to_string()
    }
}

/// Round-trip float text with one literal ".0" suffix removed.
pub fn format_result(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

/// One calculator session.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: EngineState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, event: Event) {
        self.state.handle(event);
        log::trace!("{:?} -> {:?}", event, self.state);
    }

    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.dispatch(event);
        }
    }

    pub fn display(&self) -> &str {
        &self.state.display_text
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }
}
