//! Keyboard shortcuts

use crate::event::{Event, Operator};
use egui::Key;

/// Map one key press to a calculator event.
pub fn event_for_key(key: Key, shift: bool) -> Option<Event> {
    let event = match key {
        Key::Num8 if shift => Event::Operator(Operator::Mul),
        Key::Equals if shift => Event::Operator(Operator::Add),
        Key::Plus => Event::Operator(Operator::Add),
        Key::Minus => Event::Operator(Operator::Sub),
        Key::Slash => Event::Operator(Operator::Div),
        Key::Period => Event::DecimalPoint,
        Key::Enter | Key::Equals => Event::Equals,
        Key::Backspace => Event::Backspace,
        Key::Escape | Key::Delete => Event::ClearAll,
        _ => Event::Digit(key_digit(key)?),
    };
    Some(event)
}

fn key_digit(key: Key) -> Option<char> {
    let digit = match key {
        Key::Num0 => '0',
        Key::Num1 => '1',
        Key::Num2 => '2',
        Key::Num3 => '3',
        Key::Num4 => '4',
        Key::Num5 => '5',
        Key::Num6 => '6',
        Key::Num7 => '7',
        Key::Num8 => '8',
        Key::Num9 => '9',
        _ => return None,
    };
    Some(digit)
}

/// All events from this frame's key presses, in order.
pub fn events_from_input(input: &egui::InputState) -> Vec<Event> {
    input
        .events
        .iter()
        .filter_map(|e| match e {
            egui::Event::Key { key, pressed: true, modifiers, .. } => {
                event_for_key(*key, modifiers.shift)
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(event_for_key(Key::Num0, false), Some(Event::Digit('0')));
        assert_eq!(event_for_key(Key::Num8, false), Some(Event::Digit('8')));
        assert_eq!(event_for_key(Key::Num9, false), Some(Event::Digit('9')));
    }

    #[test]
    fn test_shifted_operators() {
        assert_eq!(event_for_key(Key::Num8, true), Some(Event::Operator(Operator::Mul)));
        assert_eq!(event_for_key(Key::Equals, true), Some(Event::Operator(Operator::Add)));
        assert_eq!(event_for_key(Key::Equals, false), Some(Event::Equals));
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(event_for_key(Key::Backspace, false), Some(Event::Backspace));
        assert_eq!(event_for_key(Key::Escape, false), Some(Event::ClearAll));
        assert_eq!(event_for_key(Key::Enter, false), Some(Event::Equals));
        assert_eq!(event_for_key(Key::Period, false), Some(Event::DecimalPoint));
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(event_for_key(Key::A, false), None);
        assert_eq!(event_for_key(Key::Tab, true), None);
    }
}
