use slowcalc::{Calculator, Event, Operator};

// Test helpers to reduce boilerplate

fn run(labels: &[&str]) -> Calculator {
    let mut calc = Calculator::new();
    for label in labels {
        let event: Event = label.parse().expect("known button label");
        calc.dispatch(event);
    }
    calc
}

fn digits(s: &str) -> Vec<Event> {
    s.chars().map(Event::Digit).collect()
}

#[test]
fn test_twelve_plus_three() {
    let mut calc = Calculator::new();
    calc.dispatch_all([
        Event::Digit('1'),
        Event::Digit('2'),
        Event::Operator(Operator::Add),
        Event::Digit('3'),
        Event::Equals,
    ]);
    assert_eq!(calc.display(), "15");
}

#[test]
fn test_digits_are_concatenated() {
    for typed in ["7", "42", "9001", "1234567890"] {
        let mut calc = Calculator::new();
        calc.dispatch_all(digits(typed));
        assert_eq!(calc.display(), typed);
        assert_eq!(calc.state().first_operand, typed);
    }
}

#[test]
fn test_second_decimal_point_ignored() {
    let mut calc = run(&["4", "."]);
    let before = calc.state().clone();
    calc.dispatch(Event::DecimalPoint);
    assert_eq!(calc.state(), &before);
}

#[test]
fn test_four_operators() {
    let cases = [
        (["6", "+", "4"], "10"),
        (["6", "−", "4"], "2"),
        (["6", "×", "4"], "24"),
        (["6", "÷", "4"], "1.5"),
    ];
    for (labels, expected) in cases {
        let mut calc = run(&labels);
        calc.dispatch(Event::Equals);
        assert_eq!(calc.display(), expected, "{:?}", labels);
    }
}

#[test]
fn test_square_by_repeated_operand() {
    assert_eq!(run(&["5", "×", "="]).display(), "25");
}

#[test]
fn test_division_by_zero_recovers() {
    let mut calc = run(&["8", "÷", "0", "="]);
    assert_eq!(calc.display(), "Error");

    calc.dispatch(Event::Digit('3'));
    assert_eq!(calc.display(), "3");
}

#[test]
fn test_clear_all_resets_everything() {
    let mut calc = run(&["1", ".", "5", "×", "2"]);
    calc.dispatch(Event::ClearAll);
    assert_eq!(calc.display(), "0");
    assert!(calc.state().first_operand.is_empty());
    assert!(calc.state().second_operand.is_empty());
    assert_eq!(calc.state().pending_operator, None);
    assert!(!calc.state().reset_on_next_digit);
}

#[test]
fn test_backspace_after_operator() {
    let calc = run(&["1", "2", "+", "C"]);
    assert_eq!(calc.display(), "12");
    assert_eq!(calc.state().pending_operator, None);
}

#[test]
fn test_all_clear_label() {
    let calc = run(&["9", "9", "AC"]);
    assert_eq!(calc.display(), "0");
}
