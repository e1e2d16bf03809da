//! Behavioural tests driven by terminal key sequences.

use scicalc::config::CalculatorConfig;
use scicalc::core::{AngleMode, BinaryOperator};
use scicalc::engine::{Calculator, Event, Outcome};

fn press(calc: &mut Calculator, line: &str) {
    for event in Event::parse_line(line).unwrap() {
        calc.dispatch(event);
    }
}

fn run(line: &str) -> Calculator {
    let mut calc = Calculator::new();
    press(&mut calc, line);
    calc
}

#[test]
fn add_then_enter() {
    let calc = run("3 + 5 Enter");
    assert_eq!(calc.display(), "8");

    let entries = calc.history().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].expression, "3 + 5");
    assert_eq!(entries[0].result, "8");
}

#[test]
fn chained_operators_resolve_left_to_right() {
    let calc = run("2 + 3 * 4 Enter");
    assert_eq!(calc.display(), "20");

    let expressions: Vec<&str> = calc
        .history()
        .entries()
        .iter()
        .map(|e| e.expression.as_str())
        .collect();
    assert_eq!(expressions, vec!["5 * 4", "2 + 3"]);
}

#[test]
fn decimal_arithmetic_keeps_float_precision() {
    let calc = run("0.1 + 0.2 =");
    assert_eq!(calc.display(), "0.30000000000000004");
}

#[test]
fn escape_clears_everything_but_history() {
    let mut calc = run("9 / 3 Enter 7 *");
    assert_eq!(calc.pending_operator(), Some(BinaryOperator::Multiply));

    press(&mut calc, "Escape");
    assert_eq!(calc.display(), "0");
    assert!(calc.memory().is_empty());
    assert!(calc.pending_operator().is_none());
    assert_eq!(calc.history().len(), 1);

    press(&mut calc, "ch");
    assert!(calc.history().is_empty());
}

#[test]
fn scientific_error_cases() {
    assert_eq!(run("1 - 2 Enter sqrt").display(), "Error");
    assert_eq!(run("0 log").display(), "Error");
    assert_eq!(run("2 shift sin").display(), "Error");
    assert_eq!(run("1 - 4 Enter fact").display(), "Error");
    assert_eq!(run("5 fact").display(), "120");
    assert_eq!(run("0 fact").display(), "1");
}

#[test]
fn sin_ninety_in_both_modes() {
    assert_eq!(run("90 sin").display(), "1");

    let calc = run("rad 90 sin");
    assert_eq!(calc.angle_mode(), AngleMode::Rad);
    let value: f64 = calc.display().parse().unwrap();
    assert!((value - 0.8939966636).abs() < 1e-9);
}

#[test]
fn scientific_history_uses_previous_display_text() {
    let calc = run("16 sqrt x²");
    let entries = calc.history().entries();
    assert_eq!(entries[0].expression, "x²(4)");
    assert_eq!(entries[0].result, "16");
    assert_eq!(entries[1].expression, "sqrt(16)");
    assert_eq!(entries[1].result, "4");
}

#[test]
fn memory_keys() {
    // M+ leaves entry open, so 3 extends 5
    let mut calc = run("5 M+ 3 M+");
    assert_eq!(calc.memory().value(), 58.0);

    press(&mut calc, "MC Escape 2 M- MR");
    assert_eq!(calc.display(), "-2");
    assert_eq!(calc.snapshot().memory.as_deref(), Some("M: -2"));
}

#[test]
fn operator_press_overwrites_memory() {
    let calc = run("7 M+ Escape 4 M+ 6 +");
    assert_eq!(calc.memory().value(), 46.0);
    assert_eq!(calc.display(), "46");
}

#[test]
fn second_calculate_is_ignored() {
    let mut calc = run("4 ^ 3 Enter");
    assert_eq!(calc.display(), "64");
    assert_eq!(calc.history().latest().unwrap().expression, "4 pow 3");
    assert_eq!(calc.dispatch(Event::Calculate), Outcome::Ignored);
    assert_eq!(calc.history().len(), 1);
}

#[test]
fn history_is_capped_at_ten() {
    let mut calc = Calculator::new();
    for i in 1..=11 {
        press(&mut calc, &format!("{} + 0 Enter", i));
    }

    let entries = calc.history().entries();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].expression, "11 + 0");
    assert_eq!(entries[9].expression, "2 + 0");
}

#[test]
fn configured_calculator_starts_in_radians() {
    let config = CalculatorConfig::from_toml_str("angle_mode = \"RAD\"").unwrap();
    let mut calc = Calculator::with_config(config);
    press(&mut calc, "pi cos");
    assert_eq!(calc.display(), "-1");
}

#[test]
fn snapshot_serializes_for_rendering() {
    let calc = run("3 M+ shift 2 *");
    let json = serde_json::to_value(calc.snapshot()).unwrap();

    assert_eq!(json["display"], "32");
    assert_eq!(json["memory"], "M: 32");
    assert_eq!(json["angle_mode"], "DEG");
    assert_eq!(json["shift"], true);
    assert_eq!(json["pending_operator"], "multiply");
    assert_eq!(json["trig_labels"][0], "asin");
    assert!(json["history"].as_array().unwrap().is_empty());
}

#[test]
fn memory_add_on_error_display_accumulates_nan() {
    let mut calc = run("1 - 2 Enter sqrt");
    assert_eq!(calc.display(), "Error");

    press(&mut calc, "M+");
    assert!(calc.memory().value().is_nan());
    assert_eq!(calc.snapshot().memory.as_deref(), Some("M: NaN"));

    press(&mut calc, "MC");
    assert!(calc.snapshot().memory.is_none());
}
