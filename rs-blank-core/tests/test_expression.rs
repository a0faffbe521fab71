//! Behavioural tests for expression generation

use rs_blank_core::expression::literal::{format_value, is_numeric};
use rs_blank_core::{generate_expression, AnswerRow};

#[test]
fn test_numeric_pattern() {
    assert!(is_numeric("42"));
    assert!(is_numeric(" -0.25 "));
    assert!(!is_numeric(""));
    assert!(!is_numeric("+1"));
    assert!(!is_numeric("1e3"));
    assert!(!is_numeric("1,5"));
}

#[test]
fn test_format_value_examples() {
    assert_eq!(format_value(""), r#""""#);
    assert_eq!(format_value("42"), "42");
    assert_eq!(format_value("-3.5"), "-3.5");
    assert_eq!(format_value("abc"), r#""abc""#);
    assert_eq!(format_value("  7  "), "7");
}

#[test]
fn test_no_rows_gives_empty_string() {
    for n in [0, 1, 2, 10] {
        assert_eq!(generate_expression(&[], n), "");
    }
}

#[test]
fn test_zero_blanks_keeps_separators() {
    let one = vec![AnswerRow::with_blanks("a", ["1"])];
    assert_eq!(generate_expression(&one, 0), "()");

    let two = vec![AnswerRow::new("a"), AnswerRow::new("b")];
    assert_eq!(generate_expression(&two, 0), "(或)");
}

#[test]
fn test_single_row_conjunction() {
    let rows = vec![AnswerRow::with_blanks("a", ["5", ""])];
    assert_eq!(generate_expression(&rows, 2), r#"((空1)=5且(空2)="")"#);
}

#[test]
fn test_rows_joined_with_disjunction() {
    let rows = vec![
        AnswerRow::with_blanks("a", ["3"]),
        AnswerRow::with_blanks("b", ["x"]),
    ];
    assert_eq!(generate_expression(&rows, 1), r#"((空1)=3或(空1)="x")"#);
}

#[test]
fn test_missing_blanks_are_empty() {
    let rows = vec![AnswerRow::new("a")];
    assert_eq!(generate_expression(&rows, 2), r#"((空1)=""且(空2)="")"#);
}

#[test]
fn test_row_order_preserved_and_blanks_ascending() {
    // Blanks set out of order still render 1..=n.
    let mut first = AnswerRow::new("first");
    first.set_blank(3, "c").unwrap();
    first.set_blank(1, "a").unwrap();
    first.set_blank(2, "b").unwrap();
    let second = AnswerRow::with_blanks("second", ["1", "2", "3"]);

    let expression = generate_expression(&[second.clone(), first.clone()], 3);
    assert_eq!(
        expression,
        r#"((空1)=1且(空2)=2且(空3)=3或(空1)="a"且(空2)="b"且(空3)="c")"#
    );

    let swapped = generate_expression(&[first, second], 3);
    assert!(swapped.starts_with(r#"((空1)="a""#));
}

#[test]
fn test_generation_is_idempotent() {
    let rows = vec![
        AnswerRow::with_blanks("a", ["1.5", " y "]),
        AnswerRow::with_blanks("b", ["-2", ""]),
    ];
    let first = generate_expression(&rows, 2);
    let second = generate_expression(&rows, 2);
    assert_eq!(first, second);
    assert_eq!(first, r#"((空1)=1.5且(空2)="y"或(空1)=-2且(空2)="")"#);
}

#[test]
fn test_ten_blanks_labels() {
    let rows = vec![AnswerRow::with_blanks("a", (1..=10).map(|i| i.to_string()))];
    let expression = generate_expression(&rows, 10);
    assert!(expression.ends_with("(空10)=10)"));
    assert_eq!(expression.matches('且').count(), 9);
}
