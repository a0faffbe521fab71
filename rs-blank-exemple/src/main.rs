use rs_blank_core::expression::literal::{format_value, is_numeric};
use rs_blank_core::{generate_expression, AnswerRow, AnswerSheet, SheetError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The generator is a plain function: rows in, expression out
    let rows = vec![
        AnswerRow::with_blanks("a", ["3", "north"]),
        AnswerRow::with_blanks("b", ["-1.5", ""]),
    ];
    println!("Stateless: {}", generate_expression(&rows, 2));

    // Numbers stay bare, everything else is quoted, empty becomes ""
    for value in ["42", " 7 ", "1e3", "abc", ""] {
        println!("{:?} numeric={} -> {}", value, is_numeric(value), format_value(value));
    }

    // A host keeps its state in an AnswerSheet (2 blanks, one row "1")
    let mut sheet = AnswerSheet::default();
    sheet.set_value("1", 1, "3")?;
    sheet.set_value("1", 2, "north")?;

    // New rows get a random id and empty blanks
    let id = sheet.add_row().id().to_owned();
    sheet.set_value(&id, 1, "4")?;
    println!("Sheet: {}", sheet.expression());

    // Blank count is clamped to 1..=10; rows are resized
    let applied = sheet.set_blank_count(25);
    println!("Requested 25 blanks, got {}", applied);
    sheet.set_blank_count(1);
    println!("One blank: {}", sheet.expression());

    // Addressing a blank past the count is refused
    match sheet.set_value(&id, 2, "x") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{}", e),
    }

    // The last row cannot be removed
    sheet.remove_row("1")?;
    match sheet.remove_row(&id) {
        Err(SheetError::LastRow) => println!("Kept the last row"),
        _ => println!("Should not happen"),
    }

    // Clearing keeps rows but empties values; there is still something to copy
    sheet.clear_values();
    match sheet.copyable_expression() {
        Some(expression) => println!("Copy: {}", expression),
        None => println!("Nothing to copy"),
    }

    Ok(())
}
