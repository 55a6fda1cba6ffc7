use crate::core::validator::JsonValidator;

pub fn run(document: &str, schema: Option<&str>) -> i32 {
    let mut validator = JsonValidator::new(document, schema);
    let outcome = validator.validate();

    for diagnostic in validator.diagnostics() {
        eprintln!("{diagnostic}");
    }

    println!("Validation results:");
    println!("Validation was {}.", outcome.valid);

    if outcome.violations.is_empty() {
        println!("No schema errors.");
    } else {
        for violation in &outcome.violations {
            println!("  {violation}");
        }
    }

    if outcome.valid {
        0
    } else {
        1
    }
}
