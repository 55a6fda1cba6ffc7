mod commands;
mod core;

use clap::Parser;
use std::process;

#[derive(Parser)]
#[command(
    name = "jsonval",
    version,
    about = "Validate a JSON document against a JSON Schema (draft 2019-09)"
)]
struct Cli {
    /// Path to the JSON document to validate
    document: Option<String>,

    /// Path to the JSON Schema file (default: a permissive schema)
    schema: Option<String>,

    /// Further positional arguments are accepted and ignored
    #[allow(dead_code)]
    #[arg(trailing_var_arg = true, hide = true)]
    rest: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.document {
        Some(document) => commands::validate::run(&document, cli.schema.as_deref()),
        None => {
            eprintln!("No .json file available!");
            2
        }
    };

    process::exit(exit_code);
}
