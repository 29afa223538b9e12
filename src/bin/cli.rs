//! Command-line front end for the dashboard compiler
//!
//! Reads a YAML dashboard file and writes the compiled component tree as
//! JSON to stdout or to a file. Compilation itself never fails; only I/O
//! problems exit non-zero.

use std::env;
use std::fs;
use std::process;

use anyhow::{Context, Result};

use dashc::compile_str;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <dashboard.yaml> [output.json]", args[0]);
        eprintln!("Example: {} demos/sales.yaml dashboard.json", args[0]);
        process::exit(1);
    }

    let input_path = &args[1];
    let content =
        fs::read_to_string(input_path).with_context(|| format!("reading '{}'", input_path))?;

    let tree = compile_str(&content);
    let output = serde_json::to_string_pretty(&tree).context("serializing component tree")?;

    match args.get(2) {
        Some(output_path) => {
            fs::write(output_path, output).with_context(|| format!("writing '{}'", output_path))?
        }
        None => println!("{}", output),
    }

    Ok(())
}
