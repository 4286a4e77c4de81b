//! Build script to generate embedded category word lists
//!
//! Reads the word files under data/categories/ and generates Rust source
//! code with const arrays, one per category, plus a category table.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const CATEGORIES: &[(&str, &str)] = &[
    ("animals", "data/categories/animals.txt"),
    ("countries", "data/categories/countries.txt"),
    ("programming", "data/categories/programming.txt"),
    ("science", "data/categories/science.txt"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("categories.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated category word lists").unwrap();
    writeln!(output).unwrap();

    for (name, input_path) in CATEGORIES {
        generate_word_list(input_path, &mut output, name);
        println!("cargo:rerun-if-changed={input_path}");
    }

    // Table mapping category names to their word lists
    writeln!(output, "/// Built-in categories and their word lists").unwrap();
    writeln!(
        output,
        "pub const CATEGORIES: &[(&str, &[&str])] = &["
    )
    .unwrap();
    for (name, _) in CATEGORIES {
        writeln!(
            output,
            "    (\"{name}\", {const_name}),",
            const_name = name.to_uppercase()
        )
        .unwrap();
    }
    writeln!(output, "];").unwrap();
}

fn generate_word_list(input_path: &str, output: &mut fs::File, name: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let const_name = name.to_uppercase();

    writeln!(output, "/// Embedded '{name}' word list").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
