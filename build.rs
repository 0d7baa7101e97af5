//! Build script to generate the embedded word lists
//!
//! Reads the two-record word source and generates Rust source code with
//! const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORD_SOURCE: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let content = fs::read_to_string(WORD_SOURCE)
        .unwrap_or_else(|e| panic!("Failed to read {WORD_SOURCE}: {e}"));

    let mut records = content.lines();
    let secrets = records
        .next()
        .unwrap_or_else(|| panic!("{WORD_SOURCE} is missing the secret-pool record"));
    let dictionary = records
        .next()
        .unwrap_or_else(|| panic!("{WORD_SOURCE} is missing the dictionary record"));

    generate_word_list(
        secrets,
        &Path::new(&out_dir).join("secrets.rs"),
        "SECRETS",
        "Secret-candidate pool (record 1 of the word source)",
    );

    generate_word_list(
        dictionary,
        &Path::new(&out_dir).join("dictionary.rs"),
        "DICTIONARY",
        "Acceptable guess words (record 2 of the word source)",
    );

    // Rebuild if the word source changes
    println!("cargo:rerun-if-changed={WORD_SOURCE}");
}

fn generate_word_list(record: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let words: Vec<&str> = record.split_whitespace().collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
