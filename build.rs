//! Embeds `data/words.txt` as the built-in daily word list
//!
//! Generates `$OUT_DIR/words.rs` with a `WORDS` slice in file order, so the
//! first entry is the word of day 0.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

const SOURCE: &str = "data/words.txt";

fn main() {
    println!("cargo:rerun-if-changed={SOURCE}");

    let text = fs::read_to_string(SOURCE).unwrap_or_else(|e| panic!("cannot read {SOURCE}: {e}"));

    // Same skipping rules as the runtime loader
    let words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_uppercase)
        .collect();
    assert!(!words.is_empty(), "{SOURCE} has no words");

    let mut code = String::from("/// Built-in daily words, day 0 first\npub const WORDS: &[&str] = &[\n");
    for word in &words {
        writeln!(code, "    {word:?},").unwrap();
    }
    writeln!(
        code,
        "];\n\n/// Number of entries in [`WORDS`]\npub const WORDS_COUNT: usize = {};",
        words.len()
    )
    .unwrap();

    let out = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR")).join("words.rs");
    fs::write(&out, code).unwrap_or_else(|e| panic!("cannot write {}: {e}", out.display()));
}
