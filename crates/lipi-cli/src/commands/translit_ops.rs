use std::io::{self, BufRead, Write};

use lipi_core::translit::{format_segments, segment, transliterate_sentence};
use lipi_core::unicode::has_latin;

use crate::die;

/// Transliterate `words` as one sentence, or each stdin line when empty.
pub fn translit_cmd(words: &[String]) {
    if !words.is_empty() {
        println!("{}", transliterate_sentence(&words.join(" ")));
        return;
    }
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        die!(
            writeln!(out, "{}", transliterate_sentence(&line)),
            "Error writing output: {}"
        );
    }
}

pub fn explain_cmd(word: &str, json: bool) {
    let segs = segment(word);
    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&segs), "Error encoding JSON: {}")
        );
    } else {
        print!("{}", format_segments(word, &segs));
        if !has_latin(word) {
            println!("  (no Roman letters: passed through unchanged)");
        }
    }
}

pub fn normalize_cmd(text: &[String]) {
    println!("{}", lipi_core::normalize_for_search(&text.join(" ")));
}
