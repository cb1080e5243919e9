use std::fs;

use lipi_core::scheme::{self, Scheme};

use crate::die;

pub fn scheme_export() {
    print!("{}", scheme::default_toml());
}

pub fn scheme_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(Scheme::from_toml(&content), "Error: {}");
    println!("{}", summary(&s));
}

/// Install `file` as the process-wide scheme for the rest of the run.
pub fn load_custom(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(Scheme::init_custom(content), "Error loading scheme {file}: {}");
}

fn summary(s: &Scheme) -> String {
    format!(
        "OK: {} consonants, {} reverse mappings",
        s.consonant_count(),
        s.reverse_count()
    )
}
