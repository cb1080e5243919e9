fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/scheme/default_scheme.toml",
        include_str!("src/scheme/default_scheme.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    let value = match content.parse::<toml::Value>() {
        Ok(v) => v,
        Err(_) => panic!("{path} contains invalid TOML"),
    };
    for table in ["consonants", "matras", "vowels", "reverse"] {
        if value.get(table).and_then(|t| t.as_table()).is_none() {
            panic!("{path} is missing the [{table}] table");
        }
    }
}
