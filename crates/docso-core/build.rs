fn main() {
    // Validate the embedded lexicon at compile time.
    validate_toml(
        "src/default_lexicon.toml",
        include_str!("src/default_lexicon.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    let value = match content.parse::<toml::Value>() {
        Ok(v) => v,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    for table in ["digits", "multipliers", "particles", "irregular", "scales"] {
        if value.get(table).is_none() {
            panic!("{path} is missing the [{table}] table");
        }
    }
}
