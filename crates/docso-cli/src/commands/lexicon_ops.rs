use std::fs;

use docso_core::lexicon::{self, Lexicon};
use docso_core::scale::Magnitude;

use super::CommandError;

/// Parse a custom lexicon file without installing it.
pub fn load_lexicon_file(file: &str) -> Result<Lexicon, CommandError> {
    let content = fs::read_to_string(file).map_err(|e| CommandError::io(file, e))?;
    Ok(lexicon::parse_lexicon_toml(&content)?)
}

/// Install a custom lexicon file as the process-wide lexicon.
pub fn install_lexicon_file(file: &str) -> Result<(), CommandError> {
    let content = fs::read_to_string(file).map_err(|e| CommandError::io(file, e))?;
    lexicon::init_custom(content)?;
    Ok(())
}

pub fn lexicon_export() {
    print!("{}", lexicon::default_toml());
}

pub fn lexicon_validate(file: &str) {
    let lex = die!(load_lexicon_file(file), "Error: {}");
    println!(
        "OK: digits {}..{}, scales {} {} {}",
        lex.digit(0),
        lex.digit(9),
        lex.scale(Magnitude::Thousand).unwrap_or("-"),
        lex.scale(Magnitude::Million).unwrap_or("-"),
        lex.scale(Magnitude::Billion).unwrap_or("-"),
    );
}
