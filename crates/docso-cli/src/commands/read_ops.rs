use std::io::{self, BufRead, Write};

use serde::Serialize;

use docso_core::{read_number, InvalidInput};

pub const PROMPT: &str = "Nhập số cần đọc: ";

#[derive(Debug, Serialize)]
pub struct Reading<'a> {
    pub input: &'a str,
    pub reading: String,
}

/// Print a prompt to `output` and read one line from `input`, without
/// surrounding whitespace.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn format_reading(number: &str, json: bool) -> Result<String, InvalidInput> {
    let reading = read_number(number)?;
    if json {
        let entry = Reading {
            input: number,
            reading,
        };
        Ok(serde_json::to_string(&entry).expect("JSON serialization failed"))
    } else {
        Ok(reading)
    }
}

pub fn read_cmd(number: &str, json: bool) {
    let out = die!(format_reading(number, json), "Error: {}");
    println!("{out}");
}

pub fn interactive_cmd() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let line = die!(
        prompt_line(&mut stdin.lock(), &mut stdout.lock()),
        "Error reading input: {}"
    );
    read_cmd(&line, false);
}
