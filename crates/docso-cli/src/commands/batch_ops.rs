use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process;

use serde::Serialize;
use tracing::debug;

use docso_core::read_number;

use super::CommandError;

/// One processed input line. Exactly one of `reading` and `error` is set.
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    pub line: usize,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Numbers from `reader` with their 1-based line numbers. Blank lines and
/// `#` comments are skipped.
pub fn read_inputs<R: BufRead>(reader: R) -> io::Result<Vec<(usize, String)>> {
    let mut inputs = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        inputs.push((i + 1, line.to_string()));
    }
    Ok(inputs)
}

pub fn run_batch(inputs: Vec<(usize, String)>) -> Vec<BatchEntry> {
    inputs
        .into_iter()
        .map(|(line, input)| {
            let (reading, error) = match read_number(&input) {
                Ok(r) => (Some(r), None),
                Err(e) => (None, Some(e.to_string())),
            };
            BatchEntry {
                line,
                input,
                reading,
                error,
            }
        })
        .collect()
}

/// Write entries as text (`input<TAB>reading`) or JSON lines.
pub fn write_entries<W: Write>(out: &mut W, entries: &[BatchEntry], json: bool) -> io::Result<()> {
    for entry in entries {
        if json {
            let line = serde_json::to_string(entry).expect("JSON serialization failed");
            writeln!(out, "{line}")?;
        } else if let Some(ref reading) = entry.reading {
            writeln!(out, "{}\t{}", entry.input, reading)?;
        }
    }
    Ok(())
}

pub fn load_inputs(input_file: &str) -> Result<Vec<(usize, String)>, CommandError> {
    let file = fs::File::open(input_file).map_err(|e| CommandError::io(input_file, e))?;
    read_inputs(BufReader::new(file)).map_err(|e| CommandError::io(input_file, e))
}

pub fn batch_cmd(input_file: &str, output_file: Option<&str>, json: bool) {
    let inputs = die!(load_inputs(input_file), "Error: {}");
    let entries = run_batch(inputs);

    let failed: Vec<&BatchEntry> = entries.iter().filter(|e| e.error.is_some()).collect();
    for entry in &failed {
        eprintln!(
            "line {}: {:?}: {}",
            entry.line,
            entry.input,
            entry.error.as_deref().unwrap_or_default()
        );
    }
    debug!(total = entries.len(), failed = failed.len(), "batch done");

    let result = match output_file {
        Some(path) => fs::File::create(path).and_then(|f| {
            let mut w = BufWriter::new(f);
            write_entries(&mut w, &entries, json)?;
            w.flush()
        }),
        None => write_entries(&mut io::stdout().lock(), &entries, json),
    };
    die!(result, "Error writing output: {}");

    if let Some(path) = output_file {
        eprintln!(
            "Wrote {} readings to {} ({} failed)",
            entries.len() - failed.len(),
            path,
            failed.len()
        );
    }
    if !failed.is_empty() {
        process::exit(1);
    }
}
