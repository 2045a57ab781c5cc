use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::process;

use serde::{Deserialize, Serialize};

use docso_core::read_number;

use super::CommandError;

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    pub input: String,
    pub expected: String,
    pub category: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub status: AccuracyStatus,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct AccuracyReport {
    pub results: Vec<AccuracyResult>,
    pub summary: AccuracySummary,
}

pub fn parse_corpus(toml_str: &str) -> Result<AccuracyCorpus, CommandError> {
    Ok(toml::from_str(toml_str)?)
}

pub fn load_corpus(corpus_file: &str) -> Result<AccuracyCorpus, CommandError> {
    let content = fs::read_to_string(corpus_file).map_err(|e| CommandError::io(corpus_file, e))?;
    parse_corpus(&content)
}

fn run_case(case: &AccuracyCase) -> AccuracyResult {
    let (actual, status) = if case.skip {
        (String::new(), AccuracyStatus::Skip)
    } else {
        // Invalid inputs fail with the error text as the actual output.
        let actual = read_number(&case.input).unwrap_or_else(|e| format!("error: {e}"));
        let status = if actual == case.expected {
            AccuracyStatus::Pass
        } else {
            AccuracyStatus::Fail
        };
        (actual, status)
    };
    AccuracyResult {
        input: case.input.clone(),
        expected: case.expected.clone(),
        actual,
        status,
        category: case.category.clone(),
        note: case.note.clone(),
    }
}

/// Run all cases, optionally restricted to one category.
pub fn run_accuracy(corpus: &AccuracyCorpus, category: Option<&str>) -> AccuracyReport {
    let results: Vec<AccuracyResult> = corpus
        .cases
        .iter()
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .map(run_case)
        .collect();

    let count = |s: AccuracyStatus| results.iter().filter(|r| r.status == s).count();
    let total = results.len();
    let pass = count(AccuracyStatus::Pass);
    let fail = count(AccuracyStatus::Fail);
    let skip = count(AccuracyStatus::Skip);
    let tested = total - skip;
    let rate = if tested > 0 {
        pass as f64 / tested as f64 * 100.0
    } else {
        0.0
    };

    AccuracyReport {
        results,
        summary: AccuracySummary {
            total,
            pass,
            fail,
            skip,
            pass_rate: format!("{:.1}%", rate),
        },
    }
}

/// Human-readable report grouped by category.
pub fn format_text(report: &AccuracyReport, verbose: bool) -> String {
    let mut out = String::new();
    let mut grouped: BTreeMap<&str, Vec<&AccuracyResult>> = BTreeMap::new();
    for r in &report.results {
        grouped.entry(&r.category).or_default().push(r);
    }

    for (cat, group) in &grouped {
        let _ = writeln!(out, "\n=== {} ({} cases) ===", cat, group.len());
        for r in group {
            match r.status {
                AccuracyStatus::Pass => {
                    if verbose {
                        let _ = writeln!(out, "  \u{2713} {} \u{2192} {}", r.input, r.expected);
                    }
                }
                AccuracyStatus::Fail => {
                    let _ = writeln!(
                        out,
                        "  \u{2717} {} \u{2192} {} (got: {})",
                        r.input, r.expected, r.actual
                    );
                }
                AccuracyStatus::Skip => {
                    let reason = r.note.as_deref().unwrap_or("known failure");
                    let _ = writeln!(out, "  - {} [skip: {}]", r.input, reason);
                }
            }
        }
    }

    let s = &report.summary;
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Summary ===");
    let _ = writeln!(out, "  Total:     {}", s.total);
    let _ = writeln!(out, "  Pass:      {:>3}", s.pass);
    let _ = writeln!(out, "  Fail:      {:>3}", s.fail);
    let _ = writeln!(out, "  Skip:      {:>3}", s.skip);
    let _ = writeln!(
        out,
        "  Pass rate: {} ({}/{})",
        s.pass_rate,
        s.pass,
        s.total - s.skip
    );
    out
}

pub fn accuracy_cmd(corpus_file: &str, category: Option<&str>, verbose: bool, json: bool) {
    let corpus = die!(load_corpus(corpus_file), "Error: {}");
    let report = run_accuracy(&corpus, category);

    if report.results.is_empty() {
        eprintln!("No cases match the given filters");
        process::exit(1);
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization failed")
        );
    } else {
        print!("{}", format_text(&report, verbose));
    }

    if report.summary.fail > 0 {
        process::exit(1);
    }
}
