//! Search latency benchmark against a live backend.
//!
//! For every scenario (mode × ranking) and every query length from 1 to 10
//! characters, issues `samples_per_length` searches with a random word of
//! that length and records the latency of each one. Failed searches are
//! counted but do not stop the run.

use std::time::Instant;

use docsearch_client::SearchService;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::config::BenchSettings;
use crate::error::{AppError, Result};

/// Query words grouped by length.
pub const WORD_BANK: &[(usize, &[&str])] = &[
    (1, &["a", "i"]),
    (2, &[
        "be", "go", "do", "up", "on", "we", "me", "my", "so", "no", "it", "is", "in", "at", "he",
        "am", "as", "by",
    ]),
    (3, &[
        "bad", "dog", "cat", "red", "run", "try", "big", "day", "man", "sun", "map", "car", "box",
        "fun", "the", "and", "you", "not",
    ]),
    (4, &["word", "time", "work", "look", "make", "take", "good", "love", "life"]),
    (5, &["hello", "world", "there", "other", "place", "great", "right", "small"]),
    (6, &["sample", "people", "little", "should", "before", "system"]),
    (7, &["another", "without", "thought"]),
    (8, &["building", "computer", "learning"]),
    (9, &["something", "including", "education"]),
    (10, &["generation", "evaluation", "processing"]),
];

/// Modes exercised by every benchmark run.
pub const BENCH_MODES: &[&str] = &["keyword", "regex"];

/// One mode/ranking combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub mode: String,
    pub ranking: String,
}

impl Scenario {
    pub fn label(&self) -> String {
        format!("{}/{}", self.mode, self.ranking)
    }
}

/// Every mode paired with every configured ranking.
pub fn scenarios(rankings: &[String]) -> Vec<Scenario> {
    BENCH_MODES
        .iter()
        .flat_map(|mode| {
            rankings.iter().map(move |ranking| Scenario {
                mode: (*mode).to_owned(),
                ranking: ranking.clone(),
            })
        })
        .collect()
}

/// Timing summary for one query length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthReport {
    pub query_length: usize,
    pub samples: usize,
    pub failures: usize,
    pub mean_micros: Option<f64>,
    pub std_micros: Option<f64>,
    pub p50_micros: Option<u64>,
    pub p95_micros: Option<u64>,
}

/// All query lengths for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub mode: String,
    pub ranking: String,
    pub lengths: Vec<LengthReport>,
}

/// Full benchmark output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    pub generated_at_epoch_ms: u64,
    pub samples_per_length: usize,
    pub scenarios: Vec<ScenarioReport>,
}

/// Run every scenario against `service`.
///
/// # Errors
///
/// Returns [`AppError::Bench`] if the settings ask for no samples or no
/// rankings. Individual search failures are recorded, not returned.
pub async fn run_benchmark<S: SearchService>(
    service: &S,
    settings: &BenchSettings,
) -> Result<BenchReport> {
    validate_settings(settings)?;

    let mut reports = Vec::new();
    for scenario in scenarios(&settings.rankings) {
        tracing::info!(scenario = %scenario.label(), "benchmark scenario starting");
        let mut lengths = Vec::with_capacity(WORD_BANK.len());
        for (length, words) in WORD_BANK {
            let mut timings = Vec::with_capacity(settings.samples_per_length);
            let mut failures = 0;
            for _ in 0..settings.samples_per_length {
                let query = pick_word(*words);
                let start = Instant::now();
                match service.search(query, &scenario.mode, &scenario.ranking).await {
                    Ok(_) => timings.push(elapsed_micros(start)),
                    Err(e) => {
                        tracing::warn!(query_length = *length, error = %e, "benchmark search failed");
                        failures += 1;
                    }
                }
            }
            lengths.push(build_length_report(*length, settings.samples_per_length, failures, timings));
        }
        reports.push(ScenarioReport {
            scenario: scenario.label(),
            mode: scenario.mode,
            ranking: scenario.ranking,
            lengths,
        });
    }

    Ok(BenchReport {
        generated_at_epoch_ms: now_epoch_millis(),
        samples_per_length: settings.samples_per_length,
        scenarios: reports,
    })
}

/// Write a report as pretty JSON.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized or written.
pub fn write_report(report: &BenchReport, output: &std::path::Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| AppError::Bench(format!("failed to serialize bench report: {e}")))?;
    std::fs::write(output, json)?;
    Ok(())
}

/// Plain-text table: one block per scenario, one column per query length.
pub fn render_table(report: &BenchReport) -> String {
    let mut out = String::new();
    for scenario in &report.scenarios {
        let lengths = &scenario.lengths;
        out.push_str(&format!("--- {} ---\n", scenario.scenario));
        out.push_str(&table_row("length", lengths, |l| l.query_length.to_string()));
        out.push_str(&table_row("mean_us", lengths, |l| fmt_opt(l.mean_micros)));
        out.push_str(&table_row("std_us", lengths, |l| fmt_opt(l.std_micros)));
        out.push_str(&table_row("mean+std", lengths, |l| {
            fmt_opt(l.mean_micros.zip(l.std_micros).map(|(m, s)| m + s))
        }));
        out.push_str(&table_row("mean-std", lengths, |l| {
            fmt_opt(l.mean_micros.zip(l.std_micros).map(|(m, s)| m - s))
        }));
        out.push_str(&table_row("p50_us", lengths, |l| fmt_micros(l.p50_micros)));
        out.push_str(&table_row("p95_us", lengths, |l| fmt_micros(l.p95_micros)));
        out.push_str(&table_row("failures", lengths, |l| l.failures.to_string()));
    }
    out
}

fn table_row(name: &str, lengths: &[LengthReport], cell: impl Fn(&LengthReport) -> String) -> String {
    let cells: Vec<String> = lengths.iter().map(cell).collect();
    format!("{name:<10}{}\n", cells.join("\t"))
}

fn validate_settings(settings: &BenchSettings) -> Result<()> {
    if settings.samples_per_length == 0 {
        return Err(AppError::Bench(
            "samples_per_length must be greater than zero".to_owned(),
        ));
    }
    if settings.rankings.is_empty() {
        return Err(AppError::Bench("at least one ranking is required".to_owned()));
    }
    Ok(())
}

fn pick_word(words: &'static [&'static str]) -> &'static str {
    let mut rng = rand::thread_rng();
    words.choose(&mut rng).copied().unwrap_or("a")
}

fn build_length_report(
    query_length: usize,
    samples: usize,
    failures: usize,
    mut timings_micros: Vec<u64>,
) -> LengthReport {
    timings_micros.sort_unstable();
    LengthReport {
        query_length,
        samples,
        failures,
        mean_micros: mean(&timings_micros),
        std_micros: sample_std(&timings_micros),
        p50_micros: percentile(&timings_micros, 50),
        p95_micros: percentile(&timings_micros, 95),
    }
}

fn mean(values: &[u64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation; needs at least two values.
fn sample_std(values: &[u64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let var = values
        .iter()
        .map(|&v| (v as f64 - m).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;
    Some(var.sqrt())
}

fn percentile(sorted: &[u64], pct: usize) -> Option<u64> {
    if sorted.is_empty() {
        return None;
    }
    let idx = (sorted.len().saturating_sub(1) * pct) / 100;
    Some(sorted[idx])
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "ERR".to_owned(), |v| format!("{v:.1}"))
}

fn fmt_micros(value: Option<u64>) -> String {
    value.map_or_else(|| "ERR".to_owned(), |v| v.to_string())
}

fn elapsed_micros(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}

fn now_epoch_millis() -> u64 {
    match std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
        Ok(d) => u64::try_from(d.as_millis()).unwrap_or(u64::MAX),
        Err(_) => 0,
    }
}
