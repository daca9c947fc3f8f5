use std::collections::HashMap;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use element_spell::elements::{isotope_policy, periodic_table};
use element_spell::{diagnose, segment, CostPolicy, NormalizedText, SymbolTable, ZeroCost};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262_144, 1_048_576];

#[derive(Parser)]
#[command(about = "Scaling and correctness probe for the segmenter.")]
struct Options {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest input length checked against the reference search.
    #[arg(long, default_value_t = 65536)]
    verify_limit: usize,
}

#[derive(Copy, Clone, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    len: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn main() {
    let options = Options::parse();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Segmenter scaling probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  • spelled: texts built from element symbols, must segment");
    eprintln!("  • isotopes: spelled texts with D/T mixed in, cost must be minimal");
    eprintln!("  • random: arbitrary letters, segment and diagnose must agree");
    eprintln!(
        "  • verified against a right-to-left reference up to length {}",
        options.verify_limit
    );
    eprintln!();

    let mut sys = System::new();
    let plain = periodic_table(false);
    let with_isotopes = periodic_table(true);
    let mut measurements = Vec::new();

    eprintln!("[1/3] spelled texts, standard table");
    let spelled = |len| spelled_text(&plain, len, 7);
    measurements.extend(run_scenario(
        "spelled", &plain, &ZeroCost, &options, &mut sys, spelled,
    ));

    eprintln!("[2/3] spelled texts, isotopes discouraged");
    let policy = isotope_policy();
    let mixed = |len| spelled_text(&with_isotopes, len, 11);
    measurements.extend(run_scenario(
        "isotopes",
        &with_isotopes,
        &policy,
        &options,
        &mut sys,
        mixed,
    ));

    eprintln!("[3/3] random letters, standard table");
    let random = |len| random_letters(len, 13);
    measurements.extend(run_scenario(
        "random", &plain, &ZeroCost, &options, &mut sys, random,
    ));

    print_summary(&measurements);
    match options.format {
        OutputFormat::Csv => write_csv(&measurements),
        OutputFormat::Table => write_table(&measurements),
    }
    if measurements.iter().any(|m| m.status == VerificationStatus::Failed) {
        std::process::exit(1);
    }
}

fn run_scenario<C, G>(
    scenario: &'static str,
    table: &SymbolTable,
    policy: &C,
    options: &Options,
    sys: &mut System,
    generate: G,
) -> Vec<Measurement>
where
    C: CostPolicy,
    G: Fn(usize) -> String,
{
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] len {}... ", idx + 1, SIZES.len(), len);
            let raw = generate(len);
            let text = NormalizedText::normalize(&raw);
            let before = rss_kib(sys);
            let start = Instant::now();
            let seg = segment(&text, table, policy);
            let wall_s = start.elapsed().as_secs_f64();
            let rss_delta_kib = rss_kib(sys).saturating_sub(before);

            let (status, detail) = if text.len() > options.verify_limit {
                (VerificationStatus::NotChecked, None)
            } else {
                let found = seg.as_ref().map(|s| (s.score().cost, s.len(), s.joined()));
                verify(&text, table, policy, found)
            };
            eprintln!(
                "{} found={}, time={:.4}s, status={}",
                status.icon(),
                seg.is_some(),
                wall_s,
                status.label()
            );
            Measurement {
                scenario,
                len: text.len(),
                wall_s,
                rss_delta_kib,
                status,
                detail,
            }
        })
        .collect()
}

fn verify<C: CostPolicy>(
    text: &NormalizedText,
    table: &SymbolTable,
    policy: &C,
    found: Option<(u64, usize, String)>,
) -> (VerificationStatus, Option<String>) {
    let baseline = reference_score(text, table, policy);
    match (found, baseline) {
        (Some((cost, count, joined)), Some(expected)) => {
            if joined.to_lowercase() != text.as_str().to_lowercase() {
                (VerificationStatus::Failed, Some("round trip mismatch".into()))
            } else if (cost, count) != expected {
                (
                    VerificationStatus::Failed,
                    Some(format!("expected {expected:?}, got {:?}", (cost, count))),
                )
            } else {
                (VerificationStatus::Passed, None)
            }
        }
        (None, None) => match diagnose(text, table) {
            Ok(d) if d.position <= text.len() => (VerificationStatus::Passed, None),
            Ok(d) => (
                VerificationStatus::Failed,
                Some(format!("position {} past end", d.position)),
            ),
            Err(err) => (VerificationStatus::Failed, Some(err.to_string())),
        },
        (Some(_), None) => (
            VerificationStatus::Failed,
            Some("segmented text the reference rejects".into()),
        ),
        (None, Some(_)) => (
            VerificationStatus::Failed,
            Some("missed a segmentation the reference found".into()),
        ),
    }
}

/// Right-to-left DP over suffixes, independent of the engine's sweep.
fn reference_score<C: CostPolicy>(
    text: &NormalizedText,
    table: &SymbolTable,
    policy: &C,
) -> Option<(u64, usize)> {
    let n = text.len();
    let mut best: Vec<Option<(u64, usize)>> = vec![None; n + 1];
    best[n] = Some((0, 0));
    for i in (0..n).rev() {
        for len in 1..=table.max_len() {
            let end = i + len;
            if end > n {
                break;
            }
            let (Some(sym), Some((cost, count))) = (table.lookup(text.slice(i, end)), best[end])
            else {
                continue;
            };
            let cand = (cost + u64::from(policy.cost(sym)), count + 1);
            if best[i].map_or(true, |b| cand < b) {
                best[i] = Some(cand);
            }
        }
    }
    best[0]
}

/// Seeded text made of whole symbols, so a segmentation exists.
fn spelled_text(table: &SymbolTable, len: usize, seed: u64) -> String {
    let symbols: Vec<&str> = table.symbols().map(|s| s.text()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::with_capacity(len + 2);
    while out.len() < len {
        out.push_str(symbols[rng.gen_range(0..symbols.len())]);
    }
    out
}

fn random_letters(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map(|p| p.memory() / 1024)
        .unwrap_or(0)
}

fn print_summary(measurements: &[Measurement]) {
    eprintln!("\n{}", "=".repeat(80));
    let failed: Vec<_> = measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Failed)
        .collect();
    let passed = measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Passed)
        .count();
    eprintln!(
        "Verification: {} passed, {} failed, {} not checked",
        passed,
        failed.len(),
        measurements.len() - passed - failed.len()
    );
    for m in &failed {
        eprintln!(
            "  ✗ {} (len={}): {}",
            m.scenario,
            m.len,
            m.detail.as_deref().unwrap_or("")
        );
    }

    let mut by_scenario: HashMap<&str, Vec<&Measurement>> = HashMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    let mut names: Vec<_> = by_scenario.keys().copied().collect();
    names.sort_unstable();
    for name in names {
        let ms = &by_scenario[name];
        if let (Some(first), Some(last)) = (ms.first(), ms.last()) {
            let per_char_first = first.wall_s / first.len.max(1) as f64;
            let per_char_last = last.wall_s / last.len.max(1) as f64;
            eprintln!(
                "  {name}: {:.1} ns/char at len {}, {:.1} ns/char at len {}",
                per_char_first * 1e9,
                first.len,
                per_char_last * 1e9,
                last.len
            );
        }
    }
    eprintln!("  per-character time should stay roughly flat (linear scaling)");
    eprintln!("{}", "=".repeat(80));
}

fn write_csv(measurements: &[Measurement]) {
    println!("scenario,len,wall_s,rss_delta_kib,status");
    for m in measurements {
        println!(
            "{},{},{:.6},{},{}",
            m.scenario,
            m.len,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label()
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    println!(
        "{:<10} {:>9} {:>12} {:>14} {:>12}",
        "scenario", "len", "wall_s", "rss_delta_kib", "status"
    );
    for m in measurements {
        println!(
            "{:<10} {:>9} {:>12.6} {:>14} {:>12}",
            m.scenario,
            m.len,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spelled_text_is_seeded_and_segmentable() {
        let table = periodic_table(true);
        let raw = spelled_text(&table, 512, 11);
        assert!(raw.len() >= 512);
        assert_eq!(raw, spelled_text(&table, 512, 11));
        let text = NormalizedText::normalize(&raw);
        assert!(segment(&text, &table, &isotope_policy()).is_some());
    }

    #[test]
    fn random_letters_are_lowercase_ascii() {
        let raw = random_letters(1000, 13);
        assert_eq!(raw.len(), 1000);
        assert!(raw.bytes().all(|b| b.is_ascii_lowercase()));
        assert_eq!(raw, random_letters(1000, 13));
        assert_ne!(raw, random_letters(1000, 14));
    }

    #[test]
    fn reference_score_agrees_with_segment() {
        let table = periodic_table(true);
        let policy = isotope_policy();
        for seed in 0..8 {
            let text = NormalizedText::normalize(&random_letters(64, seed));
            let found = segment(&text, &table, &policy).map(|s| (s.cost(), s.len()));
            assert_eq!(found, reference_score(&text, &table, &policy), "seed {seed}");
        }
    }
}
