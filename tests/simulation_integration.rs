//! Integration tests for the full pipeline.
//!
//! Generator → reference log → aggregator → report, on seeded streams.

use pagesim::buffer::{aging, Policy};
use pagesim::runner::report::{find_anomalies, render_chart, summarize, write_report};
use pagesim::storage::{write_reference_log, LOG_HEADER};
use pagesim::workload::{generate, ProcessStream};
use pagesim::{Aggregator, Scope, SimConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

const BUDGETS: [usize; 5] = [3, 5, 10, 15, 20];

/// Roughly 80% of references (plus random hits) land in the active working set.
#[test]
fn test_generator_locality_band() {
    let config = SimConfig {
        total_references: 20_000,
        num_processes: 1,
        ..SimConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(2024);
    let mut stream = ProcessStream::new(&config, &mut rng).unwrap();

    let mut local = 0usize;
    let mut total = 0usize;
    loop {
        let ws = stream.working_set();
        let Some(page) = stream.next() else { break };
        total += 1;
        if ws.contains(page) {
            local += 1;
        }
    }

    let fraction = local as f64 / total as f64;
    assert_eq!(total, 20_000);
    assert!(
        (0.75..=0.92).contains(&fraction),
        "working set fraction {} outside tolerance band",
        fraction
    );
}

/// Aging must not fault more when given more frames on a realistic stream.
#[test]
fn test_aging_monotonic_on_generated_stream() {
    let config = SimConfig::default();
    let stream = generate(&config, &mut StdRng::seed_from_u64(17)).unwrap();

    let faults: Vec<u64> = BUDGETS
        .iter()
        .map(|&frames| aging(stream.pages(), frames).unwrap())
        .collect();

    for pair in faults.windows(2) {
        assert!(pair[1] <= pair[0], "aging faults rose: {:?}", faults);
    }
}

#[test]
fn test_end_to_end_default_config() {
    let dir = tempdir().unwrap();
    let config = SimConfig {
        log_path: dir.path().join("references.txt"),
        seed: Some(99),
        ..SimConfig::default()
    };

    let stream = generate(&config, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(stream.len(), 10_000);
    assert_eq!(stream.num_processes(), 5);
    assert_eq!(stream.references_per_process(), 2_000);

    write_reference_log(&config.log_path, &stream).unwrap();
    let log = std::fs::read_to_string(&config.log_path).unwrap();
    assert!(log.starts_with(LOG_HEADER));
    for n in 1..=5 {
        assert!(log.contains(&format!("\nProcess {}:\n", n)));
    }
    let first_line: Vec<&str> = log.lines().nth(3).unwrap().split(' ').collect();
    assert_eq!(first_line.len(), 2_000);

    let table = Aggregator::new(&stream, &BUDGETS).run().unwrap();
    // 2 policies x 5 budgets x (5 processes + total)
    assert_eq!(table.len(), 60);

    for entry in table.entries() {
        assert!(entry.faults <= entry.references as u64);
        let expected_len = match entry.scope {
            Scope::Process(_) => 2_000,
            Scope::Total => 10_000,
        };
        assert_eq!(entry.references, expected_len);
    }

    // Aging anomalies would be a defect.
    assert!(find_anomalies(&table)
        .iter()
        .all(|a| a.policy != Policy::Aging || a.scope != Scope::Total));

    let summaries = summarize(&table);
    assert!(summaries.iter().all(|s| s.mean.is_some() && s.variance.is_some()));

    let mut report = Vec::new();
    write_report(&mut report, &table).unwrap();
    let report = String::from_utf8(report).unwrap();
    assert!(report.contains("Process 5:"));
    assert!(report.contains("Total references: 10000"));

    let chart = render_chart(&table);
    assert!(chart.contains("Frames  20"));
}

#[test]
fn test_same_seed_reproduces_results() {
    let config = SimConfig::default();
    let run = |seed| {
        let stream = generate(&config, &mut StdRng::seed_from_u64(seed)).unwrap();
        let table = Aggregator::new(&stream, &BUDGETS)
            .parallel(true)
            .run()
            .unwrap();
        (stream.fingerprint(), table.faults(Policy::Aging, Scope::Total))
    };

    assert_eq!(run(5), run(5));
}

#[test]
fn test_per_process_results_are_independent() {
    let config = SimConfig::default();
    let stream = generate(&config, &mut StdRng::seed_from_u64(31)).unwrap();
    let table = Aggregator::new(&stream, &[10]).run().unwrap();

    for (index, pages) in stream.processes().enumerate() {
        let entry = table.get(Policy::Aging, Scope::Process(index), 10).unwrap();
        assert_eq!(entry.faults, aging(pages, 10).unwrap());
    }
}
