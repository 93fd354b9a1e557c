//! Reporting - text results, summary statistics, and the fault-rate chart.

use std::fmt::Write as _;
use std::io::{self, Write};

use log::{info, warn};

use crate::buffer::Policy;
use crate::runner::{ResultsTable, Scope};

/// Width of the longest bar in [`render_chart`].
const CHART_WIDTH: usize = 50;

/// Arithmetic mean; `None` for no samples.
pub fn mean(samples: &[u64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().map(|&s| s as f64).sum::<f64>() / samples.len() as f64)
}

/// Sample variance (n - 1 denominator); `None` for fewer than two samples.
pub fn variance(samples: &[u64]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let mean = mean(samples)?;
    let squares: f64 = samples
        .iter()
        .map(|&s| {
            let d = s as f64 - mean;
            d * d
        })
        .sum();
    Some(squares / (samples.len() - 1) as f64)
}

/// Format an optional statistic, `undefined` when missing.
pub fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "undefined".to_string(),
    }
}

/// Mean and variance of one policy's total-scope fault counts across budgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicySummary {
    pub policy: Policy,
    pub mean: Option<f64>,
    pub variance: Option<f64>,
}

/// Summarize the total scope of every policy.
pub fn summarize(table: &ResultsTable) -> Vec<PolicySummary> {
    Policy::ALL
        .iter()
        .map(|&policy| {
            let faults = table.faults(policy, Scope::Total);
            PolicySummary {
                policy,
                mean: mean(&faults),
                variance: variance(&faults),
            }
        })
        .collect()
}

/// A budget increase that produced more faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anomaly {
    pub policy: Policy,
    pub scope: Scope,
    pub smaller_frames: usize,
    pub smaller_faults: u64,
    pub larger_frames: usize,
    pub larger_faults: u64,
}

/// Find every adjacent pair of budgets (in ascending order) where faults rose.
pub fn find_anomalies(table: &ResultsTable) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();

    for scope in table.scopes() {
        for policy in Policy::ALL {
            let mut series: Vec<(usize, u64)> = table
                .series(policy, scope)
                .map(|e| (e.frames, e.faults))
                .collect();
            series.sort_unstable();
            series.dedup_by_key(|(frames, _)| *frames);

            for pair in series.windows(2) {
                let (smaller_frames, smaller_faults) = pair[0];
                let (larger_frames, larger_faults) = pair[1];
                if larger_faults > smaller_faults {
                    anomalies.push(Anomaly {
                        policy,
                        scope,
                        smaller_frames,
                        smaller_faults,
                        larger_frames,
                        larger_faults,
                    });
                }
            }
        }
    }

    anomalies
}

/// Log anomalies: expected for FIFO, a defect for Aging.
pub fn log_anomalies(anomalies: &[Anomaly]) {
    for a in anomalies {
        match a.policy {
            Policy::Fifo => info!(
                "Belady's anomaly ({}): FIFO {} faults with {} frames, {} with {}",
                a.scope, a.smaller_faults, a.smaller_frames, a.larger_faults, a.larger_frames
            ),
            Policy::Aging => warn!(
                "Aging fault count rose with more frames ({}): {} with {} frames, {} with {}",
                a.scope, a.smaller_faults, a.smaller_frames, a.larger_faults, a.larger_frames
            ),
        }
    }
}

/// Write the per-process results, aggregated results, and statistics.
pub fn write_report<W: Write>(out: &mut W, table: &ResultsTable) -> io::Result<()> {
    writeln!(out, "Results per Process:")?;
    for scope in table.scopes() {
        if scope == Scope::Total {
            continue;
        }
        writeln!(out)?;
        writeln!(out, "{}:", scope)?;
        for &frames in table.budgets() {
            writeln!(out, "Frames: {}", frames)?;
            for policy in Policy::ALL {
                if let Some(e) = table.get(policy, scope, frames) {
                    writeln!(
                        out,
                        "  {:<5} - Faults: {} ({:.2} per 1000), Time: {:.6} s",
                        policy.name(),
                        e.faults,
                        e.faults_per_thousand(),
                        e.elapsed.as_secs_f64()
                    )?;
                }
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Aggregated Results:")?;
    for &frames in table.budgets() {
        writeln!(out)?;
        writeln!(out, "Frames: {}", frames)?;
        for policy in Policy::ALL {
            if let Some(e) = table.get(policy, Scope::Total, frames) {
                writeln!(
                    out,
                    "  {:<5} - Total: {} ({:.2} per 1000)",
                    policy.name(),
                    e.faults,
                    e.faults_per_thousand()
                )?;
            }
        }
    }

    let references = table
        .scope_entries(Scope::Total)
        .next()
        .map_or(0, |e| e.references);

    writeln!(out)?;
    writeln!(out, "--- Total Statistics ---")?;
    writeln!(out, "Total references: {}", references)?;
    for summary in summarize(table) {
        writeln!(out)?;
        writeln!(
            out,
            "{} - Mean faults: {}",
            summary.policy,
            format_stat(summary.mean)
        )?;
        writeln!(
            out,
            "{} - Variance: {}",
            summary.policy,
            format_stat(summary.variance)
        )?;
    }

    Ok(())
}

/// Render total-scope faults per 1000 references as a text bar chart.
///
/// ```text
/// Page Faults per 1000 References (Total)
///
/// Frames   3 | FIFO  ######################################## 402.10
///            | Aging ##################################### 371.30
/// ```
pub fn render_chart(table: &ResultsTable) -> String {
    let rows: Vec<(usize, Policy, f64)> = table
        .budgets()
        .iter()
        .flat_map(|&frames| {
            Policy::ALL.into_iter().filter_map(move |policy| {
                table
                    .get(policy, Scope::Total, frames)
                    .map(|e| (frames, policy, e.faults_per_thousand()))
            })
        })
        .collect();

    let max = rows.iter().map(|&(_, _, rate)| rate).fold(0.0_f64, f64::max);

    let mut chart = String::new();
    let _ = writeln!(chart, "Page Faults per 1000 References (Total)");
    let _ = writeln!(chart);

    let mut last_frames = None;
    for (frames, policy, rate) in rows {
        let bar = if max > 0.0 {
            ((rate / max) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        let label = if last_frames == Some(frames) {
            String::new()
        } else {
            format!("Frames {:>3}", frames)
        };
        last_frames = Some(frames);

        let _ = writeln!(
            chart,
            "{:<10} | {:<5} {} {:.2}",
            label,
            policy.name(),
            "#".repeat(bar),
            rate
        );
    }

    chart
}
