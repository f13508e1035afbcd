//! Terminal output formatting with colors.

use colored::Colorize;

use crate::result::{ComplexityVerdict, TimingVerdict, Verdict};
use crate::types::Expectation;

use super::message::format_secs;

/// Format a Verdict for human-readable terminal output.
pub fn format_verdict(verdict: &Verdict) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("perf-oracle\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    match verdict {
        Verdict::Timing(v) => push_timing(&mut output, v),
        Verdict::Complexity(v) => push_complexity(&mut output, v),
    }

    output.push('\n');
    if verdict.passed() {
        output.push_str(&format!("  {}\n", "\u{2713} Assertion passed".green().bold()));
    } else {
        output.push_str(&format!("  {}\n", "\u{2717} Assertion failed".red().bold()));
        output.push_str(&format!("    {}\n", verdict.failure_message()));
    }

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');
    output
}

fn push_timing(output: &mut String, v: &TimingVerdict) {
    output.push_str(&format!(
        "  Expectation: {} perform under {} s\n",
        direction(v.expectation),
        v.threshold_secs
    ));
    output.push_str(&format!("  Samples: {}\n", v.interval.sample_count));
    output.push_str(&format!(
        "  Mean: {} s (\u{00B1} {} s)\n",
        format_secs(v.mean_secs),
        format_secs(v.margin_secs)
    ));
    output.push_str(&format!(
        "  Upper bound: {} s\n",
        format_secs(v.interval.upper())
    ));
}

fn push_complexity(output: &mut String, v: &ComplexityVerdict) {
    output.push_str(&format!(
        "  Expectation: {} perform {}\n",
        direction(v.expectation),
        v.expected
    ));
    if let (Some(first), Some(last)) = (v.sizes.first(), v.sizes.last()) {
        output.push_str(&format!(
            "  Sizes: {} points in {}..={}\n",
            v.sizes.len(),
            first,
            last
        ));
    }
    match v.observed_fit() {
        Some(fit) => output.push_str(&format!(
            "  Observed: {} (R\u{00B2} = {:.6})\n\n",
            v.observed.to_string().bold(),
            fit.r_squared
        )),
        None => output.push_str(&format!("  Observed: {}\n\n", v.observed.to_string().bold())),
    }

    output.push_str("    model          R\u{00B2}        points\n");
    for fit in &v.fits {
        let line = format!(
            "    {:<14} {:<9.6} {}",
            fit.model.name(),
            fit.r_squared,
            fit.points
        );
        if fit.model == v.observed {
            output.push_str(&format!("{}\n", line.green()));
        } else {
            output.push_str(&line);
            output.push('\n');
        }
    }
}

fn direction(expectation: Expectation) -> &'static str {
    match expectation {
        Expectation::To => "to",
        Expectation::NotTo => "not to",
    }
}
