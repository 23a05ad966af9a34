//! Plain-text rendering of scenario reports.
use std::io::{self, Write};

use effect_content::ScenarioReport;

/// Writes the final stats, expectation checks and the battle log of one run.
pub fn write_report<W: Write>(out: &mut W, report: &ScenarioReport) -> io::Result<()> {
    writeln!(out, "--- {} ---", report.name)?;
    if !report.description.is_empty() {
        writeln!(out, "{}", report.description)?;
    }

    for (entity, stats) in &report.stats {
        writeln!(
            out,
            "entity {}: attack={:.2} defense={:.2} shield={:.2}",
            entity.0, stats.attack, stats.defense, stats.shield
        )?;
    }

    for check in &report.expectations {
        let verdict = if check.passed() { "PASS" } else { "FAIL" };
        writeln!(
            out,
            "[{}] entity {} {}: expected {:.2}, got {:.2}",
            verdict, check.entity.0, check.field, check.expected, check.actual
        )?;
    }

    writeln!(out, "=== BATTLE LOG ===")?;
    for entry in report.log.iter() {
        writeln!(out, "{}", entry)?;
    }
    writeln!(out, "==================")?;
    writeln!(out)
}
