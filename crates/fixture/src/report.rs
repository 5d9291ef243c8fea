use crate::error::FixtureResult;
use crate::simulation::Simulation;

/// Output layout for a simulation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Texttest-style plain text, one block per day.
    #[default]
    Text,
    /// Pretty-printed JSON of every snapshot.
    Json,
}

pub fn render(simulation: &Simulation, format: ReportFormat) -> FixtureResult<String> {
    match format {
        ReportFormat::Text => Ok(render_text(simulation)),
        ReportFormat::Json => render_json(simulation),
    }
}

/// Render the classic approval-test layout:
///
/// ```text
/// OMGHAI!
/// -------- day 0 --------
/// name, sellIn, quality
/// +5 Dexterity Vest, 10, 20
///
/// ```
pub fn render_text(simulation: &Simulation) -> String {
    let mut out = String::from("OMGHAI!\n");
    for snapshot in &simulation.days {
        out.push_str(&format!("-------- day {} --------\n", snapshot.day));
        out.push_str("name, sellIn, quality\n");
        for item in &snapshot.items {
            out.push_str(&format!("{item}\n"));
        }
        out.push('\n');
    }
    out
}

pub fn render_json(simulation: &Simulation) -> FixtureResult<String> {
    Ok(serde_json::to_string_pretty(simulation)?)
}
