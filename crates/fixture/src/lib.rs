//! Day-by-day simulation harness for the shop inventory.
//!
//! Loads (or builds) an inventory, advances it a number of days and renders
//! every intermediate state as a texttest-style report or JSON.

pub mod error;
pub mod inventory;
pub mod report;
pub mod simulation;

pub use error::{FixtureError, FixtureResult};
pub use inventory::{default_inventory, load_inventory, parse_inventory};
pub use report::{ReportFormat, render, render_json, render_text};
pub use simulation::{DaySnapshot, Simulation, simulate};
