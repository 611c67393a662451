//! # Presentation Layer
//!
//! User interface logic for the CLI, an adaptation of the
//! **MVVM (Model-View-ViewModel)** pattern. The data flow is strictly
//! unidirectional:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!    (Controller)      (Converter)       (Contract)       (View)        (Console/JSON)
//! ```
//!
//! ## Directory guide
//!
//! * `view_models/` — pure serializable data contracts. No calculation
//!   logic, no domain types leaking through. JSON output is an API: raw
//!   values, not pre-formatted strings.
//! * `presenters/` — pure functions converting domain models into view
//!   models (counts, action labels, empty-state guidance).
//! * `views/` — layout and styling: `fmt::Display` impls for the view
//!   models used by the text output path.
//! * `renderers/` — the output drivers: `ConsoleRenderer` (plain/JSON
//!   switch) and the interactive ratatui planner under `renderers/tui/`.

pub mod presenters;
pub mod renderers;
pub mod view_models;
mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
