//! # regatlas-panel — Details Panel Rendering & Selection
//!
//! Turns a [`regatlas_core::CountryRecord`] into the fixed-order HTML
//! template the details panel shows, and models the one piece of mutable
//! state in the whole system: the currently selected region.
//!
//! ## Rendering contract
//!
//! Sections appear in fixed order — Overview, Main Rules, Requirements,
//! Who's in Charge, Sources, Last Updated — and a section backed by an
//! empty list is omitted entirely, never rendered as an empty shell.
//! When no record exists for a code the panel shows exactly two placeholder
//! lines referencing the display name.
//!
//! ## Selection contract
//!
//! At most one region is selected at a time. Selecting replaces the panel
//! content wholesale (no incremental diffing; the UI resets scroll to top on
//! every replacement) and reports which region was deselected so its map
//! styling can be restored. Clearing reverts to the initial prompt after the
//! [`CLEAR_TRANSITION_MS`] visual delay.

mod escape;
pub mod render;
pub mod selection;

pub use escape::escape_html;
pub use render::{render_placeholder, render_record, NO_OVERVIEW_TEXT};
pub use selection::{PanelState, SelectedRegion, CLEAR_TRANSITION_MS, INITIAL_PROMPT_HTML};
