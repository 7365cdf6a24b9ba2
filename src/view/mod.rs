//! View module - presentation helpers for the lead grid
//!
//! The core does not own a renderer. It exposes what a renderer needs:
//! per-cell view data, hit-testing of pointer positions, and a plain-text
//! rendering used by the binary and tests.

pub mod render;

pub use hit_test::{hit_test_grid, hover_msg, press_msg, GridLayout, HitTarget, Point};
pub use render::{
    cell_href, cell_view, column_letter, header_view, render_text, truncate_text, CellView,
    HeaderView,
};
