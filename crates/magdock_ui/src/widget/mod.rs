//! The dock bar widget.
//!
//! [`DockUi`] is the application-owned registry of bar states plus the
//! begin/item/end frame protocol; [`show_metrics`] is the diagnostics view
//! over it.

mod bar;
mod metrics;

pub use bar::{BarId, BarState, DockUi};
pub use metrics::show_metrics;
