//! # MAGDOCK UI System
//!
//! Dock-style magnification bar designed for:
//! - Pointer-proximity item growth (the "dock" effect)
//! - Fixed-anchor container placement while the bar breathes
//! - Frame-driven updates with zero retained host coupling
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      DOCK PIPELINE                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  PointerState → begin_bar → bar_item × N → end_bar        │
//! │       ↓             ↓            ↓            ↓          │
//! │  Hover Ramp    Placement    Bell Falloff   Content Size   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! This is NOT a window manager. This is a **single toolbar**.
//! - The application owns every byte of state and passes it in each frame
//! - One continuous scalar per bar drives the whole animation
//! - Clamping over error paths; the widget never fails at runtime

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod config;
pub mod effect;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use animation::HoverRamp;
pub use config::{DockConfig, DockFlags};
pub use input::PointerState;
pub use layout::{Axis, LayoutFrame, Rect, Vec2};
pub use render::{DockVertex, RenderCommand, RenderList};
pub use style::{Color, DockStyle};
pub use widget::{show_metrics, BarId, BarState, DockUi};
