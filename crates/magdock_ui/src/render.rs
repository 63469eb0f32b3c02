//! Render command emission.
//!
//! The dock never talks to a GPU. Callers and the metrics panel push
//! [`RenderCommand`]s into a [`RenderList`]; a backend either consumes the
//! commands directly or tessellates the solid ones into [`DockVertex`] quads.

use bytemuck::{Pod, Zeroable};

use crate::layout::Rect;
use crate::style::Color;

/// A render command for the dock and its diagnostics.
#[derive(Debug, Clone)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Rectangle outline.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Icon from the application's atlas.
    Icon {
        /// Bounds.
        bounds: Rect,
        /// Icon ID in the atlas.
        icon_id: u32,
        /// Tint color.
        color: Color,
    },
    /// Text.
    Text {
        /// Text content.
        text: String,
        /// X position.
        x: f32,
        /// Y position.
        y: f32,
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
    },
}

/// Collects the frame's render commands.
#[derive(Debug, Default)]
pub struct RenderList {
    /// Commands in submission order.
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Creates a new empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    /// Begins a new frame, discarding last frame's commands.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Returns the commands accumulated this frame.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns the command count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands were pushed this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Tessellates the solid commands (filled rects and icons) into
    /// triangle-list vertices, two triangles per quad. Outlines and text are
    /// backend concerns and are skipped.
    #[must_use]
    pub fn tessellate(&self) -> Vec<DockVertex> {
        let mut vertices = Vec::with_capacity(self.commands.len() * 6);
        for command in &self.commands {
            match command {
                RenderCommand::Rect { bounds, color, .. } => {
                    push_quad(&mut vertices, *bounds, [0.0, 0.0, 1.0, 1.0], *color);
                }
                RenderCommand::Icon { bounds, color, .. } => {
                    push_quad(&mut vertices, *bounds, [0.0, 0.0, 1.0, 1.0], *color);
                }
                RenderCommand::RectOutline { .. } | RenderCommand::Text { .. } => {}
            }
        }
        vertices
    }
}

/// Vertex for dock rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct DockVertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// UV coordinates.
    pub uv: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl DockVertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }
}

fn push_quad(vertices: &mut Vec<DockVertex>, bounds: Rect, uv: [f32; 4], color: Color) {
    let c = color.to_array();
    let (l, t, r, b) = (bounds.x, bounds.y, bounds.right(), bounds.bottom());
    let (u0, v0, u1, v1) = (uv[0], uv[1], uv[2], uv[3]);

    vertices.push(DockVertex::new(l, t, u0, v0, c));
    vertices.push(DockVertex::new(r, t, u1, v0, c));
    vertices.push(DockVertex::new(r, b, u1, v1, c));

    vertices.push(DockVertex::new(l, t, u0, v0, c));
    vertices.push(DockVertex::new(r, b, u1, v1, c));
    vertices.push(DockVertex::new(l, b, u0, v1, c));
}
