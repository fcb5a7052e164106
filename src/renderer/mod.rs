//! Recording side of the renderer.
//!
//! Widgets describe a frame as a list of [`DrawCommand`]s through a
//! [`PaintContext`]. Paths, brushes and gradients are plain values, so the
//! command list can be inspected, replayed by a GPU backend, or compared in
//! tests. [`gpu`] holds the uniform block a shader needs to draw a glass
//! panel in a single pass.

pub mod commands;
pub mod context;
pub mod gpu;
pub mod path;
pub mod types;

pub use commands::DrawCommand;
pub use context::PaintContext;
pub use gpu::{PanelUniformBuffer, PanelUniforms};
pub use path::{Path, PathCommand, RoundedRect};
pub use types::{Brush, GradientStop, LinearGradient, TileMode};
