pub mod block;
pub mod glass_panel;
pub mod widget;

pub use block::{block, Block};
pub use glass_panel::{glass_panel, GlassPanel};
pub use widget::{Color, Point, Rect, Widget};
