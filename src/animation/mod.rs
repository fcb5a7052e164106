mod animatable;
mod timeline;
mod timing;

pub use animatable::Animatable;
pub use timeline::{Period, Repeat, Timeline, TimelineStep};
pub use timing::TimingFunction;
