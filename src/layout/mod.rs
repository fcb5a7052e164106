pub mod center;
pub mod constraints;

pub use center::{centered_origin, Center};
pub use constraints::{Constraints, Size};
