pub mod features;
pub mod input;
pub mod linear;

pub use features::*;
pub use input::*;
pub use linear::*;
