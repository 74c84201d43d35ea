pub mod display;
pub mod html;
pub mod model;

pub use display::*;
pub use html::*;
pub use model::*;
