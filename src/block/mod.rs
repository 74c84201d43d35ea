pub mod content;
pub mod record;

pub use content::*;
pub use record::*;
