pub mod artifact;
pub mod conversion;
pub mod definition;
pub mod loader;
pub mod project;
pub mod view;

pub use artifact::*;
pub use conversion::*;
pub use definition::{BlockDefinition, CaseStudyDefinition, CatalogDefinition, ProjectDefinition};
pub use loader::*;
pub use project::*;
pub use view::*;
