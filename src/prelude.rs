//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the casebook crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use casebook::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = CatalogLoader::default().load_file("path/to/catalog.json")?;
//! let renderer = Renderer::default();
//!
//! for project in catalog.iter() {
//!     let document = renderer.render_project(project);
//!     println!("{}", DisplayDocument::new(&document));
//! }
//! # Ok(())
//! # }
//! ```

// Rendering
pub use crate::render::{Renderer, RendererBuilder};

// Content model
pub use crate::block::{
    CaseStudyRecord, ContentBlock, DefaultRecord, ImageBlock, ImageStyle, ListBlock, ListItem,
    ListStyle, StatItem, StatsBlock, Testimonial, TestimonialBlock, TextBlock, Trend,
};

// Inline markup
pub use crate::inline::{Emphasis, FormattedText, InlineFormatter, Run};

// Output
pub use crate::document::{
    DisplayDocument, Document, DocumentHeader, Figure, HtmlFormatter, ItemDetail, MetricCard, Quote,
    RenderedItem, RenderedList, Section, SectionBody,
};

// Catalog and view state
pub use crate::catalog::{
    BakedDocument, BlockDefinition, CaseStudyDefinition, Catalog, CatalogDefinition, CatalogLoader,
    DocumentArtifact, IntoCatalog, Project, ProjectDefinition, ViewState,
};

// Error types
pub use crate::error::{ArtifactError, CatalogError, ConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
