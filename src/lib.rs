//! # Casebook - Case-Study Content Renderer
//!
//! **Casebook** turns authored case studies into structured documents. A case study is
//! an ordered list of heterogeneous content blocks (text, images, lists, testimonials,
//! stats); the renderer walks them in order and produces one section per block, with
//! free text split into bold/italic/plain runs by a small inline markup formatter.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Parse the authored catalog JSON with a `CatalogLoader`, or
//!     implement `IntoCatalog` to convert your own format.
//! 2.  **Configure**: Build a `Renderer` with `Renderer::builder()`, choosing the default
//!     record for subjects without a case study and the fallback image URL.
//! 3.  **Render**: Render a project, a bare `CaseStudyRecord`, or whatever a `ViewState`
//!     selects. Rendering is pure and never fails.
//! 4.  **Output**: Hand the `Document` to your display, or serialize it with
//!     `HtmlFormatter`, `DisplayDocument`, or a baked `DocumentArtifact`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use casebook::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = std::fs::read_to_string("data/catalog.json")?;
//!     let catalog = CatalogLoader::default().load_str(&json)?;
//!
//!     let renderer = Renderer::builder()
//!         .with_fallback_image("https://example.com/fallback.jpg")
//!         .build();
//!
//!     let view = ViewState::default().open_case_study("2");
//!     if let Some(document) = catalog.render_view(&view, &renderer) {
//!         println!("{}", HtmlFormatter::format_document(&document));
//!     }
//!
//!     let runs = InlineFormatter::format("**bold** and *italic*");
//!     assert_eq!(runs.runs.len(), 3);
//!     Ok(())
//! }
//! ```

pub mod block;
pub mod catalog;
pub mod document;
pub mod error;
pub mod inline;
pub mod prelude;
pub mod render;
