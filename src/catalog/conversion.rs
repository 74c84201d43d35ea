use super::definition::CatalogDefinition;
use crate::error::ConversionError;

/// A trait for custom authored formats that can be converted into a casebook `CatalogDefinition`.
///
/// This is the extension point for content that does not live in the default JSON
/// layout. Implement it on your own structs and hand the result to a `CatalogLoader`.
///
/// # Example
///
/// ```rust,no_run
/// use casebook::prelude::*;
/// use casebook::error::ConversionError;
///
/// struct Post { slug: String, headline: String, body: Vec<String> }
/// struct Blog { posts: Vec<Post> }
///
/// impl IntoCatalog for Blog {
///     fn into_catalog(self) -> std::result::Result<CatalogDefinition, ConversionError> {
///         let projects = self
///             .posts
///             .into_iter()
///             .map(|post| ProjectDefinition {
///                 id: post.slug,
///                 title: post.headline,
///                 category: String::new(),
///                 image: String::new(),
///                 year: String::new(),
///                 watch_year: None,
///                 description: String::new(),
///                 case_study_data: None,
///             })
///             .collect();
///         Ok(CatalogDefinition { projects })
///     }
/// }
/// ```
pub trait IntoCatalog {
    /// Consumes the object and converts it into a casebook catalog definition.
    fn into_catalog(self) -> Result<CatalogDefinition, ConversionError>;
}

impl IntoCatalog for CatalogDefinition {
    fn into_catalog(self) -> Result<CatalogDefinition, ConversionError> {
        Ok(self)
    }
}
