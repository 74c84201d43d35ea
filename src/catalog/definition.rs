use crate::block::{ImageStyle, ListStyle, Testimonial, Trend};
use serde::Deserialize;
use tracing::debug;

/// The canonical authored form of a catalog, as read from JSON.
/// This is the target structure for any custom format conversion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CatalogDefinition {
    pub projects: Vec<ProjectDefinition>,
}

/// One subject in the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDefinition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub watch_year: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "caseStudy")]
    pub case_study_data: Option<CaseStudyDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseStudyDefinition {
    pub role: String,
    pub product: String,
    pub team: String,
    #[serde(default)]
    pub content: Vec<BlockDefinition>,
}

/// A content block before its kind has been resolved.
///
/// Everything besides `id` and `kind` is kept as raw JSON and only decoded once the
/// kind is known, so unknown kinds can carry arbitrary fields.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockDefinition {
    pub id: String,
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

// --- Per-kind payloads, decoded from `BlockDefinition::fields` ---

#[derive(Debug, Deserialize)]
pub(super) struct TextFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "paragraph")]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ImageFields {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub image_style: ImageStyle,
}

#[derive(Debug, Deserialize)]
pub(super) struct ListFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub style: ListStyle,
    #[serde(default)]
    pub items: Vec<ListItemDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum ListItemDefinition {
    Plain(String),
    Structured {
        label: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(
            default,
            rename = "subItems",
            alias = "sub_items",
            deserialize_with = "or_default"
        )]
        sub_items: Vec<String>,
    },
}

#[derive(Debug, Deserialize)]
pub(super) struct TestimonialFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Deserialize)]
pub(super) struct StatsFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default)]
    pub items: Vec<StatItemDefinition>,
}

#[derive(Debug, Deserialize)]
pub(super) struct StatItemDefinition {
    pub value: String,
    pub label: String,
    pub category: String,
    #[serde(default, deserialize_with = "or_default")]
    pub trend: Option<Trend>,
}

/// Reads an optional presentation field, falling back to its default when the value
/// is null or not one the renderer recognizes.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            debug!(%value, error = %e, "Ignoring unrecognized presentation value");
            T::default()
        }),
    })
}
