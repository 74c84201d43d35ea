use super::definition::*;
use super::{Catalog, IntoCatalog, Project};
use crate::block::{
    CaseStudyRecord, ContentBlock, ImageBlock, ListBlock, ListItem, StatItem, StatsBlock,
    TestimonialBlock, TextBlock,
};
use crate::error::CatalogError;
use ahash::AHashMap;
use serde::de::DeserializeOwned;
use std::fs;
use tracing::{debug, info};

/// Block kinds the renderer knows how to draw.
pub const BUILTIN_KINDS: [&str; 5] = ["text", "image", "list", "testimonial", "stats"];

/// Resolves authored definitions into a `Catalog` of typed content blocks.
pub struct CatalogLoader {
    aliases: AHashMap<String, String>,
}

pub struct CatalogLoaderBuilder {
    aliases: AHashMap<String, String>,
}

impl Default for CatalogLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogLoaderBuilder {
    pub fn new() -> Self {
        Self {
            aliases: AHashMap::new(),
        }
    }

    /// Treats blocks tagged `user_kind` as the built-in `builtin_kind`.
    /// Mappings onto kinds that are not built in are ignored.
    pub fn with_kind_alias(mut self, user_kind: &str, builtin_kind: &str) -> Self {
        if BUILTIN_KINDS.contains(&builtin_kind) {
            self.aliases
                .insert(user_kind.to_string(), builtin_kind.to_string());
        }
        self
    }

    pub fn build(self) -> CatalogLoader {
        CatalogLoader {
            aliases: self.aliases,
        }
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        CatalogLoaderBuilder::new().build()
    }
}

impl CatalogLoader {
    pub fn builder() -> CatalogLoaderBuilder {
        CatalogLoaderBuilder::new()
    }

    /// Parses a JSON array of projects.
    pub fn load_str(&self, json: &str) -> Result<Catalog, CatalogError> {
        let definition: CatalogDefinition = serde_json::from_str(json)
            .map_err(|e| CatalogError::JsonParseError(e.to_string()))?;
        self.load(definition)
    }

    pub fn load_file(&self, path: &str) -> Result<Catalog, CatalogError> {
        let json = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        self.load_str(&json)
    }

    /// Converts any authored format that implements `IntoCatalog`.
    pub fn load(&self, source: impl IntoCatalog) -> Result<Catalog, CatalogError> {
        let definition = source.into_catalog()?;
        let projects = definition
            .projects
            .into_iter()
            .map(|p| self.convert_project(p))
            .collect::<Result<Vec<_>, _>>()?;
        info!(projects = projects.len(), "Loaded catalog");
        Catalog::new(projects)
    }

    fn convert_project(&self, def: ProjectDefinition) -> Result<Project, CatalogError> {
        let case_study = def
            .case_study_data
            .map(|cs| self.convert_case_study(cs))
            .transpose()?;
        Ok(Project {
            id: def.id,
            title: def.title,
            category: def.category,
            image: def.image,
            year: def.year,
            watch_year: def.watch_year,
            description: def.description,
            case_study,
        })
    }

    pub fn convert_case_study(
        &self,
        def: CaseStudyDefinition,
    ) -> Result<CaseStudyRecord, CatalogError> {
        let content = def
            .content
            .into_iter()
            .map(|b| self.convert_block(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CaseStudyRecord::new(
            def.role, def.product, def.team, content,
        ))
    }

    /// Resolves a block's kind and decodes its payload.
    ///
    /// Unknown kinds become `ContentBlock::Unsupported`; a known kind whose fields do
    /// not decode is an error.
    pub fn convert_block(&self, def: BlockDefinition) -> Result<ContentBlock, CatalogError> {
        let kind = self
            .aliases
            .get(&def.kind)
            .map(String::as_str)
            .unwrap_or(def.kind.as_str());

        let id = def.id.clone();
        let block = match kind {
            "text" => {
                let f: TextFields = decode(&def, kind)?;
                ContentBlock::Text(TextBlock {
                    id,
                    title: f.title,
                    paragraphs: f.paragraphs,
                })
            }
            "image" => {
                let f: ImageFields = decode(&def, kind)?;
                ContentBlock::Image(ImageBlock {
                    id,
                    src: f.src,
                    alt: f.alt,
                    caption: f.caption,
                    style: f.image_style,
                })
            }
            "list" => {
                let f: ListFields = decode(&def, kind)?;
                ContentBlock::List(ListBlock {
                    id,
                    title: f.title,
                    intro: f.intro,
                    conclusion: f.conclusion,
                    style: f.style,
                    items: f.items.into_iter().map(convert_list_item).collect(),
                })
            }
            "testimonial" => {
                let f: TestimonialFields = decode(&def, kind)?;
                ContentBlock::Testimonial(TestimonialBlock {
                    id,
                    title: f.title,
                    intro: f.intro,
                    items: f.items,
                })
            }
            "stats" => {
                let f: StatsFields = decode(&def, kind)?;
                ContentBlock::Stats(StatsBlock {
                    id,
                    title: f.title,
                    intro: f.intro,
                    conclusion: f.conclusion,
                    items: f.items.into_iter().map(convert_stat_item).collect(),
                })
            }
            _ => {
                debug!(block_id = %id, kind = %def.kind, "Keeping block of unknown kind");
                ContentBlock::Unsupported {
                    id,
                    kind: def.kind.clone(),
                }
            }
        };
        Ok(block)
    }
}

fn decode<T: DeserializeOwned>(def: &BlockDefinition, kind: &str) -> Result<T, CatalogError> {
    let fields = serde_json::Value::Object(def.fields.clone());
    serde_json::from_value(fields).map_err(|e| CatalogError::InvalidBlock {
        block_id: def.id.clone(),
        kind: kind.to_string(),
        message: e.to_string(),
    })
}

fn convert_list_item(item: ListItemDefinition) -> ListItem {
    match item {
        ListItemDefinition::Plain(text) => ListItem::Plain(text),
        ListItemDefinition::Structured {
            label,
            description,
            sub_items,
        } => ListItem::Structured {
            label,
            description,
            sub_items,
        },
    }
}

fn convert_stat_item(item: StatItemDefinition) -> StatItem {
    StatItem {
        value: item.value,
        label: item.label,
        category: item.category,
        trend: item.trend,
    }
}
