use crate::block::{CaseStudyRecord, ContentBlock, DefaultRecord};
use crate::catalog::Project;
use crate::document::{Document, DocumentHeader, Section};
use tracing::{debug, trace};

#[cfg(feature = "debug-tools")]
use {crate::document::DisplayDocument, std::fs};

mod blocks;

use blocks::BlockContext;

/// Alt text used for image blocks that do not provide one.
pub const DEFAULT_ALT: &str = "Case study detail";

/// Turns case-study records into rendered documents.
///
/// A `Renderer` holds only configuration, so rendering is a pure function of its
/// input. The same renderer can be shared across threads and reused indefinitely.
#[derive(Debug, Clone)]
pub struct Renderer {
    default_record: DefaultRecord,
    fallback_image: Option<String>,
    default_alt: String,
}

pub struct RendererBuilder {
    default_record: DefaultRecord,
    fallback_image: Option<String>,
    default_alt: String,
}

impl Default for RendererBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererBuilder {
    pub fn new() -> Self {
        Self {
            default_record: DefaultRecord::default(),
            fallback_image: None,
            default_alt: DEFAULT_ALT.to_string(),
        }
    }

    /// Overrides the role and team shown for subjects without a case study.
    pub fn with_default_record(mut self, role: &str, team: &str) -> Self {
        self.default_record = DefaultRecord {
            role: role.to_string(),
            team: team.to_string(),
        };
        self
    }

    /// URL handed to the host's image loader as a substitute for images that fail to load.
    pub fn with_fallback_image(mut self, url: &str) -> Self {
        self.fallback_image = Some(url.to_string());
        self
    }

    pub fn with_default_alt(mut self, alt: &str) -> Self {
        self.default_alt = alt.to_string();
        self
    }

    pub fn build(self) -> Renderer {
        Renderer {
            default_record: self.default_record,
            fallback_image: self.fallback_image,
            default_alt: self.default_alt,
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        RendererBuilder::new().build()
    }
}

impl Renderer {
    pub fn builder() -> RendererBuilder {
        RendererBuilder::new()
    }

    pub fn default_record(&self) -> &DefaultRecord {
        &self.default_record
    }

    /// Renders a record's metadata and content blocks.
    #[tracing::instrument(skip_all, fields(blocks = record.content.len()))]
    pub fn render(&self, record: &CaseStudyRecord) -> Document {
        Document {
            header: DocumentHeader {
                role: record.role.clone(),
                product: record.product.clone(),
                team: record.team.clone(),
                ..DocumentHeader::default()
            },
            sections: self.render_blocks(&record.content),
        }
    }

    /// Renders `record`, or the default record for `product` when there is none.
    pub fn render_or_default(&self, record: Option<&CaseStudyRecord>, product: &str) -> Document {
        match record {
            Some(record) => self.render(record),
            None => {
                debug!(product, "No case study authored, using default record");
                self.render(&self.default_record.for_product(product))
            }
        }
    }

    /// Renders a catalog project: its case study (or the default) plus its display fields.
    pub fn render_project(&self, project: &Project) -> Document {
        let mut document = self.render_or_default(project.case_study.as_ref(), &project.category);
        document.header.title = Some(project.title.clone());
        document.header.year = Some(project.year.clone());
        document.header.description = Some(project.description.clone());
        document.header.hero_image = Some(project.image.clone());

        #[cfg(feature = "debug-tools")]
        self.write_debug_file(&project.id, &document);

        document
    }

    /// Renders blocks in order, one section per recognized block.
    pub fn render_blocks(&self, blocks: &[ContentBlock]) -> Vec<Section> {
        blocks
            .iter()
            .filter_map(|block| self.render_block(block))
            .collect()
    }

    /// Renders a single block. Unsupported kinds produce no section.
    pub fn render_block(&self, block: &ContentBlock) -> Option<Section> {
        let ctx = BlockContext {
            fallback_image: self.fallback_image.as_deref(),
            default_alt: &self.default_alt,
        };

        let (title, body) = match block {
            ContentBlock::Text(b) => (b.title.clone(), blocks::render_text(b)),
            ContentBlock::Image(b) => (None, blocks::render_image(b, &ctx)),
            ContentBlock::List(b) => (b.title.clone(), blocks::render_list(b)),
            ContentBlock::Testimonial(b) => (b.title.clone(), blocks::render_testimonials(b)),
            ContentBlock::Stats(b) => (b.title.clone(), blocks::render_stats(b)),
            ContentBlock::Unsupported { id, kind } => {
                debug!(block_id = %id, kind = %kind, "Skipping block of unsupported kind");
                return None;
            }
        };

        trace!(
            block_id = block.id(),
            kind = block.kind(),
            "Rendered section"
        );
        Some(Section {
            key: block.id().to_string(),
            title,
            body,
        })
    }

    #[cfg(feature = "debug-tools")]
    fn write_debug_file(&self, project_id: &str, document: &Document) {
        let sanitized: String = project_id
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        let path = format!("tmp/document_{}_tree.txt", sanitized);
        let result = fs::create_dir_all("tmp")
            .and_then(|_| fs::write(&path, DisplayDocument::new(document).to_string()));
        if let Err(e) = result {
            tracing::warn!(path = %path, error = %e, "Could not write debug file");
        }
    }
}
