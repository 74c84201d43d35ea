use super::ContentBlock;

/// The authored document for one subject: display metadata plus ordered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStudyRecord {
    pub role: String,
    pub product: String,
    pub team: String,
    pub content: Vec<ContentBlock>,
}

impl CaseStudyRecord {
    pub fn new(
        role: impl Into<String>,
        product: impl Into<String>,
        team: impl Into<String>,
        content: Vec<ContentBlock>,
    ) -> Self {
        Self {
            role: role.into(),
            product: product.into(),
            team: team.into(),
            content,
        }
    }

    /// Number of blocks the renderer will emit a section for.
    pub fn supported_block_count(&self) -> usize {
        self.content.iter().filter(|b| b.is_supported()).count()
    }
}

/// Metadata substituted when a subject has no authored case study.
///
/// The product line is taken from the subject itself, so only role and team are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultRecord {
    pub role: String,
    pub team: String,
}

impl Default for DefaultRecord {
    fn default() -> Self {
        Self {
            role: "Product Designer".to_string(),
            team: "Design & Engineering".to_string(),
        }
    }
}

impl DefaultRecord {
    /// Builds the fallback record for a subject; its content is always empty.
    pub fn for_product(&self, product: impl Into<String>) -> CaseStudyRecord {
        CaseStudyRecord::new(self.role.clone(), product, self.team.clone(), Vec::new())
    }
}
