use crate::block::CaseStudyRecord;
use crate::document::Document;
use crate::error::CatalogError;
use crate::render::Renderer;
use ahash::AHashMap;

use super::ViewState;

/// A showcased subject. The case study is optional; subjects without one render
/// with the renderer's default record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image: String,
    pub year: String,
    pub watch_year: Option<String>,
    pub description: String,
    pub case_study: Option<CaseStudyRecord>,
}

/// The ordered set of showcased subjects, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    index: AHashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate project ids.
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut index = AHashMap::with_capacity(projects.len());
        for (position, project) in projects.iter().enumerate() {
            if index.insert(project.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProject(project.id.clone()));
            }
        }
        Ok(Self { projects, index })
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.index.get(id).map(|&i| &self.projects[i])
    }

    /// Projects in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Renders whatever the view state selects. `Home` and unknown ids render nothing.
    pub fn render_view(&self, view: &ViewState, renderer: &Renderer) -> Option<Document> {
        match view {
            ViewState::Home => None,
            ViewState::CaseStudy { project_id } => {
                self.get(project_id).map(|p| renderer.render_project(p))
            }
        }
    }
}
