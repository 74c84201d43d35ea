/// Which page the host display is showing.
///
/// The state is a plain value owned by the caller and passed into rendering, never
/// held globally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Home,
    CaseStudy {
        project_id: String,
    },
}

impl ViewState {
    /// Switches to the case study of `project_id`.
    pub fn open_case_study(&self, project_id: &str) -> ViewState {
        ViewState::CaseStudy {
            project_id: project_id.to_string(),
        }
    }

    /// Leaves any case study and clears the selection.
    pub fn back_to_home(&self) -> ViewState {
        ViewState::Home
    }

    pub fn is_home(&self) -> bool {
        matches!(self, ViewState::Home)
    }

    pub fn selected_project(&self) -> Option<&str> {
        match self {
            ViewState::Home => None,
            ViewState::CaseStudy { project_id } => Some(project_id),
        }
    }
}
