use super::Catalog;
use crate::document::Document;
use crate::error::ArtifactError;
use crate::render::Renderer;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A pre-rendered document, keyed by the project it was rendered from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BakedDocument {
    pub project_id: String,
    pub document: Document,
}

/// A set of documents rendered ahead of time and shipped as a static asset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentArtifact {
    pub documents: Vec<BakedDocument>,
}

impl DocumentArtifact {
    /// Renders every project in the catalog, in catalog order.
    pub fn bake(catalog: &Catalog, renderer: &Renderer) -> Self {
        let documents = catalog
            .iter()
            .map(|project| BakedDocument {
                project_id: project.id.clone(),
                document: renderer.render_project(project),
            })
            .collect();
        Self { documents }
    }

    pub fn get(&self, project_id: &str) -> Option<&Document> {
        self.documents
            .iter()
            .find(|d| d.project_id == project_id)
            .map(|d| &d.document)
    }

    /// Saves the artifact to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: format!("could not create file: {}", e),
        })?;
        file.write_all(&bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: format!("could not write file: {}", e),
        })?;
        Ok(())
    }

    /// Loads an artifact from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: format!("could not open file: {}", e),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| ArtifactError::Io {
            path: path.to_string(),
            message: format!("could not read file: {}", e),
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Encode(e.to_string()))
    }

    /// Deserializes an artifact from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(artifact, _)| artifact)
            .map_err(|e| ArtifactError::Decode(e.to_string()))
    }
}
