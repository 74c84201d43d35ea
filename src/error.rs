use thiserror::Error;

/// Errors that can occur while loading authored catalog data.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read catalog file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Block '{block_id}' of kind '{kind}' has an invalid payload: {message}")]
    InvalidBlock {
        block_id: String,
        kind: String,
        message: String,
    },

    #[error("Project id '{0}' appears more than once in the catalog")]
    DuplicateProject(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Errors that can occur when persisting or restoring pre-rendered documents.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Artifact serialization failed: {0}")]
    Encode(String),

    #[error("Artifact deserialization failed: {0}")]
    Decode(String),

    #[error("Artifact I/O failed for '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors that can occur when converting a custom authored format into a casebook `Catalog`.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
