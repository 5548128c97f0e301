use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Source file not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    #[error("Source file {} is not a valid locale map: {source}", path.display())]
    SourceMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Translation file {} is not a valid locale map: {source}", path.display())]
    TargetMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
