use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::tree::Mapping;

/// `<output_dir>/<language>.json`
pub fn target_path(output_dir: &Path, language: &str) -> PathBuf {
    output_dir.join(format!("{language}.json"))
}

/// Load the reference dictionary every target is compared against
pub fn load_source(path: &Path) -> Result<Mapping, StoreError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StoreError::SourceMissing {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let source = serde_json::from_str(&data).map_err(|source| StoreError::SourceMalformed {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Loaded source dictionary from {}", path.display());
    Ok(source)
}

/// Load a language file, or an empty map when it does not exist yet
pub fn load_target(path: &Path) -> Result<Mapping, StoreError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No translation file at {}, starting empty", path.display());
            return Ok(Mapping::new());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&data).map_err(|source| StoreError::TargetMalformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `map` as 2-space indented JSON, replacing whatever is at `path`
pub fn persist(path: &Path, map: &Mapping) -> Result<(), StoreError> {
    let persistence = |source: std::io::Error| StoreError::Persistence {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(persistence)?;
    }

    let json = serde_json::to_string_pretty(map).map_err(|e| persistence(e.into()))?;
    fs::write(path, json).map_err(persistence)?;

    tracing::info!("Saved translation file {}", path.display());
    Ok(())
}
