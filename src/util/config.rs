use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{info, warn};

use crate::domain::Catalog;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "EstancoValora";
const APP_NAME: &str = "EstancoValora";

/// Overrides the catalog location when set.
pub const CATALOG_ENV_VAR: &str = "ESTANCO_VALORA_CATALOG";

/// Where the optional catalog override is looked up.
pub fn catalog_file() -> Option<PathBuf> {
    if let Ok(path) = env::var(CATALOG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("catalog.json"))
}

#[derive(Clone, Debug, PartialEq)]
pub enum CatalogSource {
    BuiltIn,
    File(PathBuf),
}

#[derive(Clone, Debug)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub source: CatalogSource,
    /// Set when an override file existed but could not be used.
    pub warning: Option<String>,
}

/// Loads the catalog override if one exists, otherwise the built-in catalog.
/// A broken override file never prevents startup.
pub fn load_catalog() -> LoadedCatalog {
    let Some(path) = catalog_file() else {
        info!("no config directory available; using built-in catalog");
        return built_in(None);
    };

    if !path.exists() {
        info!(path = %path.display(), "no catalog override found; using built-in catalog");
        return built_in(None);
    }

    match read_catalog(&path) {
        Ok(catalog) => {
            info!(path = %path.display(), "loaded catalog override");
            LoadedCatalog {
                catalog,
                source: CatalogSource::File(path),
                warning: None,
            }
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring catalog override");
            built_in(Some(format!(
                "No se pudo leer {}: {err}. Se usan los márgenes por defecto.",
                path.display()
            )))
        }
    }
}

fn built_in(warning: Option<String>) -> LoadedCatalog {
    LoadedCatalog {
        catalog: Catalog::default(),
        source: CatalogSource::BuiltIn,
        warning,
    }
}

pub fn read_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let data = fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&data)?;
    if let Some((kind, margin)) = catalog.invalid_margin() {
        return Err(ConfigError::Invalid(format!(
            "margin {margin} for {kind:?} is outside 0..=100"
        )));
    }
    Ok(catalog)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[error("invalid catalog: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::CategoryKind;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_partial_override() {
        let file = write_temp(r#"{ "tobacco": { "label": "Tabaco", "marginPercent": 9.0, "suppliers": ["Logista"] } }"#);
        let catalog = read_catalog(file.path()).unwrap();
        assert_eq!(catalog.margin(CategoryKind::Tobacco), 9.0);
        assert_eq!(catalog.get(CategoryKind::Tobacco).suppliers, vec!["Logista"]);
        assert_eq!(catalog.margin(CategoryKind::Cigars), 9.5);
    }

    #[test]
    fn rejects_out_of_range_margin() {
        let file = write_temp(r#"{ "food": { "label": "Alimentación", "marginPercent": -5, "suppliers": [] } }"#);
        let err = read_catalog(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let file = write_temp("{ not json");
        let err = read_catalog(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_catalog(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
