use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::SlicerConfig;

/// A loaded configuration file with its associated directory.
///
/// When no project root is given on the command line, paths in the config
/// are resolved relative to the config file location.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: SlicerConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Load and validate a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: SlicerConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        config
            .layout
            .validate()
            .with_context(|| format!("invalid layout in config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }
}

/// Root that configured paths are relative to.
///
/// An explicit root wins, then the config file's directory, then `.`.
pub fn project_root(cli_root: Option<&Path>, loaded: Option<&LoadedConfig>) -> PathBuf {
    match (cli_root, loaded) {
        (Some(root), _) => root.to_path_buf(),
        (None, Some(lc)) => lc.config_dir.clone(),
        (None, None) => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STANDARD_RANKS;
    use crate::error::SlicerError;

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slicer.json");
        std::fs::write(
            &path,
            r#"{ "paths": { "sheet": "art/deck.png" }, "layout": { "back_count": 4 } }"#,
        )
        .unwrap();

        let loaded = LoadedConfig::load(&path).unwrap();

        assert_eq!(loaded.config_dir, dir.path());
        assert_eq!(loaded.config.version, 1);
        assert_eq!(loaded.config.paths.sheet, "art/deck.png");
        assert_eq!(loaded.config.paths.faces_dir, "public/images/cards");
        assert_eq!(loaded.config.layout.back_count, 4);
        assert_eq!(loaded.config.layout.grid.columns, 13);
        assert_eq!(loaded.config.layout.ranks, STANDARD_RANKS.to_vec());
    }

    #[test]
    fn test_partial_grid_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slicer.json");
        std::fs::write(&path, r#"{ "layout": { "grid": { "x_spacing": 0 } } }"#).unwrap();

        let loaded = LoadedConfig::load(&path).unwrap();
        let grid = loaded.config.layout.grid;

        assert_eq!(grid.x_spacing, 0);
        assert_eq!(grid.y_spacing, 2);
        assert_eq!(grid.cell_width, 158);
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slicer.json");
        std::fs::write(&path, r#"{ "layout": { "suits": ["hearts"] } }"#).unwrap();

        let err = LoadedConfig::load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SlicerError>(),
            Some(SlicerError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slicer.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = LoadedConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config file"));
    }

    #[test]
    fn test_project_root_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slicer.json");
        std::fs::write(&path, "{}").unwrap();
        let loaded = LoadedConfig::load(&path).unwrap();

        assert_eq!(
            project_root(Some(Path::new("/elsewhere")), Some(&loaded)),
            PathBuf::from("/elsewhere")
        );
        assert_eq!(project_root(None, Some(&loaded)), dir.path());
        assert_eq!(project_root(None, None), PathBuf::from("."));
    }
}
