use std::path::{Path, PathBuf};

use super::types::PathConfig;

/// Absolute (or root-relative) locations for one slicing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub sheet: PathBuf,
    pub faces_dir: PathBuf,
    pub specials_dir: PathBuf,
    pub backs_dir: PathBuf,
    pub final_back: PathBuf,
}

impl ProjectPaths {
    /// Resolve every configured path against the project root.
    ///
    /// Absolute entries in the config are kept as they are.
    pub fn resolve(root: &Path, paths: &PathConfig) -> Self {
        Self {
            sheet: root.join(&paths.sheet),
            faces_dir: root.join(&paths.faces_dir),
            specials_dir: root.join(&paths.specials_dir),
            backs_dir: root.join(&paths.backs_dir),
            final_back: root.join(&paths.final_back),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default_paths() {
        let paths = ProjectPaths::resolve(Path::new("/project"), &PathConfig::default());

        assert_eq!(
            paths.sheet,
            PathBuf::from("/project/public/images/cards_spritesheet.png")
        );
        assert_eq!(paths.faces_dir, PathBuf::from("/project/public/images/cards"));
        assert_eq!(paths.specials_dir, PathBuf::from("/project/public/images"));
        assert_eq!(
            paths.backs_dir,
            PathBuf::from("/project/public/images/card_backs_temp")
        );
        assert_eq!(
            paths.final_back,
            PathBuf::from("/project/public/images/card-back.png")
        );
    }

    #[test]
    fn test_absolute_entries_are_kept() {
        let config = PathConfig {
            sheet: "/art/sheet.png".to_string(),
            ..PathConfig::default()
        };
        let paths = ProjectPaths::resolve(Path::new("/project"), &config);
        assert_eq!(paths.sheet, PathBuf::from("/art/sheet.png"));
    }
}
