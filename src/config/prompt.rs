use crate::domain::ports::PromptSource;
use crate::utils::error::{RefereeError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROMPT_PATH: &str = "prompts/referee_prompt.txt";

/// Reads the preamble file. Strict: a missing file and any other read
/// failure are reported as separate errors, never replaced by a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptLoader {
    path: PathBuf,
}

impl PromptLoader {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Relative paths are searched next to the executable first, then in
    /// the working directory.
    pub fn locate<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.is_absolute() {
            return Self::new(path);
        }

        let mut search_dirs = Vec::with_capacity(2);
        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            search_dirs.push(dir);
        }
        match std::env::current_dir() {
            Ok(dir) => search_dirs.push(dir),
            Err(e) => tracing::warn!("Could not read working directory: {}", e),
        }

        Self::resolve_in(path, &search_dirs)
    }

    /// Picks the first directory in `search_dirs` holding `path`. When none
    /// does, the first candidate is kept so the error names a concrete path.
    pub fn resolve_in<P: AsRef<Path>>(path: P, search_dirs: &[PathBuf]) -> Self {
        let path = path.as_ref();
        let candidates: Vec<PathBuf> = search_dirs.iter().map(|dir| dir.join(path)).collect();

        match candidates.iter().find(|candidate| candidate.is_file()) {
            Some(found) => Self::new(found.clone()),
            None => {
                tracing::debug!("{} not found in any search directory", path.display());
                Self::new(candidates.into_iter().next().unwrap_or_else(|| path.to_path_buf()))
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PromptSource for PromptLoader {
    fn load(&self) -> Result<String> {
        tracing::debug!("Loading prompt from {}", self.path.display());
        std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RefereeError::PromptNotFound {
                path: self.path.clone(),
            },
            _ => RefereeError::PromptIo {
                path: self.path.clone(),
                source: e,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_returns_content_verbatim() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Compare fairly.\n\nNo single answer.\n").unwrap();

        let content = PromptLoader::new(file.path()).load().unwrap();
        assert_eq!(content, "Compare fairly.\n\nNo single answer.\n");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let loader = PromptLoader::new(dir.path().join("absent.txt"));
        match loader.load() {
            Err(RefereeError::PromptNotFound { path }) => {
                assert!(path.ends_with("absent.txt"));
            }
            other => panic!("expected PromptNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = PromptLoader::new(dir.path()).load();
        assert!(matches!(result, Err(RefereeError::PromptIo { .. })));
    }

    #[test]
    fn test_locate_keeps_absolute_paths() {
        let dir = TempDir::new().unwrap();
        let loader = PromptLoader::locate(dir.path());
        assert_eq!(loader.path(), dir.path());
    }

    #[test]
    fn test_relative_path_found_in_later_search_dir() {
        let exe_dir = TempDir::new().unwrap();
        let work_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(work_dir.path().join("prompts")).unwrap();
        std::fs::write(work_dir.path().join(DEFAULT_PROMPT_PATH), "Stay neutral.\n").unwrap();

        let loader = PromptLoader::resolve_in(
            DEFAULT_PROMPT_PATH,
            &[exe_dir.path().to_path_buf(), work_dir.path().to_path_buf()],
        );
        assert_eq!(loader.path(), work_dir.path().join(DEFAULT_PROMPT_PATH));
        assert_eq!(loader.load().unwrap(), "Stay neutral.\n");
    }

    #[test]
    fn test_unresolved_path_reports_first_candidate() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let loader = PromptLoader::resolve_in(
            "missing.txt",
            &[first.path().to_path_buf(), second.path().to_path_buf()],
        );
        assert_eq!(loader.path(), first.path().join("missing.txt"));
        assert!(matches!(loader.load(), Err(RefereeError::PromptNotFound { .. })));
    }
}
