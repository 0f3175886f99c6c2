//! Session slot persisted as a YAML file

use std::path::{Path, PathBuf};

use super::{SessionStore, StoredSession};
use crate::config::write_private;
use crate::error::{Result, SessionError};

/// Session store backed by a user-private YAML file
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| SessionError::Read(format!("{}: {}", self.path.display(), e)))?;
        let session = serde_yaml::from_str(&contents)
            .map_err(|e| SessionError::Read(format!("{}: {}", self.path.display(), e)))?;

        Ok(Some(session))
    }

    fn save(&self, session: &StoredSession) -> Result<()> {
        let contents =
            serde_yaml::to_string(session).map_err(|e| SessionError::Write(e.to_string()))?;
        log::debug!("Writing session to {}", self.path.display());
        write_private(&self.path, &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionArtifact;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty_session() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.yaml"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("sub").join("session.yaml"));
        let session = StoredSession::new(
            "alice",
            SessionArtifact::Cookie {
                session_cookie: Some("JSESSIONID=1".to_string()),
                csrf_token: "abc".to_string(),
            },
        );

        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.yaml");
        std::fs::write(&path, "username: [").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(store.load().is_err());
    }
}
