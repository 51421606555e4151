//! JSON persistence for [`Roster`].
//!
//! File shape — a 2-space indented array, one object per student, in chain
//! order:
//!
//! ```text
//! [
//!   {
//!     "name": "Jane Doe",
//!     "year": 20,
//!     "email": "jane@example.edu",
//!     "specialization": "CS"
//!   }
//! ]
//! ```
//!
//! Loading is all-or-nothing: the document is fully parsed before the
//! roster is touched, so a failed load leaves the previous contents intact.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::AppError;

use super::storage::{FsStorage, Storage};
use super::{Roster, Student};

impl Roster {
    /// Render the roster in the on-disk format.
    pub fn to_json(&self) -> Result<String, AppError> {
        let students: Vec<&Student> = self.iter().collect();
        serde_json::to_string_pretty(&students)
            .map_err(|e| AppError::Malformed(format!("serialise roster: {e}")))
    }

    /// Build a roster from a document in the on-disk format.
    pub fn from_json(data: &str) -> Result<Self, AppError> {
        Ok(parse_students(data.as_bytes())?.into_iter().collect())
    }

    /// Write the whole roster to `path` on the local filesystem, replacing
    /// any existing content.
    pub async fn save_to_json(&self, path: impl AsRef<Path>) -> Result<(), AppError> {
        self.save_with(Arc::new(FsStorage), path).await
    }

    /// Replace the roster with the students stored at `path` on the local
    /// filesystem.
    pub async fn load_from_json(&mut self, path: impl AsRef<Path>) -> Result<(), AppError> {
        self.load_with(Arc::new(FsStorage), path).await
    }

    pub async fn save_with(
        &self,
        storage: Arc<dyn Storage>,
        path: impl AsRef<Path>,
    ) -> Result<(), AppError> {
        let bytes = self.to_json()?.into_bytes();
        let path = path.as_ref().to_path_buf();
        let target = path.clone();
        tokio::task::spawn_blocking(move || storage.write_all(&target, &bytes))
            .await
            .map_err(|e| AppError::Storage(format!("save join: {e}")))??;

        debug!(path = %path.display(), count = self.len(), "roster saved");
        Ok(())
    }

    /// On any error (unreadable path, malformed document) the roster is left
    /// unchanged.
    pub async fn load_with(
        &mut self,
        storage: Arc<dyn Storage>,
        path: impl AsRef<Path>,
    ) -> Result<(), AppError> {
        let path = path.as_ref().to_path_buf();
        let source = path.clone();
        let bytes = tokio::task::spawn_blocking(move || storage.read_all(&source))
            .await
            .map_err(|e| AppError::Storage(format!("load join: {e}")))??;

        let students = parse_students(&bytes).map_err(|e| match e {
            AppError::Malformed(msg) => AppError::Malformed(format!("{}: {msg}", path.display())),
            other => other,
        })?;

        self.clear();
        self.extend(students);

        debug!(path = %path.display(), count = self.len(), "roster loaded");
        Ok(())
    }
}

fn parse_students(bytes: &[u8]) -> Result<Vec<Student>, AppError> {
    serde_json::from_slice(bytes).map_err(|e| AppError::Malformed(e.to_string()))
}
