//! Files a run leaves behind.
//!
//! Names are fixed so repeated runs into the same directory overwrite rather than pile up,
//! and every refinement iteration gets its own file.

use crate::error::{PilotError, Result};
use crate::instruction::Step;
use std::path::{Path, PathBuf};

pub const EXTRACTED_CODE_FILE: &str = "extracted_code.html";
pub const SCREENSHOT_FILE: &str = "final_state.png";
pub const INSTRUCTIONS_FILE: &str = "instructions.json";

/// Writes code artifacts into one output directory
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn extracted_path(&self) -> PathBuf {
        self.dir.join(EXTRACTED_CODE_FILE)
    }

    pub fn iteration_path(&self, iteration: u32) -> PathBuf {
        self.dir.join(format!("refined_code_iteration_{}.html", iteration))
    }

    pub fn screenshot_path(&self) -> PathBuf {
        self.dir.join(SCREENSHOT_FILE)
    }

    pub fn instructions_path(&self) -> PathBuf {
        self.dir.join(INSTRUCTIONS_FILE)
    }

    /// Persist freshly extracted code
    pub fn write_extracted(&self, code: &str) -> Result<PathBuf> {
        self.write(self.extracted_path(), code.as_bytes())
    }

    /// Persist the code produced by refinement `iteration`
    pub fn write_iteration(&self, iteration: u32, code: &str) -> Result<PathBuf> {
        self.write(self.iteration_path(iteration), code.as_bytes())
    }

    /// Persist the decoded plan
    pub fn write_instructions(&self, steps: &[Step]) -> Result<PathBuf> {
        let json = serde_json::to_vec_pretty(steps)
            .map_err(|e| PilotError::InstructionFormat(format!("failed to serialize steps: {}", e)))?;
        self.write(self.instructions_path(), &json)
    }

    fn write(&self, path: PathBuf, contents: &[u8]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir).map_err(|source| PilotError::Artifact { path: self.dir.clone(), source })?;
        std::fs::write(&path, contents).map_err(|source| PilotError::Artifact { path: path.clone(), source })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::parse_steps;

    #[test]
    fn test_iteration_names_are_distinct() {
        let store = ArtifactStore::new("out");

        assert_eq!(store.iteration_path(1), PathBuf::from("out/refined_code_iteration_1.html"));
        assert_ne!(store.iteration_path(1), store.iteration_path(2));
        assert_ne!(store.iteration_path(1), store.extracted_path());
    }

    #[test]
    fn test_writes_create_the_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path().join("nested/run"));

        let path = store.write_extracted("<div>UI</div>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<div>UI</div>");

        let path = store.write_iteration(3, "<div>v3</div>").unwrap();
        assert!(path.ends_with("refined_code_iteration_3.html"));
    }

    #[test]
    fn test_instructions_are_written_in_wire_shape() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path());
        let steps = parse_steps(serde_json::json!([
            {"action": "click", "details": "text=Generate"},
            {"action": "teleport", "details": {"to": "mars"}}
        ]))
        .unwrap();

        let path = store.write_instructions(&steps).unwrap();
        let written: serde_json::Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();

        assert_eq!(written[0]["action"], "click");
        assert_eq!(written[0]["details"], "text=Generate");
        assert_eq!(written[1]["details"]["to"], "mars");
    }

    #[test]
    fn test_write_failure_names_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let err = ArtifactStore::new(blocker.join("sub")).write_extracted("x").unwrap_err();
        assert!(matches!(err, PilotError::Artifact { .. }));
    }
}
