use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Isolated resources tree plus a store path next to it.
///
/// Layout: `<tmp>/resources/<certification>/<category>.csv` and
/// `<tmp>/flashcards.db`.
pub struct ResourcesFixture {
    pub temp_dir: TempDir,
    resources: PathBuf,
}

impl ResourcesFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let resources = temp_dir.path().join("resources");
        std::fs::create_dir_all(&resources).expect("Failed to create resources dir");

        println!("[FIXTURE] Created resources root: {:?}", resources);

        Self {
            temp_dir,
            resources,
        }
    }

    pub fn resources_path(&self) -> &Path {
        &self.resources
    }

    pub fn db_path(&self) -> PathBuf {
        self.temp_dir.path().join("flashcards.db")
    }

    /// Create `<resources>/<certification>/<file_name>` with `content`.
    pub fn create_csv(&self, certification: &str, file_name: &str, content: &str) -> PathBuf {
        self.write(&self.resources.join(certification).join(file_name), content)
    }

    /// Create a file directly under the resources root.
    pub fn create_root_file(&self, file_name: &str, content: &str) -> PathBuf {
        self.write(&self.resources.join(file_name), content)
    }

    /// Create an empty certification directory.
    pub fn create_dir(&self, certification: &str) -> PathBuf {
        let path = self.resources.join(certification);
        std::fs::create_dir_all(&path).expect("Failed to create dir");
        path
    }

    fn write(&self, full_path: &Path, content: &str) -> PathBuf {
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path.to_path_buf()
    }
}

impl Default for ResourcesFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ResourcesFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.temp_dir.path());
    }
}
