use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

const DEFAULT_BRANCH: &str = "main";

impl Repository {
    /// Create the `.git/objects` and `.git/refs` scaffold and point HEAD at
    /// the default branch. Existing repositories are left intact.
    pub async fn init(&self) -> anyhow::Result<()> {
        let reinitialized = self.database().objects_path().exists();

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .git/objects directory")?;

        fs::create_dir_all(self.refs_path()).context("Failed to create .git/refs directory")?;

        if !self.head_path().exists() {
            fs::write(
                self.head_path(),
                format!("ref: refs/heads/{DEFAULT_BRANCH}\n"),
            )
            .context("Failed to create initial HEAD reference")?;
        }

        log::debug!("initialized repository at {}", self.path().display());

        let prefix = if reinitialized { "Reinitialized existing" } else { "Initialized" };
        writeln!(
            self.writer(),
            "{prefix} git directory at {}",
            self.path().display()
        )?;

        Ok(())
    }
}
