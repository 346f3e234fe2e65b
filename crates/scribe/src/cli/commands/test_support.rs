//! Git repository fixtures for command tests

use std::path::Path;

use git2::{Repository, Signature};
use scribe_changelog::curation::Screen;
use scribe_core::CurationError;
use tempfile::TempDir;

pub struct Fixture {
    temp: TempDir,
    pub repo: Repository,
}

impl Fixture {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();

        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        Self { temp, repo }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn commit(&self, file: &str, message: &str) {
        std::fs::write(self.path().join(file), message).unwrap();

        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(file)).unwrap();
        index.write().unwrap();

        let tree = self.repo.find_tree(index.write_tree().unwrap()).unwrap();
        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
    }

    pub fn tag(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .unwrap();
    }

    pub fn head_id(&self) -> git2::Oid {
        self.repo.head().unwrap().peel_to_commit().unwrap().id()
    }

    pub fn head_message(&self) -> String {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        head.message().unwrap_or_default().to_string()
    }
}

/// Screen that draws nothing
pub struct BlankScreen;

impl Screen for BlankScreen {
    fn draw(&mut self, _lines: &[String]) -> Result<(), CurationError> {
        Ok(())
    }

    fn finish(&mut self) -> Result<(), CurationError> {
        Ok(())
    }
}
