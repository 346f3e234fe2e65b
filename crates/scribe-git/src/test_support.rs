//! Repository fixtures for tests

use std::path::Path;

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

/// A throwaway repository with a configured committer
pub struct TestRepo {
    temp: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }
        Self { temp, repo }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write a file and commit it on HEAD
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> Oid {
        self.commit_file_at(name, content, message, None)
    }

    /// Same as `commit_file`, with a fixed commit time in seconds
    pub fn commit_file_at(&self, name: &str, content: &str, message: &str, time: Option<i64>) -> Oid {
        std::fs::write(self.path().join(name), content).unwrap();
        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let sig = match time {
            Some(seconds) => {
                Signature::new("Test User", "test@example.com", &git2::Time::new(seconds, 0)).unwrap()
            }
            None => Signature::now("Test User", "test@example.com").unwrap(),
        };

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    /// Lightweight tag on HEAD
    pub fn tag(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.tag_lightweight(name, head.as_object(), false).unwrap();
    }

    /// Annotated tag on HEAD
    pub fn tag_annotated(&self, name: &str, message: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        let sig = Signature::now("Test User", "test@example.com").unwrap();
        self.repo
            .tag(name, head.as_object(), &sig, message, false)
            .unwrap();
    }
}
