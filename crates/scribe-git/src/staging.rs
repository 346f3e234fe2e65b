//! Recording release commits

use std::path::Path;

use tracing::{info, instrument};

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Stage `paths` (relative to the working directory) and commit them on HEAD.
    ///
    /// Works on an unborn branch, creating the root commit. Returns the new
    /// commit hash.
    #[instrument(skip(self, paths), fields(path_count = paths.len()))]
    pub fn commit_paths(&self, paths: &[&Path], message: &str) -> Result<String> {
        let workdir = self.workdir()?.to_path_buf();

        let mut index = self.repo.index()?;
        for path in paths {
            if workdir.join(path).exists() {
                index.add_path(path)?;
            } else {
                index.remove_path(path)?;
            }
        }
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let sig = self.repo.signature()?;

        let parent = self.head_commit()?;
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let oid = self
            .repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?;

        info!(commit = %oid, message, "created commit");
        Ok(oid.to_string())
    }
}
