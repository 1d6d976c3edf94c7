use std::path::{Path, PathBuf};

use git2::Repository as Git2Repo;

use crate::error::{Result, TagReleaseError};

/// The working tree release commands run in
pub struct WorkTree {
    repo: Git2Repo,
    root: PathBuf,
}

impl WorkTree {
    /// Discover the repository containing `start`
    pub fn discover<P: AsRef<Path>>(start: P) -> Result<Self> {
        let repo = Git2Repo::discover(start)?;
        let root = repo
            .workdir()
            .ok_or_else(|| {
                TagReleaseError::Git(git2::Error::from_str(
                    "bare repositories have no working tree",
                ))
            })?
            .to_path_buf();

        Ok(WorkTree { repo, root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Short name of the checked-out branch, `None` when detached or unborn
    pub fn head_branch(&self) -> Option<String> {
        let head = self.repo.head().ok()?;
        if !head.is_branch() {
            return None;
        }
        head.shorthand().map(str::to_string)
    }
}

/// Directory release commands run in and relative manifest paths resolve
/// against: the enclosing work tree when there is one, otherwise `start`.
pub fn resolve_work_tree(start: &Path) -> PathBuf {
    match WorkTree::discover(start) {
        Ok(tree) => {
            tracing::info!(
                root = %tree.root().display(),
                branch = tree.head_branch().as_deref().unwrap_or("<detached>"),
                "using git work tree"
            );
            tree.root().to_path_buf()
        }
        Err(e) => {
            tracing::debug!(error = %e, start = %start.display(), "no git work tree found");
            start.to_path_buf()
        }
    }
}
