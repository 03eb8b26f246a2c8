//! Path resolution for fragment targets
//!
//! Maps a target to the pair of locations it is synchronized between: the
//! path in the home environment and the path inside the repository.
//!
//! Repository layout: `<root>/fragments/<fragment>/[<dir>/]<basename>`

use crate::system::{EntryKind, System};
use nastrajacz_config::Target;
use nastrajacz_core::TransferDirection;
use nastrajacz_core::path::{basename, expand_home_with, home_dir};
use std::path::{Path, PathBuf};

/// Name of the directory holding all fragments
pub const FRAGMENTS_DIR: &str = "fragments";

/// Repository layout rooted at a working directory
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
    home: Option<PathBuf>,
}

impl Layout {
    /// Create a layout rooted at `root`, using the current user's home directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            home: home_dir(),
        }
    }

    /// Use an explicit home directory for `~` expansion
    #[must_use]
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Repository root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/fragments`
    pub fn fragments_dir(&self) -> PathBuf {
        self.root.join(FRAGMENTS_DIR)
    }

    /// `<root>/fragments/<name>`
    pub fn fragment_dir(&self, name: &str) -> PathBuf {
        self.fragments_dir().join(name)
    }

    /// Expand `~` in a configured path
    pub fn expand(&self, path: &str) -> PathBuf {
        expand_home_with(path, self.home.as_deref())
    }

    /// Resolve the home and repository paths of a target
    ///
    /// For fetch the repository path of a file target is the directory the
    /// file is copied into; directories get their own basename appended. For
    /// apply the repository path always names the stored entry. The kind of
    /// the home entry is looked up through `system`.
    pub fn resolve<S: System + ?Sized>(
        &self,
        system: &S,
        fragment: &str,
        target: &Target,
        direction: TransferDirection,
    ) -> TransferPaths {
        let home = self.expand(&target.src);
        let name = basename(&home);

        let mut repo = self.fragment_dir(fragment);
        if let Some(dir) = &target.dir {
            repo.push(self.expand(dir));
        }

        match direction {
            TransferDirection::Fetch => {
                if system.entry_kind(&home) == EntryKind::Directory {
                    repo.push(&name);
                }
            }
            TransferDirection::Apply => repo.push(&name),
        }

        tracing::debug!(
            fragment,
            home = %home.display(),
            repo = %repo.display(),
            %direction,
            "Resolved target paths"
        );

        TransferPaths { home, repo, name }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Resolved locations of one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPaths {
    /// Path in the home environment
    pub home: PathBuf,
    /// Path inside the repository
    pub repo: PathBuf,
    /// Basename of the home path, used for display and hook labels
    pub name: String,
}

impl TransferPaths {
    /// Copy source for the given direction
    pub fn source(&self, direction: TransferDirection) -> &Path {
        match direction {
            TransferDirection::Fetch => &self.home,
            TransferDirection::Apply => &self.repo,
        }
    }

    /// Copy destination for the given direction
    pub fn destination(&self, direction: TransferDirection) -> &Path {
        match direction {
            TransferDirection::Fetch => &self.repo,
            TransferDirection::Apply => &self.home,
        }
    }
}
