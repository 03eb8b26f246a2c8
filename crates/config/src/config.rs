//! Fragments configuration
//!
//! This module loads `fragments.toml` into a [`FragmentSet`].
//!
//! ```toml
//! [nvim]
//! targets = [
//!     { src = "~/.config/nvim", dir = "dotconfig" },
//!     { src = "~/.vimrc", actions = { after_apply = "echo applied" } },
//! ]
//!
//! [nvim.actions]
//! before_fetch = "git stash"
//! after_apply = "nvim --headless +Lazy! sync +qa"
//! ```
//!
//! Every top-level table is a fragment. `targets` is required; `dir`,
//! `actions` and the individual hook keys are optional. Hook commands that
//! are present but empty are treated as absent.

use crate::Result;
use nastrajacz_core::{Error, TransferDirection};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the fragments file at the repository root
pub const FRAGMENTS_FILE: &str = "fragments.toml";

/// Icon display mode for status markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Show icons when output is a terminal
    Auto,
    /// Always show icons
    #[default]
    Always,
    /// Never show icons
    Never,
}

impl IconMode {
    /// Determine if icons should be shown based on mode and terminal detection
    #[must_use]
    pub fn should_show_icons(&self, is_tty: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_tty,
        }
    }
}

impl FromStr for IconMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" | "automatic" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!(
                "invalid icon mode '{other}' (expected auto, always or never)"
            )),
        }
    }
}

/// Hook commands attached to a fragment or a target
///
/// ```toml
/// [shell.actions]
/// before_apply = "..."
/// after_apply = "..."
/// before_fetch = "..."
/// after_fetch = "..."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Actions {
    /// Runs before the repository copy is applied to the home directory
    #[serde(default)]
    pub before_apply: Option<String>,

    /// Runs after the repository copy is applied to the home directory
    #[serde(default)]
    pub after_apply: Option<String>,

    /// Runs before files are fetched into the repository
    #[serde(default)]
    pub before_fetch: Option<String>,

    /// Runs after files are fetched into the repository
    #[serde(default)]
    pub after_fetch: Option<String>,
}

impl Actions {
    /// Before/after hooks for a transfer in the given direction
    pub fn hooks(&self, direction: TransferDirection) -> HookPair<'_> {
        let (before, after) = match direction {
            TransferDirection::Apply => (&self.before_apply, &self.after_apply),
            TransferDirection::Fetch => (&self.before_fetch, &self.after_fetch),
        };

        HookPair {
            before: before.as_deref().filter(|cmd| !cmd.is_empty()),
            after: after.as_deref().filter(|cmd| !cmd.is_empty()),
        }
    }

    /// Check if no hook command is defined
    pub fn is_empty(&self) -> bool {
        [
            &self.before_apply,
            &self.after_apply,
            &self.before_fetch,
            &self.after_fetch,
        ]
        .iter()
        .all(|cmd| cmd.is_none())
    }

    /// Drop hook commands that are present but empty
    fn normalize(&mut self) {
        for cmd in [
            &mut self.before_apply,
            &mut self.after_apply,
            &mut self.before_fetch,
            &mut self.after_fetch,
        ] {
            if cmd.as_deref().is_some_and(str::is_empty) {
                *cmd = None;
            }
        }
    }
}

/// The before/after hook commands selected for one transfer direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookPair<'a> {
    /// Command run before the step
    pub before: Option<&'a str>,
    /// Command run after the step
    pub after: Option<&'a str>,
}

/// One path synchronized as part of a fragment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    /// Path in the home environment (may start with `~`)
    pub src: String,

    /// Subdirectory inside the fragment directory where the entry is stored
    #[serde(default)]
    pub dir: Option<String>,

    /// Target-level hooks
    #[serde(default)]
    pub actions: Option<Actions>,
}

impl Target {
    /// Target-level hooks for the given direction
    pub fn hooks(&self, direction: TransferDirection) -> HookPair<'_> {
        self.actions
            .as_ref()
            .map(|actions| actions.hooks(direction))
            .unwrap_or_default()
    }
}

/// A named group of targets synchronized together
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fragment {
    /// Fragment name (the table key in `fragments.toml`)
    #[serde(skip)]
    pub name: String,

    /// Targets in declaration order
    pub targets: Vec<Target>,

    /// Fragment-level hooks
    #[serde(default)]
    pub actions: Option<Actions>,
}

impl Fragment {
    /// Fragment-level hooks for the given direction
    pub fn hooks(&self, direction: TransferDirection) -> HookPair<'_> {
        self.actions
            .as_ref()
            .map(|actions| actions.hooks(direction))
            .unwrap_or_default()
    }

    /// Normalize hook definitions after deserialization
    fn normalize(&mut self) {
        if let Some(actions) = self.actions.as_mut() {
            actions.normalize();
        }
        for target in &mut self.targets {
            if let Some(actions) = target.actions.as_mut() {
                actions.normalize();
            }
        }
    }
}

/// All fragments defined in `fragments.toml`, keyed and ordered by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentSet {
    fragments: BTreeMap<String, Fragment>,
}

impl FragmentSet {
    /// Load `fragments.toml` from the given repository directory
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist, and
    /// [`Error::ConfigParse`] or [`Error::InvalidFragmentName`] if it cannot
    /// be read or does not match the expected schema.
    pub fn load(repo_dir: &Path) -> Result<Self> {
        Self::load_file(&repo_dir.join(FRAGMENTS_FILE))
    }

    /// Load a fragments file from an explicit path
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let set = Self::from_toml_str(&content, path)?;
        tracing::debug!(
            path = %path.display(),
            fragments = set.len(),
            "Loaded fragments file"
        );
        Ok(set)
    }

    /// Parse fragments from TOML content
    ///
    /// `path` is only used for error messages.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        let raw: BTreeMap<String, Fragment> =
            toml::from_str(content).map_err(|e| Error::ConfigParse {
                path: PathBuf::from(path),
                message: e.to_string(),
            })?;

        let mut fragments = BTreeMap::new();
        for (name, mut fragment) in raw {
            validate_fragment_name(&name)?;
            fragment.name.clone_from(&name);
            fragment.normalize();
            fragments.insert(name, fragment);
        }

        Ok(Self { fragments })
    }

    /// Build a set from already constructed fragments
    ///
    /// Later fragments replace earlier ones with the same name.
    pub fn from_fragments(fragments: impl IntoIterator<Item = Fragment>) -> Self {
        Self {
            fragments: fragments
                .into_iter()
                .map(|fragment| (fragment.name.clone(), fragment))
                .collect(),
        }
    }

    /// Fragment names in lexicographic order
    pub fn names(&self) -> Vec<&str> {
        self.fragments.keys().map(String::as_str).collect()
    }

    /// Look up a fragment by name
    pub fn get(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }

    /// Check if a fragment with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    /// Iterate fragments in lexicographic name order
    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.values()
    }

    /// Number of fragments
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Check if no fragments are defined
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Fragment names become directory names under `fragments/`
fn validate_fragment_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name cannot be empty")
    } else if name == "." || name == ".." {
        Some("name cannot be a relative directory reference")
    } else if name.contains(['/', '\\']) {
        Some("name cannot contain path separators")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidFragmentName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<FragmentSet> {
        FragmentSet::from_toml_str(content, Path::new(FRAGMENTS_FILE))
    }

    #[test]
    fn test_icon_mode_default() {
        assert_eq!(IconMode::default(), IconMode::Always);
    }

    #[test]
    fn test_icon_mode_auto() {
        let mode = IconMode::Auto;
        assert!(mode.should_show_icons(true));
        assert!(!mode.should_show_icons(false));
    }

    #[test]
    fn test_icon_mode_from_str() {
        assert_eq!("never".parse::<IconMode>().unwrap(), IconMode::Never);
        assert_eq!("ALWAYS".parse::<IconMode>().unwrap(), IconMode::Always);
        assert_eq!("automatic".parse::<IconMode>().unwrap(), IconMode::Auto);
        assert!("sometimes".parse::<IconMode>().is_err());
    }

    #[test]
    fn test_parse_minimal_fragment() {
        let set = parse(
            r#"
[shell]
targets = [{ src = "~/.bashrc" }]
"#,
        )
        .unwrap();

        let fragment = set.get("shell").unwrap();
        assert_eq!(fragment.name, "shell");
        assert_eq!(fragment.targets.len(), 1);
        assert_eq!(fragment.targets[0].src, "~/.bashrc");
        assert!(fragment.targets[0].dir.is_none());
        assert!(fragment.actions.is_none());
    }

    #[test]
    fn test_names_are_sorted() {
        let set = parse(
            r"
[zsh]
targets = []

[alacritty]
targets = []

[nvim]
targets = []
",
        )
        .unwrap();

        assert_eq!(set.names(), vec!["alacritty", "nvim", "zsh"]);
        let iterated: Vec<&str> = set.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(iterated, vec!["alacritty", "nvim", "zsh"]);
    }

    #[test]
    fn test_target_order_is_preserved() {
        let set = parse(
            r#"
[shell]
targets = [
    { src = "~/.zshrc" },
    { src = "~/.bashrc" },
    { src = "~/.profile" },
]
"#,
        )
        .unwrap();

        let sources: Vec<&str> = set
            .get("shell")
            .unwrap()
            .targets
            .iter()
            .map(|t| t.src.as_str())
            .collect();
        assert_eq!(sources, vec!["~/.zshrc", "~/.bashrc", "~/.profile"]);
    }

    #[test]
    fn test_parse_fragment_and_target_actions() {
        let set = parse(
            r#"
[app]
targets = [{ src = "~/.config/app", dir = "dotconfig", actions = { before_fetch = "echo tb", after_apply = "echo ta" } }]

[app.actions]
before_apply = "echo fb"
after_fetch = "echo fa"
"#,
        )
        .unwrap();

        let fragment = set.get("app").unwrap();
        let apply = fragment.hooks(TransferDirection::Apply);
        assert_eq!(apply.before, Some("echo fb"));
        assert_eq!(apply.after, None);

        let fetch = fragment.hooks(TransferDirection::Fetch);
        assert_eq!(fetch.before, None);
        assert_eq!(fetch.after, Some("echo fa"));

        let target = &fragment.targets[0];
        assert_eq!(target.dir.as_deref(), Some("dotconfig"));
        assert_eq!(target.hooks(TransferDirection::Fetch).before, Some("echo tb"));
        assert_eq!(target.hooks(TransferDirection::Apply).after, Some("echo ta"));
    }

    #[test]
    fn test_empty_hook_equals_absent_hook() {
        let set = parse(
            r#"
[empty]
targets = [{ src = "~/.a", actions = { after_apply = "" } }]

[empty.actions]
before_fetch = ""

[absent]
targets = [{ src = "~/.a" }]
"#,
        )
        .unwrap();

        let empty = set.get("empty").unwrap();
        let absent = set.get("absent").unwrap();
        for direction in [TransferDirection::Apply, TransferDirection::Fetch] {
            assert_eq!(empty.hooks(direction), absent.hooks(direction));
            assert_eq!(
                empty.targets[0].hooks(direction),
                absent.targets[0].hooks(direction)
            );
        }
        assert!(empty.actions.as_ref().unwrap().is_empty());
    }

    #[test]
    fn test_missing_targets_is_an_error() {
        let err = parse("[broken]\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = parse("this is not valid toml").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_wrong_value_type_is_an_error() {
        let err = parse("[shell]\ntargets = [{ src = 42 }]\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_invalid_fragment_names() {
        for content in [
            "[\"\"]\ntargets = []\n",
            "[\"..\"]\ntargets = []\n",
            "[\"a/b\"]\ntargets = []\n",
        ] {
            let err = parse(content).unwrap_err();
            assert!(
                matches!(err, Error::InvalidFragmentName { .. }),
                "unexpected error for {content:?}: {err}"
            );
        }
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = FragmentSet::load(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_from_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(FRAGMENTS_FILE),
            "[git]\ntargets = [{ src = \"~/.gitconfig\" }]\n",
        )
        .unwrap();

        let set = FragmentSet::load(temp.path()).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains("git"));
    }

    #[test]
    fn test_load_directory_named_like_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(FRAGMENTS_FILE)).unwrap();

        let err = FragmentSet::load(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_from_fragments() {
        let set = FragmentSet::from_fragments([
            Fragment {
                name: "b".to_string(),
                targets: vec![],
                actions: None,
            },
            Fragment {
                name: "a".to_string(),
                targets: vec![],
                actions: None,
            },
        ]);
        assert_eq!(set.names(), vec!["a", "b"]);
    }
}
