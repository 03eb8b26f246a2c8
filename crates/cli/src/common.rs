//! Common types shared across CLI commands

use crate::error::Result;
use nastrajacz_config::{Fragment, FragmentSet, Selection};
use nastrajacz_engine::Layout;
use std::path::Path;
use std::sync::Arc;

/// Runtime context for CLI commands
///
/// Built once per invocation: the fragments file is loaded and the selection
/// is checked before any command runs.
///
/// # Examples
///
/// ```no_run
/// use nastrajacz::common::RuntimeContext;
/// use std::path::Path;
///
/// let context = RuntimeContext::load(Path::new("."), None, true)?;
/// for fragment in context.selected() {
///     println!("{}", fragment.name);
/// }
/// # Ok::<(), nastrajacz::error::CommandError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    /// All fragments defined in `fragments.toml`
    pub fragments: Arc<FragmentSet>,
    /// Repository layout rooted at the working directory
    pub layout: Layout,
    /// Whether status markers include Nerd Font glyphs
    pub show_icons: bool,
    selected: Vec<String>,
}

impl RuntimeContext {
    /// Load `fragments.toml` from `root` and resolve the selection
    ///
    /// # Errors
    ///
    /// Fails if the fragments file is missing or invalid, or if the selection
    /// leaves no fragment to operate on.
    pub fn load(root: &Path, selection: Option<&Selection>, show_icons: bool) -> Result<Self> {
        let fragments = FragmentSet::load(root)?;
        let selected = fragments
            .select(selection)?
            .iter()
            .map(|fragment| fragment.name.clone())
            .collect();

        Ok(Self {
            fragments: Arc::new(fragments),
            layout: Layout::new(root),
            show_icons,
            selected,
        })
    }

    /// Selected fragments in name order
    pub fn selected(&self) -> Vec<&Fragment> {
        self.selected
            .iter()
            .filter_map(|name| self.fragments.get(name))
            .collect()
    }
}
