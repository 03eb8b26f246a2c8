//! Fragment selection
//!
//! A selection is the comma-separated list passed with `--select`. It is
//! intersected with the fragments defined in `fragments.toml`; unknown names
//! are ignored.

use crate::config::{Fragment, FragmentSet};
use crate::Result;
use nastrajacz_core::Error;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

/// Set of requested fragment names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: BTreeSet<String>,
}

impl Selection {
    /// Parse a comma-separated list of fragment names
    ///
    /// Entries are trimmed and empty entries are dropped.
    pub fn parse(list: &str) -> Self {
        Self {
            names: list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Check if a fragment name was requested
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Check if no names were requested
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromStr for Selection {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl FragmentSet {
    /// Resolve the fragments to operate on
    ///
    /// Without a selection every fragment is chosen. The result is ordered by
    /// fragment name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySelection`] if no defined fragment remains.
    pub fn select(&self, selection: Option<&Selection>) -> Result<Vec<&Fragment>> {
        let selected: Vec<&Fragment> = match selection {
            Some(selection) => self
                .iter()
                .filter(|fragment| selection.contains(&fragment.name))
                .collect(),
            None => self.iter().collect(),
        };

        if selected.is_empty() {
            return Err(Error::EmptySelection);
        }

        tracing::debug!(count = selected.len(), "Selected fragments");
        Ok(selected)
    }
}
