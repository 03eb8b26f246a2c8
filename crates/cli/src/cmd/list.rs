//! List command implementation

use nastrajacz_config::FragmentSet;
use owo_colors::{OwoColorize, Stream};

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::Result;

/// Heading printed above the fragment names
pub const HEADING: &str = "Fragments defined in configuration file:";

/// List fragments present in the configuration file
///
/// Always lists every defined fragment, regardless of `--select`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCommand;

impl Command for ListCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> Result<()> {
        println!(
            "{}",
            HEADING.if_supports_color(Stream::Stdout, |text| text.bold())
        );
        println!("{}", names_line(&context.fragments));
        Ok(())
    }
}

/// Fragment names joined by `, ` in name order
pub fn names_line(fragments: &FragmentSet) -> String {
    fragments.names().join(", ")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use std::path::Path;

    #[test]
    fn test_names_line_is_sorted() {
        let set = FragmentSet::from_toml_str(
            "[zsh]\ntargets = []\n\n[alacritty]\ntargets = []\n\n[git]\ntargets = []\n",
            Path::new("fragments.toml"),
        )
        .unwrap();

        assert_eq!(names_line(&set), "alacritty, git, zsh");
    }
}
