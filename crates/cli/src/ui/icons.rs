//! Status markers
//!
//! Status lines end with a marker such as `[ DONE]`. The glyph is a Nerd
//! Font symbol and can be turned off, leaving `[DONE]`.

use nastrajacz_engine::StepOutcome;

/// Icon constants using Nerd Font symbols
pub struct Icons;

impl Icons {
    /// Step completed
    pub const DONE: &'static str = "\u{f42e}";
    /// Step failed
    pub const FAIL: &'static str = "\u{f068c}";
    /// Step skipped
    pub const SKIP: &'static str = "\u{f517}";
}

/// Status icon type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    /// `DONE`
    Done,
    /// `FAIL`
    Fail,
    /// `SKIP`
    Skip,
}

impl StatusIcon {
    /// Nerd Font glyph
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Done => Icons::DONE,
            Self::Fail => Icons::FAIL,
            Self::Skip => Icons::SKIP,
        }
    }

    /// Text label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Done => "DONE",
            Self::Fail => "FAIL",
            Self::Skip => "SKIP",
        }
    }

    /// Bracketed marker, e.g. `[ DONE]`
    pub fn marker(&self, show_icons: bool) -> String {
        if show_icons {
            format!("[{} {}]", self.glyph(), self.label())
        } else {
            format!("[{}]", self.label())
        }
    }
}

impl From<StepOutcome> for StatusIcon {
    fn from(outcome: StepOutcome) -> Self {
        match outcome {
            StepOutcome::Done => Self::Done,
            StepOutcome::Skipped => Self::Skip,
            StepOutcome::HookFailed(_) | StepOutcome::Failed => Self::Fail,
        }
    }
}
