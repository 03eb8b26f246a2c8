//! Terminal status printer
//!
//! Renders engine status events as plain text lines on stdout.

use super::icons::StatusIcon;
use nastrajacz_engine::{Reporter, StatusEvent};
use std::io::{self, Write};

/// Render one event as the lines it prints
pub fn render(event: &StatusEvent, show_icons: bool) -> Vec<String> {
    match event {
        StatusEvent::Started {
            direction,
            fragments,
        } => vec![format!(
            "Performing {direction} for {} fragments.",
            fragments.join(", ")
        )],
        StatusEvent::FragmentStarted { name } => {
            vec![String::new(), format!("Processing fragment {name}.")]
        }
        StatusEvent::HookFinished {
            kind,
            label,
            outcome,
        } => vec![format!(
            "Running {kind} for {label} {} (exit code {}).",
            StatusIcon::from(*outcome).marker(show_icons),
            outcome.exit_code().unwrap_or(-1)
        )],
        StatusEvent::TargetSkipped { target } => vec![format!(
            "Skipping target {target} because of failed before action {}.",
            StatusIcon::Skip.marker(show_icons)
        )],
        StatusEvent::Copied { src, dst, outcome } => vec![format!(
            "Copying \"{}\" to \"{}\" {}.",
            src.display(),
            dst.display(),
            StatusIcon::from(*outcome).marker(show_icons)
        )],
        StatusEvent::FragmentFinished { name } => vec![format!(
            "Finished processing fragment {name} {}.",
            StatusIcon::Done.marker(show_icons)
        )],
    }
}

/// Reporter writing status lines to an output stream
pub struct StatusPrinter<W: Write> {
    out: W,
    show_icons: bool,
}

impl StatusPrinter<io::Stdout> {
    /// Printer writing to stdout
    pub fn stdout(show_icons: bool) -> Self {
        Self::new(io::stdout(), show_icons)
    }
}

impl<W: Write> StatusPrinter<W> {
    /// Create a printer over any writer
    pub fn new(out: W, show_icons: bool) -> Self {
        Self { out, show_icons }
    }

    /// Consume the printer and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &StatusEvent) -> io::Result<()> {
        for line in render(event, self.show_icons) {
            writeln!(self.out, "{line}")?;
        }
        // Hook output shares the stream
        self.out.flush()
    }
}

impl<W: Write> Reporter for StatusPrinter<W> {
    fn report(&mut self, event: &StatusEvent) {
        if let Err(e) = self.write_event(event) {
            tracing::warn!("Failed to write status: {}", e);
        }
    }
}
