//! Fragment transfer engine
//!
//! Runs a batch of fragments in one direction. Each fragment goes through:
//!
//! 1. fragment before hook (a failure skips everything up to step 4)
//! 2. for every target, in declaration order:
//!    target before hook, copy, target after hook
//! 3. fragment after hook
//! 4. finished
//!
//! A failing target before hook skips that target's copy and after hook.
//! Nothing that happens inside one fragment stops the batch.

use crate::hooks::{Hook, HookExecutor, HookKind};
use crate::paths::{Layout, TransferPaths};
use crate::report::{
    FragmentReport, Reporter, StatusEvent, StepOutcome, TargetReport, TransferReport,
};
use crate::system::{EntryKind, System};
use nastrajacz_config::{Fragment, Target};
use nastrajacz_core::path::basename;
use nastrajacz_core::{Result, TransferDirection};
use std::path::{Path, PathBuf};

/// Sequential transfer engine
pub struct TransferEngine<S, H>
where
    S: System,
    H: HookExecutor,
{
    layout: Layout,
    system: S,
    executor: H,
}

impl<S, H> TransferEngine<S, H>
where
    S: System,
    H: HookExecutor,
{
    /// Create an engine over a repository layout
    pub fn new(layout: Layout, system: S, executor: H) -> Self {
        Self {
            layout,
            system,
            executor,
        }
    }

    /// Transfer the given fragments, in order
    ///
    /// # Errors
    ///
    /// Returns an error only if the fragments directory cannot be created at
    /// the start of a fetch. Failures of individual steps are reported
    /// through `reporter` and the returned [`TransferReport`].
    pub fn run(
        &self,
        direction: TransferDirection,
        fragments: &[&Fragment],
        reporter: &mut dyn Reporter,
    ) -> Result<TransferReport> {
        tracing::debug!(%direction, count = fragments.len(), "Starting transfer");

        reporter.report(&StatusEvent::Started {
            direction,
            fragments: fragments.iter().map(|f| f.name.clone()).collect(),
        });

        if direction == TransferDirection::Fetch {
            self.system.create_dir_all(&self.layout.fragments_dir())?;
        }

        let fragments = fragments
            .iter()
            .map(|fragment| self.process_fragment(fragment, direction, reporter))
            .collect();

        Ok(TransferReport {
            direction,
            fragments,
        })
    }

    fn process_fragment(
        &self,
        fragment: &Fragment,
        direction: TransferDirection,
        reporter: &mut dyn Reporter,
    ) -> FragmentReport {
        let _span = tracing::debug_span!("fragment", name = %fragment.name).entered();

        reporter.report(&StatusEvent::FragmentStarted {
            name: fragment.name.clone(),
        });

        let fragment_dir = self.layout.fragment_dir(&fragment.name);
        if direction == TransferDirection::Fetch
            && let Err(e) = self.system.create_dir_all(&fragment_dir)
        {
            tracing::warn!("{}", e);
        }

        let hooks = fragment.hooks(direction);
        let mut report = FragmentReport {
            name: fragment.name.clone(),
            before_hook: None,
            targets: Vec::with_capacity(fragment.targets.len()),
            after_hook: None,
        };

        report.before_hook = hooks.before.map(|command| {
            let hook = Hook {
                kind: HookKind::before(direction),
                command,
                fragment: &fragment.name,
                target: None,
            };
            self.run_hook(&hook, &fragment_dir, reporter)
        });

        if report.aborted() {
            tracing::warn!(
                "{} for {} failed, skipping its targets",
                HookKind::before(direction),
                fragment.name
            );
        } else {
            for target in &fragment.targets {
                let target_report = self.process_target(fragment, target, direction, reporter);
                report.targets.push(target_report);
            }

            report.after_hook = hooks.after.map(|command| {
                let hook = Hook {
                    kind: HookKind::after(direction),
                    command,
                    fragment: &fragment.name,
                    target: None,
                };
                self.run_hook(&hook, &fragment_dir, reporter)
            });
        }

        reporter.report(&StatusEvent::FragmentFinished {
            name: fragment.name.clone(),
        });

        report
    }

    fn process_target(
        &self,
        fragment: &Fragment,
        target: &Target,
        direction: TransferDirection,
        reporter: &mut dyn Reporter,
    ) -> TargetReport {
        let paths = self.layout.resolve(&self.system, &fragment.name, target, direction);
        let hook_dir = self.target_hook_dir(&fragment.name, direction);
        let hooks = target.hooks(direction);

        let mut report = TargetReport {
            name: paths.name.clone(),
            before_hook: None,
            copy: None,
            after_hook: None,
        };

        if let Some(command) = hooks.before {
            let hook = Hook {
                kind: HookKind::before(direction),
                command,
                fragment: &fragment.name,
                target: Some(&paths.name),
            };
            let outcome = self.run_hook(&hook, &hook_dir, reporter);
            report.before_hook = Some(outcome);

            if outcome.is_failure() {
                reporter.report(&StatusEvent::TargetSkipped {
                    target: paths.name.clone(),
                });
                return report;
            }
        }

        report.copy = Some(self.copy(&paths, direction, reporter));

        report.after_hook = hooks.after.map(|command| {
            let hook = Hook {
                kind: HookKind::after(direction),
                command,
                fragment: &fragment.name,
                target: Some(&paths.name),
            };
            self.run_hook(&hook, &hook_dir, reporter)
        });

        report
    }

    /// Target hooks run in the fragment directory on apply and in the
    /// fragments directory on fetch
    fn target_hook_dir(&self, fragment: &str, direction: TransferDirection) -> PathBuf {
        match direction {
            TransferDirection::Apply => self.layout.fragment_dir(fragment),
            TransferDirection::Fetch => self.layout.fragments_dir(),
        }
    }

    fn run_hook(
        &self,
        hook: &Hook<'_>,
        working_dir: &Path,
        reporter: &mut dyn Reporter,
    ) -> StepOutcome {
        let outcome = self.executor.execute(hook, working_dir);

        reporter.report(&StatusEvent::HookFinished {
            kind: hook.kind,
            label: hook.label(),
            outcome,
        });

        outcome
    }

    fn copy(
        &self,
        paths: &TransferPaths,
        direction: TransferDirection,
        reporter: &mut dyn Reporter,
    ) -> StepOutcome {
        let src = paths.source(direction);
        let dst = paths.destination(direction);

        let outcome = match self.copy_entry(src, dst, direction) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("{}", e);
                StepOutcome::Failed
            }
        };

        reporter.report(&StatusEvent::Copied {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            outcome,
        });

        outcome
    }

    fn copy_entry(&self, src: &Path, dst: &Path, direction: TransferDirection) -> Result<StepOutcome> {
        match direction {
            TransferDirection::Fetch => self.system.create_dir_all(dst)?,
            TransferDirection::Apply => {
                if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
                    self.system.create_dir_all(parent)?;
                }
            }
        }

        match self.system.entry_kind(src) {
            EntryKind::Directory => {
                tracing::debug!(src = %src.display(), dst = %dst.display(), "Copying directory");
                self.system.copy_tree(src, dst)?;
                Ok(StepOutcome::Done)
            }
            EntryKind::File => {
                // A file copied onto a directory lands inside it
                let dst = if self.system.entry_kind(dst) == EntryKind::Directory {
                    dst.join(basename(src))
                } else {
                    dst.to_path_buf()
                };
                tracing::debug!(src = %src.display(), dst = %dst.display(), "Copying file");
                self.system.copy_file(src, &dst)?;
                Ok(StepOutcome::Done)
            }
            EntryKind::Missing => {
                tracing::debug!(src = %src.display(), "Source does not exist");
                Ok(StepOutcome::Skipped)
            }
        }
    }
}
