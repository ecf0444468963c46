// configure.rs — `qg configure`: run the wizard on the terminal.
//
// Locates the configuration file, binds the wizard to stdin/stdout and maps
// the outcome to a process exit code. Errors outside the outcome model
// (unreadable file, closed input) bubble up through anyhow.

use std::path::Path;

use anyhow::Context;
use qg_config::{ConfigLocator, ConfigStore, YamlFileStore};
use qg_tasks::TaskConfigResolver;
use qg_wizard::{configure, ConfigureOptions, ConfigureOutcome, SessionReport, TerminalPrompter};

pub fn execute(
    project_root: &Path,
    config: Option<&Path>,
    no_interaction: bool,
    skip_if_exists: bool,
    registry: &TaskConfigResolver,
) -> anyhow::Result<i32> {
    let path = ConfigLocator::new(project_root).locate(config);
    tracing::debug!(path = %path.display(), "using configuration file");
    let store = YamlFileStore::new(path);

    let mut prompter = TerminalPrompter::stdio();
    if no_interaction {
        prompter = prompter.with_interactive(false);
    }

    let outcome = configure(
        ConfigureOptions { skip_if_exists },
        registry,
        &store,
        &prompter,
    )
    .with_context(|| format!("Failed to configure {}", store.location().display()))?;

    if let ConfigureOutcome::Saved { report } = &outcome {
        for line in summary(report, store.location()) {
            println!("{}", line);
        }
    }

    Ok(outcome.exit_code())
}

/// Closing summary printed after a saved run.
fn summary(report: &SessionReport, location: &Path) -> Vec<String> {
    let mut lines = vec![format!("Wrote {}", location.display())];
    if !report.configured.is_empty() {
        lines.push(format!("  configured: {}", join(&report.configured)));
    }
    if !report.skipped.is_empty() {
        lines.push(format!("  kept:       {}", join(&report.skipped)));
    }
    for failure in &report.failed {
        lines.push(format!("  failed:     {} ({})", failure.task, failure.reason));
    }
    lines
}

fn join<T: AsRef<str>>(names: &[T]) -> String {
    names
        .iter()
        .map(|n| n.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}
