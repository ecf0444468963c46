// tasks.rs — Task subcommands: list, show.

use clap::Subcommand;
use qg_tasks::{TaskConfigResolver, TaskName};
use serde::Serialize;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List the tasks that can be configured.
    List {
        /// Print as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print the default options of a task as YAML.
    Show {
        /// Task name (e.g., "phpcs").
        name: String,
    },
}

pub fn execute(cmd: &TaskCommands, registry: &TaskConfigResolver) -> anyhow::Result<()> {
    match cmd {
        TaskCommands::List { json } => list_tasks(registry, *json),
        TaskCommands::Show { name } => show_task(registry, name),
    }
}

#[derive(Debug, Serialize)]
struct TaskSummary {
    name: TaskName,
    options: usize,
}

fn summaries(registry: &TaskConfigResolver) -> anyhow::Result<Vec<TaskSummary>> {
    registry
        .list_available_task_names()
        .into_iter()
        .map(|name| -> anyhow::Result<TaskSummary> {
            let options = registry.fetch_by_name(name.as_str())?.schema().len();
            Ok(TaskSummary { name, options })
        })
        .collect()
}

fn list_tasks(registry: &TaskConfigResolver, json: bool) -> anyhow::Result<()> {
    let tasks = summaries(registry)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    println!("Available tasks:");
    println!();
    for task in &tasks {
        println!("  {:<20} {} options", task.name, task.options);
    }
    println!();
    println!("Add one with: qg configure");
    Ok(())
}

fn show_task(registry: &TaskConfigResolver, name: &str) -> anyhow::Result<()> {
    print!("{}", render_defaults(registry, name)?);
    Ok(())
}

/// The defaults of `name`, as they would appear under `parameters.tasks`.
fn render_defaults(registry: &TaskConfigResolver, name: &str) -> anyhow::Result<String> {
    let resolver = registry.fetch_by_name(name).map_err(|e| {
        anyhow::anyhow!("{}. Run `qg tasks list` to see available tasks.", e)
    })?;
    let options = resolver.resolve()?;

    let mut entry = serde_yaml::Mapping::new();
    entry.insert(name.into(), options.into_value());
    Ok(serde_yaml::to_string(&entry)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qg_tasks::{OptionDecl, OptionSchema};

    #[test]
    fn summaries_follow_registry_order() {
        let registry = TaskConfigResolver::builtin();
        let tasks = summaries(&registry).unwrap();
        assert_eq!(tasks.len(), registry.len());
        assert_eq!(tasks[0].name, "composer");
        assert!(tasks.iter().all(|t| t.options > 0));
    }

    #[test]
    fn render_defaults_nests_under_task_name() {
        let registry = TaskConfigResolver::new()
            .with_task(
                "phpcs",
                OptionSchema::new().option(OptionDecl::new("standard").with_default("PSR2")),
            )
            .unwrap();

        let yaml = render_defaults(&registry, "phpcs").unwrap();
        assert_eq!(yaml, "phpcs:\n  standard: PSR2\n");
    }

    #[test]
    fn render_defaults_unknown_task() {
        let err = render_defaults(&TaskConfigResolver::builtin(), "phpmd").unwrap_err();
        assert!(err.to_string().contains("qg tasks list"));
    }

    #[test]
    fn render_defaults_schema_error() {
        let registry = TaskConfigResolver::new()
            .with_task(
                "psalm",
                OptionSchema::new().option(OptionDecl::new("config").required()),
            )
            .unwrap();
        assert!(render_defaults(&registry, "psalm").is_err());
    }
}
