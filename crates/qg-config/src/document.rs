// document.rs — ConfigurationDocument: the qualgate.yml tree.
//
// The document keeps the full YAML mapping as parsed so that settings the
// wizard does not know about survive a load/save cycle untouched, in their
// original key order. Task configuration lives under:
//
//   parameters:
//     tasks:
//       <task>: <options>

use serde_yaml::{Mapping, Value};

use qg_tasks::OptionsMapping;

use crate::error::ConfigError;

pub const PARAMETERS_KEY: &str = "parameters";
pub const TASKS_KEY: &str = "tasks";

/// The complete configuration tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigurationDocument {
    root: Mapping,
}

impl ConfigurationDocument {
    /// A document with no settings at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a YAML string. Blank input and a bare `~` yield an empty document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, "<inline>")
    }

    pub(crate) fn parse(yaml: &str, origin: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::empty());
        }

        let value: Value = serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;

        match value {
            Value::Null => Ok(Self::empty()),
            Value::Mapping(root) => Ok(Self { root }),
            other => Err(ConfigError::InvalidStructure(format!(
                "{} must contain a mapping at the top level, found {}",
                origin,
                describe(&other)
            ))),
        }
    }

    /// Render the document as YAML.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Top-level lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// The `parameters.tasks` mapping, if present and well-formed.
    pub fn tasks(&self) -> Option<&Mapping> {
        self.root
            .get(PARAMETERS_KEY)?
            .as_mapping()?
            .get(TASKS_KEY)?
            .as_mapping()
    }

    /// The configuration stored for `task`, if any.
    ///
    /// A task written as `phpcs: ~` is present with a null value.
    pub fn task_options(&self, task: &str) -> Option<&Value> {
        self.tasks()?.get(task)
    }

    /// Whether `parameters.tasks` has an entry for `task`.
    pub fn has_task(&self, task: &str) -> bool {
        self.tasks().is_some_and(|tasks| tasks.contains_key(task))
    }

    /// Whether `task` carries a configuration of its own.
    ///
    /// `phpcs: ~` only enables the task with its defaults, so it does not
    /// count.
    pub fn is_task_configured(&self, task: &str) -> bool {
        self.task_options(task).is_some_and(|options| !options.is_null())
    }

    /// Names of all configured tasks, in document order.
    pub fn configured_task_names(&self) -> Vec<String> {
        self.tasks()
            .map(|tasks| {
                tasks
                    .keys()
                    .filter_map(|key| key.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replace `parameters.tasks[task]` with `options`.
    ///
    /// Missing or null `parameters` / `tasks` sections are created. If either
    /// exists with a non-mapping value the document is left untouched and
    /// an error is returned.
    pub fn set_task_options(
        &mut self,
        task: &str,
        options: &OptionsMapping,
    ) -> Result<(), ConfigError> {
        check_section(&self.root, PARAMETERS_KEY, PARAMETERS_KEY)?;
        if let Some(Value::Mapping(parameters)) = self.root.get(PARAMETERS_KEY) {
            check_section(parameters, TASKS_KEY, "parameters.tasks")?;
        }

        let parameters = section_mut(&mut self.root, PARAMETERS_KEY)?;
        let tasks = section_mut(parameters, TASKS_KEY)?;
        tasks.insert(Value::String(task.to_string()), options.to_value());
        Ok(())
    }
}

/// Fail if `key` holds something other than a mapping or null.
fn check_section(map: &Mapping, key: &str, path: &str) -> Result<(), ConfigError> {
    match map.get(key) {
        None | Some(Value::Null) | Some(Value::Mapping(_)) => Ok(()),
        Some(other) => Err(ConfigError::InvalidStructure(format!(
            "`{}` must be a mapping, found {}",
            path,
            describe(other)
        ))),
    }
}

/// Get `key` as a mutable mapping, creating it when missing or null.
fn section_mut<'a>(map: &'a mut Mapping, key: &str) -> Result<&'a mut Mapping, ConfigError> {
    if matches!(map.get(key), None | Some(Value::Null)) {
        map.insert(Value::String(key.to_string()), Value::Mapping(Mapping::new()));
    }

    match map.get_mut(key) {
        Some(Value::Mapping(section)) => Ok(section),
        Some(other) => Err(ConfigError::InvalidStructure(format!(
            "`{}` must be a mapping, found {}",
            key,
            describe(other)
        ))),
        None => Err(ConfigError::InvalidStructure(format!(
            "`{}` could not be created",
            key
        ))),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
