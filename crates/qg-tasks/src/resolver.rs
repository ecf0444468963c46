// resolver.rs — OptionResolver: turns one task's declared schema into defaults.
//
// Resolution is a pure function of the task's own schema. It never looks at
// the existing configuration document, so resolving the same task twice
// always yields equal mappings.

use std::collections::HashSet;

use crate::error::TaskError;
use crate::name::TaskName;
use crate::option::{OptionSchema, OptionsMapping};

/// Resolves the default options of a single task.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionResolver {
    task: TaskName,
    schema: OptionSchema,
}

impl OptionResolver {
    pub fn new(task: TaskName, schema: OptionSchema) -> Self {
        Self { task, schema }
    }

    pub fn task(&self) -> &TaskName {
        &self.task
    }

    pub fn schema(&self) -> &OptionSchema {
        &self.schema
    }

    /// Compute the task's default-valued options.
    ///
    /// Options are visited in declaration order:
    /// - a name declared twice is a schema error
    /// - a default must satisfy the option's allowed types and values
    /// - a required option without a default is a schema error
    /// - an optional option without a default is left out of the mapping
    pub fn resolve(&self) -> Result<OptionsMapping, TaskError> {
        let task = self.task.as_str();
        let mut seen = HashSet::new();
        let mut options = OptionsMapping::new();

        for decl in self.schema.options() {
            if !seen.insert(decl.name.as_str()) {
                return Err(TaskError::resolution(
                    task,
                    format!("option `{}` is declared more than once", decl.name),
                ));
            }

            match &decl.default {
                Some(value) => {
                    decl.check(value)
                        .map_err(|reason| TaskError::resolution(task, reason))?;
                    options.insert(decl.name.clone(), value.clone());
                }
                None if decl.required => {
                    return Err(TaskError::resolution(
                        task,
                        format!("required option `{}` has no default value", decl.name),
                    ));
                }
                None => {}
            }
        }

        tracing::debug!(task, options = options.len(), "resolved task options");
        Ok(options)
    }
}
