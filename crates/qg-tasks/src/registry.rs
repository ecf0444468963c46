// registry.rs — TaskConfigResolver: the registry of configurable tasks.
//
// The registry is built once at startup and only read afterwards. It keeps
// tasks in registration order, which is also the order the wizard presents
// them in.

use crate::builtin::BuiltinTask;
use crate::error::TaskError;
use crate::name::TaskName;
use crate::option::OptionSchema;
use crate::resolver::OptionResolver;

#[derive(Debug, Clone)]
struct TaskEntry {
    name: TaskName,
    schema: OptionSchema,
}

/// Registry of known tasks and their option schemas.
#[derive(Debug, Clone, Default)]
pub struct TaskConfigResolver {
    tasks: Vec<TaskEntry>,
}

impl TaskConfigResolver {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in task catalog.
    pub fn builtin() -> Self {
        let tasks = BuiltinTask::ALL
            .iter()
            .map(|task| TaskEntry {
                name: task.task_name(),
                schema: task.schema(),
            })
            .collect();
        Self { tasks }
    }

    /// Add a task at the end of the presentation order.
    pub fn register(
        &mut self,
        name: impl Into<TaskName>,
        schema: OptionSchema,
    ) -> Result<(), TaskError> {
        let name = name.into();
        if self.contains(name.as_str()) {
            return Err(TaskError::DuplicateTask(name.to_string()));
        }
        tracing::debug!(task = %name, options = schema.len(), "registered task");
        self.tasks.push(TaskEntry { name, schema });
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_task(
        mut self,
        name: impl Into<TaskName>,
        schema: OptionSchema,
    ) -> Result<Self, TaskError> {
        self.register(name, schema)?;
        Ok(self)
    }

    /// All task names, in presentation order.
    pub fn list_available_task_names(&self) -> Vec<TaskName> {
        self.tasks.iter().map(|entry| entry.name.clone()).collect()
    }

    /// The option resolver for `name`.
    pub fn fetch_by_name(&self, name: &str) -> Result<OptionResolver, TaskError> {
        self.tasks
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| OptionResolver::new(entry.name.clone(), entry.schema.clone()))
            .ok_or_else(|| TaskError::UnknownTask(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.iter().any(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
