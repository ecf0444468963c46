//! # qg-tasks
//!
//! Task registry and option resolution for Qualgate.
//!
//! A task is a named quality check (a linter, a test runner, a commit
//! message policy) whose configuration lives under `parameters.tasks` in
//! `qualgate.yml`. Every task declares an [`OptionSchema`]; resolving that
//! schema produces the [`OptionsMapping`] of defaults the wizard writes out.
//!
//! ## Key components
//!
//! - [`TaskConfigResolver`] — the registry of known tasks, in presentation order
//! - [`OptionResolver`] — resolves one task's schema into concrete defaults
//! - [`BuiltinTask`] — the built-in task catalog, one variant per task
//! - [`OptionDecl`] / [`OptionSchema`] — declared options with defaults,
//!   required flags, and allowed types/values

pub mod builtin;
pub mod error;
pub mod name;
pub mod option;
pub mod registry;
pub mod resolver;

pub use builtin::BuiltinTask;
pub use error::TaskError;
pub use name::TaskName;
pub use option::{OptionDecl, OptionSchema, OptionType, OptionsMapping};
pub use registry::TaskConfigResolver;
pub use resolver::OptionResolver;
