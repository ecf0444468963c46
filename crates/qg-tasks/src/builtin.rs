// builtin.rs — The built-in task catalog.
//
// Each variant owns its option declarations. The defaults mirror what the
// underlying tools use when run without extra flags, so a freshly configured
// task behaves like the tool's own default invocation.

use std::fmt;

use crate::name::TaskName;
use crate::option::{OptionDecl, OptionSchema, OptionType};

/// Tasks shipped with Qualgate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTask {
    Composer,
    GitBlacklist,
    GitCommitMessage,
    JsonLint,
    Phpcs,
    Phplint,
    Phpstan,
    Phpunit,
    YamlLint,
}

impl BuiltinTask {
    /// All built-in tasks, in presentation order.
    pub const ALL: [BuiltinTask; 9] = [
        BuiltinTask::Composer,
        BuiltinTask::GitBlacklist,
        BuiltinTask::GitCommitMessage,
        BuiltinTask::JsonLint,
        BuiltinTask::Phpcs,
        BuiltinTask::Phplint,
        BuiltinTask::Phpstan,
        BuiltinTask::Phpunit,
        BuiltinTask::YamlLint,
    ];

    /// The key used in the registry and under `parameters.tasks`.
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinTask::Composer => "composer",
            BuiltinTask::GitBlacklist => "git_blacklist",
            BuiltinTask::GitCommitMessage => "git_commit_message",
            BuiltinTask::JsonLint => "jsonlint",
            BuiltinTask::Phpcs => "phpcs",
            BuiltinTask::Phplint => "phplint",
            BuiltinTask::Phpstan => "phpstan",
            BuiltinTask::Phpunit => "phpunit",
            BuiltinTask::YamlLint => "yamllint",
        }
    }

    pub fn task_name(&self) -> TaskName {
        TaskName::new(self.name())
    }

    /// The option declarations of this task.
    pub fn schema(&self) -> OptionSchema {
        match self {
            BuiltinTask::Composer => composer(),
            BuiltinTask::GitBlacklist => git_blacklist(),
            BuiltinTask::GitCommitMessage => git_commit_message(),
            BuiltinTask::JsonLint => jsonlint(),
            BuiltinTask::Phpcs => phpcs(),
            BuiltinTask::Phplint => phplint(),
            BuiltinTask::Phpstan => phpstan(),
            BuiltinTask::Phpunit => phpunit(),
            BuiltinTask::YamlLint => yamllint(),
        }
    }
}

impl fmt::Display for BuiltinTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn flag(name: &str, default: bool) -> OptionDecl {
    OptionDecl::new(name)
        .with_default(default)
        .allow_types([OptionType::Bool])
}

fn list(name: &str) -> OptionDecl {
    OptionDecl::new(name)
        .with_empty_list_default()
        .allow_types([OptionType::List])
}

fn nullable(name: &str, kind: OptionType) -> OptionDecl {
    OptionDecl::new(name)
        .with_null_default()
        .allow_types([kind, OptionType::Null])
}

fn triggered_by(extensions: &[&str]) -> OptionDecl {
    OptionDecl::new("triggered_by")
        .with_default(extensions.to_vec())
        .allow_types([OptionType::List])
        .describe("File extensions that trigger the task")
}

fn composer() -> OptionSchema {
    OptionSchema::new()
        .option(
            OptionDecl::new("file")
                .with_default("./composer.json")
                .allow_types([OptionType::String]),
        )
        .option(flag("no_check_all", false))
        .option(flag("no_check_lock", false))
        .option(flag("no_check_publish", false))
        .option(flag("no_local_repository", false))
        .option(flag("with_dependencies", false))
        .option(flag("strict", false))
}

fn git_blacklist() -> OptionSchema {
    OptionSchema::new()
        .option(list("keywords").describe("Keywords that may not appear in committed code"))
        .option(list("whitelist_patterns"))
        .option(triggered_by(&["php"]))
        .option(
            OptionDecl::new("regexp_type")
                .with_default("G")
                .allow_values(["G", "E", "P"])
                .describe("git grep pattern flavour: basic (G), extended (E) or perl (P)"),
        )
        .option(flag("match_word", false))
        .option(list("ignore_patterns"))
}

fn git_commit_message() -> OptionSchema {
    OptionSchema::new()
        .option(flag("allow_empty_message", false))
        .option(flag("enforce_capitalized_subject", true))
        .option(flag("enforce_no_subject_punctuations", false))
        .option(flag("enforce_no_subject_trailing_period", true))
        .option(flag("enforce_single_lined_subject", true))
        .option(list("type_scope_conventions"))
        .option(
            OptionDecl::new("max_body_width")
                .with_default(72)
                .allow_types([OptionType::Int]),
        )
        .option(
            OptionDecl::new("max_subject_width")
                .with_default(60)
                .allow_types([OptionType::Int]),
        )
        .option(list("matchers"))
        .option(flag("case_insensitive", true))
        .option(flag("multiline", true))
        .option(
            OptionDecl::new("additional_modifiers")
                .with_default("")
                .allow_types([OptionType::String]),
        )
}

fn jsonlint() -> OptionSchema {
    OptionSchema::new()
        .option(list("ignore_patterns"))
        .option(flag("detect_key_conflicts", false))
}

fn phpcs() -> OptionSchema {
    OptionSchema::new()
        .option(
            OptionDecl::new("standard")
                .with_empty_list_default()
                .allow_types([OptionType::List, OptionType::String])
                .describe("Coding standard(s) to check against"),
        )
        .option(nullable("severity", OptionType::Int))
        .option(nullable("error_severity", OptionType::Int))
        .option(nullable("warning_severity", OptionType::Int))
        .option(nullable("tab_width", OptionType::Int))
        .option(
            OptionDecl::new("report")
                .with_default("full")
                .allow_types([OptionType::String]),
        )
        .option(nullable("report_width", OptionType::Int))
        .option(list("whitelist_patterns"))
        .option(nullable("encoding", OptionType::String))
        .option(list("ignore_patterns"))
        .option(list("sniffs"))
        .option(triggered_by(&["php"]))
        .option(list("exclude"))
        .option(flag("show_sniffs_error_path", true))
}

fn phplint() -> OptionSchema {
    OptionSchema::new()
        .option(list("exclude"))
        .option(nullable("jobs", OptionType::Int))
        .option(flag("short_open_tag", false))
        .option(list("ignore_patterns"))
        .option(triggered_by(&["php", "phtml", "php3", "php4", "php5"]))
}

fn phpstan() -> OptionSchema {
    OptionSchema::new()
        .option(nullable("autoload_file", OptionType::String))
        .option(nullable("configuration", OptionType::String))
        .option(
            OptionDecl::new("level")
                .with_null_default()
                .allow_types([OptionType::Int, OptionType::String, OptionType::Null]),
        )
        .option(list("force_patterns"))
        .option(list("ignore_patterns"))
        .option(triggered_by(&["php"]))
        .option(nullable("memory_limit", OptionType::String))
}

fn phpunit() -> OptionSchema {
    OptionSchema::new()
        .option(nullable("config_file", OptionType::String))
        .option(nullable("testsuite", OptionType::String))
        .option(list("group"))
        .option(flag("always_execute", false))
        .option(
            OptionDecl::new("order")
                .with_null_default()
                .allow_values([
                    serde_yaml::Value::Null,
                    "default".into(),
                    "defects".into(),
                    "depends".into(),
                    "duration".into(),
                    "random".into(),
                    "reverse".into(),
                    "size".into(),
                ]),
        )
}

fn yamllint() -> OptionSchema {
    OptionSchema::new()
        .option(list("whitelist_patterns"))
        .option(list("ignore_patterns"))
        .option(flag("object_support", false))
        .option(flag("exception_on_invalid_type", false))
        .option(flag("parse_constant", false))
        .option(flag("parse_custom_tags", false))
}
