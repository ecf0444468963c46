// session_scenarios.rs — End-to-end configure runs against a real qualgate.yml.
//
// Each test drives `configure` with a ScriptedPrompter and a YamlFileStore
// in a temp directory, then checks the file on disk and the transcript:
//
//   1. Empty project + phpcs + stop → file holds exactly phpcs
//   2. Existing phpcs + re-pick + decline overwrite → document unchanged
//   3. No operator → zero prompts, no file
//   4. skip-if-exists + existing file → zero prompts, file untouched
//   5. Continue = no → exactly one round
//   6. Failed round → wizard keeps going, good tasks still saved
//   7. Unknown top-level keys survive a run
//   8. A task enabled as `phpcs: ~` gets its defaults without an overwrite prompt

use std::fs;
use std::path::Path;

use qg_config::{ConfigStore, ConfigurationDocument, YamlFileStore};
use qg_tasks::{BuiltinTask, OptionDecl, OptionSchema, TaskConfigResolver};
use qg_wizard::{
    configure, ConfigureOptions, ConfigureOutcome, NotificationLevel, PromptRecord,
    ScriptedAnswer, ScriptedPrompter,
};
use tempfile::TempDir;

fn phpcs_registry() -> TaskConfigResolver {
    TaskConfigResolver::new()
        .with_task(
            "phpcs",
            OptionSchema::new().option(OptionDecl::new("standard").with_default("PSR2")),
        )
        .unwrap()
        .with_task(
            "phpunit",
            OptionSchema::new().option(OptionDecl::new("config_file").with_null_default()),
        )
        .unwrap()
}

fn write_config(dir: &TempDir, yaml: &str) -> std::path::PathBuf {
    let path = dir.path().join("qualgate.yml");
    fs::write(&path, yaml).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn empty_project_configures_phpcs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("qualgate.yml");
    let store = YamlFileStore::new(&path);
    let prompter = ScriptedPrompter::new([ScriptedAnswer::choice("phpcs"), ScriptedAnswer::no()]);

    let outcome = configure(
        ConfigureOptions::default(),
        &phpcs_registry(),
        &store,
        &prompter,
    )
    .unwrap();

    assert!(matches!(outcome, ConfigureOutcome::Saved { .. }));
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(
        read(&path),
        "parameters:\n  tasks:\n    phpcs:\n      standard: PSR2\n"
    );
}

#[test]
fn declined_override_leaves_document_identical() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "parameters:\n  tasks:\n    phpcs:\n      standard: PSR12\n      report: summary\n",
    );
    let store = YamlFileStore::new(&path);
    let before = store.load().unwrap();

    let prompter = ScriptedPrompter::new([
        ScriptedAnswer::choice("phpcs"),
        ScriptedAnswer::no(),
        ScriptedAnswer::no(),
    ]);
    let outcome = configure(
        ConfigureOptions::default(),
        &phpcs_registry(),
        &store,
        &prompter,
    )
    .unwrap();

    match outcome {
        ConfigureOutcome::Saved { report } => {
            assert!(report.configured.is_empty());
            assert_eq!(report.skipped.len(), 1);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(store.load().unwrap(), before);
    assert_eq!(prompter.prompt_count(), 3);
}

#[test]
fn accepted_override_replaces_entry_wholesale() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "parameters:\n  tasks:\n    phpcs:\n      standard: PSR12\n      report: summary\n",
    );
    let store = YamlFileStore::new(&path);
    let prompter = ScriptedPrompter::new([
        ScriptedAnswer::choice("phpcs"),
        ScriptedAnswer::yes(),
        ScriptedAnswer::no(),
    ]);

    configure(
        ConfigureOptions::default(),
        &phpcs_registry(),
        &store,
        &prompter,
    )
    .unwrap();

    assert_eq!(
        read(&path),
        "parameters:\n  tasks:\n    phpcs:\n      standard: PSR2\n"
    );
}

#[test]
fn non_interactive_run_prompts_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("qualgate.yml");
    let store = YamlFileStore::new(&path);
    let prompter = ScriptedPrompter::non_interactive();

    let outcome = configure(
        ConfigureOptions::default(),
        &phpcs_registry(),
        &store,
        &prompter,
    )
    .unwrap();

    assert_eq!(outcome, ConfigureOutcome::SkippedNonInteractive);
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(prompter.prompt_count(), 0);
    assert!(!path.exists());
}

#[test]
fn skip_if_exists_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let original = "# hand written\nparameters:\n  tasks: {}\n";
    let path = write_config(&dir, original);
    let store = YamlFileStore::new(&path);
    let prompter = ScriptedPrompter::new([]);

    let outcome = configure(
        ConfigureOptions {
            skip_if_exists: true,
        },
        &phpcs_registry(),
        &store,
        &prompter,
    )
    .unwrap();

    assert_eq!(outcome, ConfigureOutcome::SkippedExisting);
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(prompter.prompt_count(), 0);
    assert_eq!(read(&path), original);
    assert_eq!(
        prompter.notifications()[0].level,
        NotificationLevel::Warning
    );
}

#[test]
fn stopping_after_first_round_adds_one_entry() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "parameters:\n  tasks:\n    phpunit: ~\n");
    let store = YamlFileStore::new(&path);
    let prompter = ScriptedPrompter::new([ScriptedAnswer::choice("phpcs"), ScriptedAnswer::no()]);

    let outcome = configure(
        ConfigureOptions::default(),
        &phpcs_registry(),
        &store,
        &prompter,
    )
    .unwrap();

    let ConfigureOutcome::Saved { report } = outcome else {
        panic!("expected a saved outcome");
    };
    assert_eq!(report.rounds(), 1);

    let saved = store.load().unwrap();
    assert_eq!(saved.configured_task_names(), vec!["phpunit", "phpcs"]);
    let choices = prompter
        .transcript()
        .into_iter()
        .filter(|r| matches!(r, PromptRecord::Choice { .. }))
        .count();
    assert_eq!(choices, 1);
}

#[test]
fn failed_round_does_not_end_the_wizard() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("qualgate.yml");
    let store = YamlFileStore::new(&path);
    let registry = phpcs_registry()
        .with_task(
            "psalm",
            OptionSchema::new().option(OptionDecl::new("config").required()),
        )
        .unwrap();
    let prompter = ScriptedPrompter::new([
        ScriptedAnswer::choice("psalm"),
        ScriptedAnswer::yes(),
        ScriptedAnswer::choice("phpunit"),
        ScriptedAnswer::no(),
    ]);

    let outcome = configure(ConfigureOptions::default(), &registry, &store, &prompter).unwrap();

    let ConfigureOutcome::Saved { report } = outcome else {
        panic!("expected a saved outcome");
    };
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].task, "psalm");
    assert_eq!(report.configured.len(), 1);

    let saved = store.load().unwrap();
    assert!(!saved.has_task("psalm"));
    assert!(saved.has_task("phpunit"));
}

#[test]
fn unrelated_settings_survive() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "parameters:\n  hooks_dir: hooks\n  tasks:\n    phpunit: ~\nextensions: []\n",
    );
    let store = YamlFileStore::new(&path);
    let prompter = ScriptedPrompter::new([ScriptedAnswer::choice("phpcs"), ScriptedAnswer::no()]);

    configure(
        ConfigureOptions::default(),
        &phpcs_registry(),
        &store,
        &prompter,
    )
    .unwrap();

    let saved = ConfigurationDocument::from_yaml_str(&read(&path)).unwrap();
    assert_eq!(
        saved.get("extensions"),
        Some(&serde_yaml::Value::Sequence(Vec::new()))
    );
    assert!(saved.has_task("phpunit"));
    assert!(saved.has_task("phpcs"));
}

#[test]
fn enabled_task_without_options_is_filled_in() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "parameters:\n  tasks:\n    phpcs: ~\n");
    let store = YamlFileStore::new(&path);
    let prompter = ScriptedPrompter::new([ScriptedAnswer::choice("phpcs"), ScriptedAnswer::no()]);

    configure(
        ConfigureOptions::default(),
        &phpcs_registry(),
        &store,
        &prompter,
    )
    .unwrap();

    assert_eq!(prompter.prompt_count(), 2);
    assert_eq!(
        read(&path),
        "parameters:\n  tasks:\n    phpcs:\n      standard: PSR2\n"
    );
}

#[test]
fn builtin_catalog_round() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("qualgate.yml");
    let store = YamlFileStore::new(&path);
    let prompter = ScriptedPrompter::new([
        ScriptedAnswer::choice(BuiltinTask::GitCommitMessage.name()),
        ScriptedAnswer::no(),
    ]);

    configure(
        ConfigureOptions::default(),
        &TaskConfigResolver::builtin(),
        &store,
        &prompter,
    )
    .unwrap();

    let saved = store.load().unwrap();
    let options = saved.task_options("git_commit_message").unwrap();
    assert_eq!(
        options.get("max_subject_width"),
        Some(&serde_yaml::Value::from(60))
    );
}
