//! End-to-end tests driving the promptsync binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TARGET: &str = "export class LLMClient {\n    constructor() {\n        this.ready = true;\n    }\n\n    static DEFAULT_PROMPTS = {\n        old: \"x\"\n    };\n\n    static other() {\n        return { a: 1 };\n    }\n}\n";

fn project() -> TempDir {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("docs/prompts")).unwrap();
    fs::create_dir_all(root.path().join("js")).unwrap();
    fs::write(root.path().join("js/api.js"), TARGET).unwrap();
    root
}

fn write_prompt(root: &Path, filename: &str, content: &str) {
    fs::write(root.join("docs/prompts").join(filename), content).unwrap();
}

fn cli(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("promptsync").unwrap();
    cmd.arg("--root")
        .arg(root)
        .env_remove("PROMPTSYNC_ROOT")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn target(root: &Path) -> String {
    fs::read_to_string(root.join("js/api.js")).unwrap()
}

#[test]
fn test_sync_two_prompts() {
    let root = project();
    write_prompt(root.path(), "chat.md", "---\nname: chat\n---\nHello\nWorld\n");
    write_prompt(root.path(), "chat_fallback.md", "Quick fallback line\n");

    cli(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded: chat.md (11 chars)"))
        .stdout(predicate::str::contains("Loaded: chat_fallback.md (19 chars)"))
        .stdout(predicate::str::contains("optimize.md not found, skipping"))
        .stdout(predicate::str::contains(
            "Updated 2 prompts: chat, chat_fallback",
        ))
        .stderr(predicate::str::is_empty());

    assert_eq!(
        target(root.path()),
        "export class LLMClient {\n    constructor() {\n        this.ready = true;\n    }\n\n    static DEFAULT_PROMPTS = {\n        chat: `Hello\nWorld`,\n        chat_fallback: \"Quick fallback line\"\n\n    };\n\n    static other() {\n        return { a: 1 };\n    }\n}\n"
    );
}

#[test]
fn test_all_prompts_in_definition_order() {
    let root = project();
    for name in ["refine_no_chat", "refine", "chat_fallback", "chat", "optimize"] {
        write_prompt(
            root.path(),
            &format!("{}.md", name),
            &format!("---\nname: {}\ndescription: test\n---\n{} body\n", name, name),
        );
    }

    cli(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Updated 5 prompts: optimize, chat, chat_fallback, refine, refine_no_chat",
        ));

    let written = target(root.path());
    let optimize = written.find("optimize: \"optimize body\"").unwrap();
    let refine_no_chat = written.find("refine_no_chat: \"refine_no_chat body\"").unwrap();
    assert!(optimize < refine_no_chat);
}

#[test]
fn test_no_prompts_leaves_target_untouched() {
    let root = project();

    cli(root.path())
        .assert()
        .failure()
        .code(1)
        .stderr("Error: No prompts loaded\n");

    assert_eq!(target(root.path()), TARGET);
}

#[test]
fn test_missing_block_leaves_target_untouched() {
    let root = project();
    let original = "export const api = {};\n";
    fs::write(root.path().join("js/api.js"), original).unwrap();
    write_prompt(root.path(), "chat.md", "Hello");

    cli(root.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Could not find DEFAULT_PROMPTS block in api.js",
        ));

    assert_eq!(target(root.path()), original);
}

#[test]
fn test_missing_prompts_directory() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("js")).unwrap();
    fs::write(root.path().join("js/api.js"), TARGET).unwrap();

    cli(root.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Prompts directory not found"));
}

#[test]
fn test_missing_target_file() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("docs/prompts")).unwrap();

    cli(root.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: api.js not found"));
}

#[test]
fn test_escaping_survives_splice() {
    let root = project();
    write_prompt(
        root.path(),
        "optimize.md",
        "---\nname: optimize\n---\nUse `code` and ${var}\nPath C:\\tmp\n",
    );

    cli(root.path()).assert().success();

    assert!(target(root.path())
        .contains("        optimize: `Use \\`code\\` and \\${var}\nPath C:\\\\tmp`"));
}

#[test]
fn test_block_indented_deeper_keeps_surrounding_text() {
    let root = project();
    let nested = "export const api = {\n    client: class {\n        static DEFAULT_PROMPTS = {\n            old: \"x\"\n        };\n    },\n};\n";
    fs::write(root.path().join("js/api.js"), nested).unwrap();
    write_prompt(root.path(), "refine.md", "Refine");

    cli(root.path()).assert().success();

    assert_eq!(
        target(root.path()),
        "export const api = {\n    client: class {\n        static DEFAULT_PROMPTS = {\n        refine: \"Refine\"\n\n    };\n    },\n};\n"
    );
}

#[test]
fn test_dry_run_prints_block() {
    let root = project();
    write_prompt(root.path(), "refine.md", "Refine the prompt");

    cli(root.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "    static DEFAULT_PROMPTS = {\n        refine: \"Refine the prompt\"\n\n    };",
        ))
        .stdout(predicate::str::contains("Dry run: api.js not written"));

    assert_eq!(target(root.path()), TARGET);
}

#[test]
fn test_json_summary() {
    let root = project();
    write_prompt(root.path(), "chat.md", "Hi");

    let output = cli(root.path()).arg("--json").output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["updated"], serde_json::json!(["chat"]));
    assert_eq!(report["written"], serde_json::json!(true));
    assert_eq!(report["skipped"].as_array().unwrap().len(), 4);
}

#[test]
fn test_config_file_overrides_paths() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("prompts")).unwrap();
    fs::create_dir_all(root.path().join("web")).unwrap();
    fs::write(root.path().join("web/client.js"), TARGET).unwrap();
    fs::write(root.path().join("prompts/chat.md"), "Hi").unwrap();
    fs::write(
        root.path().join("promptsync.yaml"),
        "promptsDir: prompts\ntarget: web/client.js\n",
    )
    .unwrap();

    cli(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully updated DEFAULT_PROMPTS in client.js",
        ));

    assert!(fs::read_to_string(root.path().join("web/client.js"))
        .unwrap()
        .contains("chat: \"Hi\""));
}
