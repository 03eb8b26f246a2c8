#![allow(clippy::unwrap_used, clippy::panic)]

mod common;

use common::{DONE, SKIP, Sandbox, lines, read};

#[test]
fn apply_copies_file_into_home() {
    let sandbox = Sandbox::new();
    sandbox.write_fragments("[t1]\ntargets = [{ src = \"~/.testrc\" }]\n");
    sandbox.write_repo("fragments/t1/.testrc", "stored");

    let home = sandbox.home().display().to_string();
    assert_eq!(
        sandbox.run(&["--apply"]),
        lines(&[
            "Performing apply for t1 fragments.",
            "",
            "Processing fragment t1.",
            &format!("Copying \"./fragments/t1/.testrc\" to \"{home}/.testrc\" {DONE}."),
            &format!("Finished processing fragment t1 {DONE}."),
        ])
    );
    assert_eq!(read(&sandbox.home_path(".testrc")), "stored");
}

#[test]
fn apply_overwrites_existing_file() {
    let sandbox = Sandbox::new();
    sandbox.write_fragments("[t1]\ntargets = [{ src = \"~/.testrc\" }]\n");
    sandbox.write_repo("fragments/t1/.testrc", "stored");
    sandbox.write_home(".testrc", "local");

    sandbox.run(&["--apply"]);
    assert_eq!(read(&sandbox.home_path(".testrc")), "stored");
}

#[test]
fn apply_directory_with_subdir_creates_parents() {
    let sandbox = Sandbox::new();
    sandbox.write_fragments(
        "[nvim]\ntargets = [{ src = \"~/.config/nvim\", dir = \"dotconfig\" }]\n",
    );
    sandbox.write_repo("fragments/nvim/dotconfig/nvim/init.lua", "lua");
    sandbox.write_repo("fragments/nvim/dotconfig/nvim/lua/plugins.lua", "plugins");
    sandbox.write_home(".config/nvim/local.lua", "local");

    let home = sandbox.home().display().to_string();
    assert_eq!(
        sandbox.run(&["--apply"]),
        lines(&[
            "Performing apply for nvim fragments.",
            "",
            "Processing fragment nvim.",
            &format!(
                "Copying \"./fragments/nvim/dotconfig/nvim\" to \"{home}/.config/nvim\" {DONE}."
            ),
            &format!("Finished processing fragment nvim {DONE}."),
        ])
    );

    assert_eq!(read(&sandbox.home_path(".config/nvim/init.lua")), "lua");
    assert_eq!(
        read(&sandbox.home_path(".config/nvim/lua/plugins.lua")),
        "plugins"
    );
    assert_eq!(read(&sandbox.home_path(".config/nvim/local.lua")), "local");
}

#[test]
fn apply_missing_repository_entry_is_skipped() {
    let sandbox = Sandbox::new();
    sandbox.write_fragments("[t1]\ntargets = [{ src = \"~/.testrc\" }]\n");

    let home = sandbox.home().display().to_string();
    assert_eq!(
        sandbox.run(&["--apply"]),
        lines(&[
            "Performing apply for t1 fragments.",
            "",
            "Processing fragment t1.",
            &format!("Copying \"./fragments/t1/.testrc\" to \"{home}/.testrc\" {SKIP}."),
            &format!("Finished processing fragment t1 {DONE}."),
        ])
    );
    assert!(!sandbox.home_path(".testrc").exists());
}

#[test]
fn apply_selected_fragments_only() {
    let sandbox = Sandbox::new();
    sandbox.write_fragments(
        r#"
[a]
targets = [{ src = "~/.a" }]

[b]
targets = [{ src = "~/.b" }]

[c]
targets = [{ src = "~/.c" }]
"#,
    );
    for name in ["a", "b", "c"] {
        sandbox.write_repo(&format!("fragments/{name}/.{name}"), name);
    }

    let stdout = sandbox.run(&["--apply", "--select", "c, a"]);

    assert!(stdout.starts_with("Performing apply for a, c fragments.\n"));
    assert!(sandbox.home_path(".a").exists());
    assert!(!sandbox.home_path(".b").exists());
    assert!(sandbox.home_path(".c").exists());
}

#[test]
fn apply_without_icons() {
    let sandbox = Sandbox::new();
    sandbox.write_fragments("[t1]\ntargets = [{ src = \"~/.testrc\" }]\n");
    sandbox.write_repo("fragments/t1/.testrc", "stored");

    let home = sandbox.home().display().to_string();
    assert_eq!(
        sandbox.run(&["--apply", "--icons", "never"]),
        lines(&[
            "Performing apply for t1 fragments.",
            "",
            "Processing fragment t1.",
            &format!("Copying \"./fragments/t1/.testrc\" to \"{home}/.testrc\" [DONE]."),
            "Finished processing fragment t1 [DONE].",
        ])
    );
}

#[test]
fn apply_icons_auto_is_plain_when_piped() {
    let sandbox = Sandbox::new();
    sandbox.write_fragments("[t1]\ntargets = []\n");

    let assert = sandbox
        .command()
        .env("NASTRAJACZ_ICONS", "auto")
        .arg("--apply")
        .output()
        .unwrap();

    let stdout = String::from_utf8(assert.stdout).unwrap();
    assert!(stdout.contains("Finished processing fragment t1 [DONE]."));
}

#[test]
fn apply_twice_is_idempotent() {
    let sandbox = Sandbox::new();
    sandbox.write_fragments(
        "[app]\ntargets = [{ src = \"~/.apprc\" }, { src = \"~/.config/app\" }]\n",
    );
    sandbox.write_repo("fragments/app/.apprc", "rc");
    sandbox.write_repo("fragments/app/app/app.conf", "conf");

    let first = sandbox.run(&["--apply"]);
    let second = sandbox.run(&["--apply"]);

    assert_eq!(first, second);
    assert_eq!(read(&sandbox.home_path(".apprc")), "rc");
    assert_eq!(read(&sandbox.home_path(".config/app/app.conf")), "conf");
}
