use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn describe_cmd() -> Command {
    Command::cargo_bin("enum-describe").expect("binary exists")
}

fn write_sources(root: &Path) {
    fs::create_dir_all(root.join("net")).unwrap();
    fs::write(root.join("lib.rs"), "pub mod net;").unwrap();
    fs::write(
        root.join("net/mod.rs"),
        r#"
        #[describe_enum]
        #[repr(u8)]
        pub enum Protocol {
            Tcp = 6,
            #[description("User Datagram Protocol")]
            Udp = 17,
        }
        "#,
    )
    .unwrap();
}

#[test]
fn help_lists_options() {
    describe_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--out"));
}

#[test]
fn requires_out_without_dry_run() {
    let src = TempDir::new().unwrap();
    write_sources(src.path());

    describe_cmd()
        .arg(src.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--out"));
}

#[test]
fn dry_run_prints_units() {
    let src = TempDir::new().unwrap();
    write_sources(src.path());

    describe_cmd()
        .arg(src.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== enum_describe.rs ==="))
        .stdout(predicate::str::contains("=== net.Protocol.rs ==="))
        .stdout(predicate::str::contains("\"User Datagram Protocol\""))
        .stdout(predicate::str::contains("impl crate::net::Protocol"));
}

#[test]
fn writes_units_to_out_dir() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_sources(src.path());

    describe_cmd()
        .arg(src.path())
        .arg("--out")
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Described 1 enum(s)"));

    let index = fs::read_to_string(out.path().join("enum_describe.rs")).unwrap();
    assert!(index.contains(r#"include!("net.Protocol.rs");"#));
    assert!(out.path().join("net.Protocol.rs").exists());
}

#[test]
fn manifest_renames_index_unit() {
    let src = TempDir::new().unwrap();
    write_sources(src.path());
    let manifest = src.path().join("Cargo.toml");
    fs::write(
        &manifest,
        "[package]\nname = \"host\"\nversion = \"0.1.0\"\n\n[package.metadata.enum-describe]\nindex-name = \"descriptions.rs\"\n",
    )
    .unwrap();

    describe_cmd()
        .arg(src.path())
        .arg("--dry-run")
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== descriptions.rs ==="));
}

#[test]
fn marker_flag_is_rejected() {
    let src = TempDir::new().unwrap();
    write_sources(src.path());

    describe_cmd()
        .arg(src.path())
        .args(["--dry-run", "--marker", "labelled"])
        .assert()
        .failure();
}

#[test]
fn private_enum_is_reported() {
    let src = TempDir::new().unwrap();
    fs::write(src.path().join("lib.rs"), "mod hidden;").unwrap();
    fs::write(
        src.path().join("hidden.rs"),
        r#"#[describe_enum] enum Hidden { A, #[description("bee")] B }"#,
    )
    .unwrap();

    describe_cmd()
        .arg(src.path())
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("`Hidden` is not visible from the crate root"));
}

#[test]
fn binary_sources_are_not_scanned() {
    let src = TempDir::new().unwrap();
    write_sources(src.path());
    fs::create_dir_all(src.path().join("bin")).unwrap();
    fs::write(
        src.path().join("bin/tool.rs"),
        "mod modes { #[describe_enum] pub enum Mode { Fast } } fn main() {}",
    )
    .unwrap();

    describe_cmd()
        .arg(src.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode").not());
}

#[test]
fn crate_root_enum_fails_without_output() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(
        src.path().join("lib.rs"),
        "#[describe_enum] pub enum Root { A }",
    )
    .unwrap();

    describe_cmd()
        .arg(src.path())
        .arg("--out")
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Can not find namespace of Root"));

    assert!(!out.path().join("enum_describe.rs").exists());
}
