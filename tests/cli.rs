//! Integration tests: run the binary against real files.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Write a config that keeps logs inside the test's temp directory.
fn temp_setup(name: &str, document: &str) -> (PathBuf, PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("mdcanvas_cli_{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create temp dir");

    let doc = dir.join("doc.md");
    fs::write(&doc, document).expect("write document");

    let config = dir.join("config.toml");
    let log = dir.join("logs").join("mdcanvas.log");
    fs::write(
        &config,
        format!(
            "log_file_path = {:?}\n\n[images.\"logo.png\"]\nwidth = 1400\nheight = 600\n",
            log.display().to_string()
        ),
    )
    .expect("write config");

    (dir, doc, config)
}

fn mdcanvas(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mdcanvas"))
        .args(args)
        .env_remove("MDCANVAS_CONFIG")
        .env_remove("MDCANVAS_DOCUMENT")
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn binary_prints_version() {
    let output = mdcanvas(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("0.1.0"), "got: {stdout}");
}

#[test]
fn prints_visible_frame() {
    let (dir, doc, config) = temp_setup("frame", "---");

    let output = mdcanvas(&[
        doc.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--width",
        "1000",
        "--height",
        "800",
    ]);
    let _ = fs::remove_dir_all(&dir);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "clear 1000x800 dpr=1\ndivider x=150 y=100 width=700\n"
    );
}

#[test]
fn configured_image_sizes_are_resolved() {
    let (dir, doc, config) = temp_setup("image", "![logo](logo.png)");

    let output = mdcanvas(&[
        doc.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--width",
        "1000",
        "--layout",
    ]);
    let _ = fs::remove_dir_all(&dir);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "image x=150 y=80 width=700 height=300 src=logo.png ready\n"
    );
}

#[test]
fn missing_document_fails_with_message() {
    let (dir, _doc, config) = temp_setup("missing", "");
    let missing = dir.join("nope.md");

    let output = mdcanvas(&[missing.to_str().unwrap(), "--config", config.to_str().unwrap()]);
    let _ = fs::remove_dir_all(&dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.md"), "stderr: {stderr}");
}
