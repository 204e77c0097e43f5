use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(args: &[&str], config_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vscode-installer"))
        .args(args)
        .env("VSCODE_INSTALLER_CONFIG", config_dir.join("absent.json"))
        .output()
        .expect("failed to run vscode-installer")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn unknown_action_exits_with_one() {
    let temp = TempDir::new().unwrap();
    let output = run(&["--action=foo"], temp.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid action: foo"));
    assert!(!stdout(&output).contains("Downloading"));
}

#[test]
fn help_main_section_only() {
    let temp = TempDir::new().unwrap();
    let output = run(&["--help", "--section=main"], temp.path());

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.starts_with("main\n  --action, -a: (default: download)\n"));
    assert!(!text.contains("--build"));
    assert!(!text.contains("All sections:"));
}

#[test]
fn help_defaults_to_all_sections() {
    let temp = TempDir::new().unwrap();
    let output = run(&["-a", "help"], temp.path());

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.starts_with("All sections:"));
    for heading in ["\nsections\n", "\nmain\n", "\ndownload\n", "\ninstall\n", "\nlink\n"] {
        assert!(text.contains(heading), "missing {heading:?}");
    }
}

#[test]
fn help_with_unknown_section_fails() {
    let temp = TempDir::new().unwrap();
    let output = run(&["--help", "--section=bogus"], temp.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid section: bogus"));
}

#[test]
fn install_without_file_fails() {
    let temp = TempDir::new().unwrap();
    let output = run(&["--install", "-d", temp.path().to_str().unwrap()], temp.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Missing file"));
}

#[test]
fn download_with_invalid_build_fails() {
    let temp = TempDir::new().unwrap();
    let output = run(
        &["--download", "--build", "nightly", "-d", temp.path().to_str().unwrap()],
        temp.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid build: nightly"));
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn link_with_missing_bin_dir_fails_the_same_way_twice() {
    let temp = TempDir::new().unwrap();
    let install_dir = temp.path().join("code");
    let symlink_dir = temp.path().join("links");
    std::fs::create_dir(&symlink_dir).unwrap();

    let args = [
        "--link",
        "-d",
        install_dir.to_str().unwrap(),
        "-s",
        symlink_dir.to_str().unwrap(),
    ];
    let first = run(&args, temp.path());
    let second = run(&args, temp.path());

    assert_eq!(first.status.code(), Some(1));
    assert_eq!(second.status.code(), Some(1));
    assert_eq!(stderr(&first), stderr(&second));
    assert!(stderr(&first).contains("does not exist"));
    assert_eq!(std::fs::read_dir(&symlink_dir).unwrap().count(), 0);
}

#[test]
fn malformed_settings_file_fails() {
    let temp = TempDir::new().unwrap();
    let settings = temp.path().join("settings.json");
    std::fs::write(&settings, "{ not json").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_vscode-installer"))
        .args(["--install", "-f", "missing.tar.gz"])
        .env("VSCODE_INSTALLER_CONFIG", &settings)
        .output()
        .expect("failed to run vscode-installer");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Configuration error"));
}
