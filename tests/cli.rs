//! Startup failures of the binary. Neither path reaches window creation.

use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gem-overlay"))
}

#[test]
fn missing_argument_prints_usage_and_fails() {
    let output = binary().output().unwrap();

    assert_eq!(output.status.code(), Some(255));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Please specify the image file name"),
        "stdout: {stdout}"
    );
}

#[test]
fn unreadable_image_names_the_path_and_fails() {
    let path = std::env::temp_dir().join(format!("gem-overlay-cli-{}.png", std::process::id()));
    std::fs::write(&path, b"not an image").unwrap();

    let output = binary().arg(&path).output().unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(255));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unable to read image:"), "stdout: {stdout}");
    assert!(stdout.contains(&path.display().to_string()), "stdout: {stdout}");
}
