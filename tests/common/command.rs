use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::{ChildPath, FileWriteStr, PathChild};
use rstest::fixture;

/// Start instant used for every pinned run
pub const PINNED_DATE: &str = "2023-01-01 12:00:00 +0000";

#[fixture]
pub fn script_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// Write `lines` as a script file inside `dir`
pub fn write_script(dir: &TempDir, lines: &[&str]) -> ChildPath {
    let script = dir.child("history.script");
    let mut content = lines.join("\n");
    content.push('\n');
    script
        .write_str(&content)
        .expect("Failed to write script file");
    script
}

/// minigit command with the session clock pinned to `PINNED_DATE`
pub fn run_minigit_command(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("minigit").expect("Failed to find minigit binary");
    cmd.env("MINIGIT_DATE", PINNED_DATE);
    cmd.env_remove("MINIGIT_CLOCK_STEP_MS");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run a script file through `minigit run`
pub fn run_script(dir: &TempDir, lines: &[&str]) -> Command {
    let script = write_script(dir, lines);
    let path = script.path().display().to_string();
    run_minigit_command(&["run", &path])
}

/// Stdout of a successful script run
pub fn script_output(dir: &TempDir, lines: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_script(dir, lines).assert().success();
    Ok(String::from_utf8(output.get_output().stdout.clone())?)
}
