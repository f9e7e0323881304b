#![allow(dead_code)]

pub mod command;

const TMPDIR: &str = "../playground";

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !std::path::Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

/// Split `log` output into its entries, dropping the trailing newline
pub fn log_entries(stdout: &str) -> Vec<String> {
    stdout.lines().map(str::to_string).collect()
}
