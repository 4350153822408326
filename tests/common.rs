#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tfy() -> Command {
    cargo_bin_cmd!("tableify")
}

/// Path of a config file inside the temp dir that is guaranteed not to exist,
/// so tests never pick up the user's own configuration.
pub fn no_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tableify.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp file and return its path
pub fn temp_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_input.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write temp input");
    p
}
