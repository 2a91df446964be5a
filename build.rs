//! Injects commit hash and build time for `jokebox --version`.
//!
//! Either value can be pinned through the environment; otherwise it is read
//! from git/date, falling back to "unknown" / unix seconds.

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const GIT_HASH_VAR: &str = "JOKEBOX_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "JOKEBOX_BUILD_TIMESTAMP";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");

    let entries: [(&str, fn() -> String); 2] = [
        (GIT_HASH_VAR, commit_hash),
        (TIMESTAMP_VAR, utc_timestamp),
    ];
    for (var, detect) in entries {
        println!("cargo:rerun-if-env-changed={var}");
        let value = env::var(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(detect);
        println!("cargo:rustc-env={var}={value}");
    }
}

fn commit_hash() -> String {
    command_output("git", &["rev-parse", "--short=12", "HEAD"]).unwrap_or_else(|| "unknown".into())
}

fn utc_timestamp() -> String {
    command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(|| {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        format!("unix:{secs}")
    })
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string()).filter(|t| !t.is_empty())
}
