//! Stamps the binary with its source revision and build date for the
//! startup log line.

use std::process::Command;

fn git_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=10"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_owned()).filter(|r| !r.is_empty())
}

fn main() {
    let revision = git_revision().unwrap_or_else(|| "untracked".to_owned());
    let built_on = chrono::Utc::now().format("%Y-%m-%d").to_string();

    println!("cargo:rustc-env=SENTINEL_REVISION={revision}");
    println!("cargo:rustc-env=SENTINEL_BUILT_ON={built_on}");
    println!("cargo:rerun-if-changed=build.rs");
}
