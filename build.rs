//! Build script: embeds the version string into the binary.

use std::process::Command;

fn main() {
    // Release pipelines pin the version through UPDATE_DEPENDENT_VERSION;
    // local builds describe the checkout instead.
    if let Ok(version) = std::env::var("UPDATE_DEPENDENT_VERSION") {
        println!("cargo:rustc-env=UPDATE_DEPENDENT_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !version.is_empty() {
            println!("cargo:rustc-env=UPDATE_DEPENDENT_VERSION={version}");
        }
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=UPDATE_DEPENDENT_VERSION");
}
