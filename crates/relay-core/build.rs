//! Build script for relay-core.
//!
//! Bakes the installation layout into the crate as compile-time environment
//! variables:
//!
//! - `RELAY_EXEC_PATH_DEFAULT` - directory holding `relay-*` helpers
//! - `RELAY_BINDIR_DEFAULT` - directory holding the `relay` binary
//! - `RELAY_PATH_MODE_DEFAULT` - `fixed` or `relocatable`
//!
//! Packagers control them with `RELAY_BUILD_EXEC_PATH`, `RELAY_BUILD_BINDIR`
//! and `RELAY_BUILD_RUNTIME_PREFIX`.

use std::env;

const FIXED_EXEC_PATH: &str = "/usr/local/libexec/relay-core";
const FIXED_BINDIR: &str = "/usr/local/bin";

// Relocatable builds describe the layout relative to the install prefix
const RELOCATABLE_EXEC_PATH: &str = "libexec/relay-core";
const RELOCATABLE_BINDIR: &str = "bin";

fn main() {
    let relocatable = env::var("RELAY_BUILD_RUNTIME_PREFIX")
        .map(|v| !v.trim().is_empty() && v.trim() != "0")
        .unwrap_or(false);

    let (exec_default, bindir_default) = if relocatable {
        (RELOCATABLE_EXEC_PATH, RELOCATABLE_BINDIR)
    } else {
        (FIXED_EXEC_PATH, FIXED_BINDIR)
    };

    let exec_path = non_empty_var("RELAY_BUILD_EXEC_PATH").unwrap_or_else(|| exec_default.to_string());
    let bindir = non_empty_var("RELAY_BUILD_BINDIR").unwrap_or_else(|| bindir_default.to_string());
    let mode = if relocatable { "relocatable" } else { "fixed" };

    println!("cargo:rustc-env=RELAY_EXEC_PATH_DEFAULT={exec_path}");
    println!("cargo:rustc-env=RELAY_BINDIR_DEFAULT={bindir}");
    println!("cargo:rustc-env=RELAY_PATH_MODE_DEFAULT={mode}");

    println!("cargo:rerun-if-env-changed=RELAY_BUILD_EXEC_PATH");
    println!("cargo:rerun-if-env-changed=RELAY_BUILD_BINDIR");
    println!("cargo:rerun-if-env-changed=RELAY_BUILD_RUNTIME_PREFIX");
    println!("cargo:rerun-if-changed=build.rs");
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
