//! Build script - adds the esp-hal linker script for firmware builds.
//!
//! Host builds (`cargo test --lib`) do not enable `embedded` and get no
//! extra link arguments.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if env::var_os("CARGO_FEATURE_EMBEDDED").is_none() {
        return;
    }

    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    // Make sure linkall.x is the last linker script.
    println!("cargo:rustc-link-arg-bins=-Tlinkall.x");
}
