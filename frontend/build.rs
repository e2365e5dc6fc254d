// Desktop builds on Linux link against libxdo; fail early with an install hint.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let desktop = std::env::var_os("CARGO_FEATURE_DESKTOP").is_some();
    let linux = std::env::var("CARGO_CFG_TARGET_OS").is_ok_and(|os| os == "linux");
    if desktop && linux && !has_libxdo() {
        println!("cargo:warning=libxdo not found (Debian: libxdo-dev, Fedora: libxdo-devel)");
        std::process::exit(1);
    }
}

/// Some distros ship libxdo without a pkg-config file, so fall back to the linker cache.
fn has_libxdo() -> bool {
    let pkg_config = Command::new("pkg-config")
        .args(["--exists", "libxdo"])
        .status()
        .is_ok_and(|s| s.success());
    pkg_config
        || Command::new("ldconfig")
            .arg("-p")
            .output()
            .is_ok_and(|o| String::from_utf8_lossy(&o.stdout).contains("libxdo.so"))
}
