// File: crates/vitals-chart-skia/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs (registry access).

fn main() {
    // CARGO_CFG_TARGET_OS reflects the target, not the host running this script.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
