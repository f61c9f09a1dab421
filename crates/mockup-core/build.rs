// File: crates/mockup-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry lookups (RegOpenKeyExW, RegQueryInfoKeyW) used by the font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
