// File: crates/chart-core/build.rs
// Summary: Link the Windows system libraries Skia's font manager and ICU expect.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, ... used by Skia's font lookup
        println!("cargo:rustc-link-lib=advapi32");
    }
}
