fn main() {
    // Stamp BUILD_DATE once per build script run, not on every source edit
    println!("cargo:rerun-if-changed=build.rs");
    let build_date = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
}
