fn main() {
    // Tell cargo to recompile when the editor assets change.
    // The include_dir! macro embeds web/ at compile time, but cargo
    // doesn't track non-Rust files automatically.
    println!("cargo:rerun-if-changed=web");
}
