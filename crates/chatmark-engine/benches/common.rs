// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat_message(size: usize) -> String {
    let base = "## Answer\n\nUse **cargo** to build and `cargo test` to test.\n\n- Install *rustup* first\n- Read [the book](https://doc.rust-lang.org/book/)\n- Then ***really*** try it\n\nPlain trailing line with no markup at all.\n";
    base.repeat(size)
}

/// Long single line of unbalanced and overlapping delimiters.
#[allow(dead_code)]
pub fn generate_pathological_line(size: usize) -> String {
    "**a*`b[c](d**`*e* ".repeat(size)
}
