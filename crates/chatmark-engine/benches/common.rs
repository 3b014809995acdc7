// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_reply(paragraphs: usize) -> String {
    let base = "Here is **the answer** you asked for, with __some emphasis__ and `inline code`.\n\n```\nfn example() {\n    println!(\"Привет 👋\");\n}\n```\n\n~~Outdated~~ notes follow.\n\n";
    base.repeat(paragraphs)
}

#[allow(dead_code)]
pub fn generate_broken_markup(repeats: usize) -> String {
    "**open __never ~~closed `code** and __more ".repeat(repeats)
}
