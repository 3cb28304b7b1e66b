//! Version command

/// Run the version command.
pub fn run() {
    println!("talk2api {}", env!("CARGO_PKG_VERSION"));
}
