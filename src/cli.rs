use clap::Parser;

/// Zero-argument invocation: the tree definition is compiled in and the
/// root is derived from the binary's own location, so the only surface
/// here is clap's built-in `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(
    name = "treekeep",
    version,
    about = "Materialize the project directory tree and seed .gitkeep markers"
)]
pub struct Cli {}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
