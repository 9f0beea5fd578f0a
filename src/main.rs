mod cli;
mod errors;
mod logging;
mod runner;
mod scaffold;
mod tree;

fn main() -> anyhow::Result<()> {
    logging::init();
    let app = cli::parse();
    runner::run(app)
}
