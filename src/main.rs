use clap::Parser;
use cfgaccess::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
