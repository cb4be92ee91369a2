use std::process::ExitCode;

mod builder;
mod cli;
mod config;
mod front_matter;
mod markdown;
mod minify;
mod scaffold;
mod server;
mod template;
mod utils;

#[tokio::main]
async fn main() -> ExitCode {
    cli::run().await
}
