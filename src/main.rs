#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use crate::command::{check, render};
use argh::FromArgs;
use keycloak_webserver_auth::configuration::Configuration;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

mod command;

fn set_tracing() {
    // stdout carries rendered settings, logs go to stderr
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

#[derive(FromArgs, PartialEq, Debug)]
/// Keycloak OAuth settings for the workflow scheduler web front-end
struct GlobalArguments {
    #[argh(subcommand)]
    subcommand: SubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
enum SubCommand {
    Check(check::Options),
    Render(render::Options),
}

fn main() -> Result<(), command::Error> {
    let cli_args: GlobalArguments = argh::from_env();

    set_tracing();

    let config = Configuration::load();

    match cli_args.subcommand {
        SubCommand::Check(options) => check::Command::new(&options, &config).run(),
        SubCommand::Render(options) => render::Command::new(&options, &config).run(),
    }
}
