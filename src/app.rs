use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        config,
        json,
        verbose,
        command,
    } = cli;

    logging::init(verbose);
    let ctx = AppContext::bootstrap(config, json, verbose)?;

    match command {
        Command::Render(args) => commands::render::run(&ctx, args),
        Command::Preview(args) => commands::preview::run(&ctx, args),
        Command::Watch(args) => commands::watch::run(&ctx, args).await,
        Command::Samples => commands::samples::run(&ctx),
        Command::Presets => commands::presets::run(&ctx),
        Command::Config(args) => commands::config::run(&ctx, args.command),
    }
}
