mod app;
mod args;
mod audio;
mod command;
mod config;
mod consts;
mod game;
mod theme;
mod ui;
mod util;
use crate::app::App;
use crate::args::{Action, Arguments, USAGE};
use crate::audio::Speaker;
use crate::config::Config;
use crate::game::Game;
use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Action::from_env() {
        Ok(Action::Run(args)) => args,
        Ok(Action::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(Action::Version) => {
            println!("colorsnake {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("colorsnake: {e}");
            return ExitCode::from(2);
        }
    };
    anyhow_exit(run(args))
}

fn run(args: Arguments) -> anyhow::Result<()> {
    if let Some(ref path) = args.log_file {
        let file = fs_err::File::create(path)?;
        WriteLogger::init(args.log_level, simplelog::Config::default(), file)
            .context("failed to initialize logging")?;
    }
    log::info!("Starting colorsnake {}", env!("CARGO_PKG_VERSION"));
    let config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::load(&Config::default_path()?, true),
    }
    .context("failed to load configuration")?;
    log::debug!("Using configuration: {config:?}");
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let game = Game::new(config.game.rules, config.display.theme, rng)
        .context("failed to set up the game")?;
    let app = App::new(
        game,
        Speaker::new(config.display.bell),
        config.display.sprites,
        config.game.tick_period,
    );
    let terminal = ratatui::init();
    let r = app.run(terminal);
    ratatui::restore();
    r
}

fn anyhow_exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.chain()
                .filter_map(|c| c.downcast_ref::<io::Error>())
                .any(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("colorsnake: {e:#}");
            ExitCode::from(2)
        }
    }
}
