use lexopt::{Arg, Parser, ValueExt};
use simplelog::LevelFilter;
use std::path::PathBuf;

/// What the user asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Action {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Arguments {
    /// Configuration file given on the command line, if any
    pub(crate) config: Option<PathBuf>,

    /// File to write log messages to; logging is disabled if not set
    pub(crate) log_file: Option<PathBuf>,

    pub(crate) log_level: LevelFilter,

    /// Seed for the random number generator, for reproducible games
    pub(crate) seed: Option<u64>,
}

impl Default for Arguments {
    fn default() -> Arguments {
        Arguments {
            config: None,
            log_file: None,
            log_level: LevelFilter::Info,
            seed: None,
        }
    }
}

impl Action {
    pub(crate) fn from_env() -> Result<Action, lexopt::Error> {
        Action::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Action, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-level") => {
                    args.log_level = parser.value()?.parse()?;
                }
                Arg::Long("seed") => {
                    args.seed = Some(parser.value()?.parse()?);
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Action::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Action::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Action::Run(args))
    }

    #[cfg(test)]
    fn from_args<I: IntoIterator<Item = &'static str>>(args: I) -> Result<Action, lexopt::Error> {
        Action::from_parser(Parser::from_args(args))
    }
}

pub(crate) const USAGE: &str = "\
Usage: colorsnake [<options>]

Play snake in the terminal.  Eat the apple and the banana, avoid the bomb, and
don't run into yourself.

Options:
  -c, --config <FILE>    Read configuration from <FILE>
      --log <FILE>       Write log messages to <FILE>
      --log-level <LVL>  Minimum level of log messages to write [default: info]
      --seed <N>         Seed the random number generator with <N>
  -h, --help             Show this help and exit
  -V, --version          Show the program version and exit

Keys:
  Arrows/wasd/hjkl  Steer
  t                 Change theme
  Space/Enter/r     Restart after game over
  Esc/q/Ctrl-C      Quit
";
