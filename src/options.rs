use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;
use structopt::StructOpt;

const NAME: &str = "resolute";

const ABOUT: &str = "
resolute decides whether queries follow from a knowledge base of
first-order clauses, by refutation resolution.
Answers are written one per line, TRUE or FALSE, in query order.
";

fn parse_time_limit(seconds: &str) -> Result<Duration, String> {
    let seconds: f64 = seconds
        .parse()
        .map_err(|_| format!("{}: not a number of seconds", seconds))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("{}: not a valid time limit", seconds));
    }
    Ok(Duration::from_secs_f64(seconds))
}

#[derive(StructOpt)]
#[structopt(name = NAME, author, about = ABOUT)]
pub struct Options {
    #[structopt(
        parse(from_os_str),
        help = "path to input problem, or - for stdin"
    )]
    pub path: PathBuf,

    #[structopt(
        long,
        parse(from_os_str),
        help = "write answers here instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[structopt(
        long,
        help = "seconds to spend on each query",
        default_value = "20",
        parse(try_from_str = parse_time_limit)
    )]
    pub time_limit: Duration,

    #[structopt(long, help = "only log warnings and errors")]
    pub quiet: bool,
}

impl Options {
    pub fn parse() -> Self {
        Self::from_args()
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}
