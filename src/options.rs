use std::time::Duration;

use lifegrid::FillMode;
use thiserror::Error;

const DEFAULT_SIZE: i32 = 120;
const DEFAULT_PROBABILITY: f64 = 0.1;
const DEFAULT_CONSOLE_SLEEP: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),

    #[error("invalid value \"{value}\" for --{name}")]
    InvalidValue { name: &'static str, value: String },

    #[error("unknown fill mode \"{0}\", expected random, alternating, all or empty")]
    UnknownFill(String),
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    /// Parses the arguments, returning `Ok(None)` once usage has been printed
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, OptionsError> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in console mode");
        opts.optflag("t", "threads", "compute generations on all cores");
        opts.optflag("P", "print", "print the last generation to stdout");
        opts.optopt("n", "size", "set grid dimension (default 120)", "SIZE");
        opts.optopt(
            "p",
            "probability",
            "initial live-cell probability (default 0.1)",
            "P",
        );
        opts.optopt("", "seed", "seed for the random fill", "U64");
        opts.optopt("f", "fill", "random, alternating, all or empty", "TYPE");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifegrid [options]"));
            return Ok(None);
        }

        let args = Self { matches };
        // surface bad values before the simulation starts
        args.size()?;
        args.fill_mode()?;
        args.seed()?;
        args.generations()?;
        args.sleep()?;
        Ok(Some(args))
    }
    pub fn from_env() -> Result<Option<Self>, OptionsError> {
        Self::from_argv(std::env::args())
    }
    /// Parses a full argv, skipping the program name when there is one
    fn from_argv<I: IntoIterator<Item = String>>(argv: I) -> Result<Option<Self>, OptionsError> {
        let args = argv.into_iter().skip(1).collect::<Vec<_>>();
        Self::new(&args)
    }

    fn get<T: std::str::FromStr>(&self, name: &'static str) -> Result<Option<T>, OptionsError> {
        self.matches
            .opt_get(name)
            .map_err(|_| OptionsError::InvalidValue {
                name,
                value: self.matches.opt_str(name).unwrap_or_default(),
            })
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn multithreading(&self) -> bool {
        self.matches.opt_present("threads")
    }
    pub fn print(&self) -> bool {
        self.matches.opt_present("print")
    }

    pub fn size(&self) -> Result<i32, OptionsError> {
        Ok(self.get("size")?.unwrap_or(DEFAULT_SIZE))
    }
    pub fn probability(&self) -> Result<f64, OptionsError> {
        Ok(self.get("probability")?.unwrap_or(DEFAULT_PROBABILITY))
    }
    pub fn seed(&self) -> Result<Option<u64>, OptionsError> {
        self.get("seed")
    }

    pub fn generations(&self) -> Result<u64, OptionsError> {
        // no limit means run until told to stop
        Ok(self.get("gens")?.unwrap_or(u64::MAX))
    }
    pub fn sleep(&self) -> Result<Option<Duration>, OptionsError> {
        Ok(match self.get("sleep")? {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(DEFAULT_CONSOLE_SLEEP),
            None => None,
        })
    }

    pub fn fill_mode(&self) -> Result<FillMode, OptionsError> {
        let mode = self.matches.opt_str("fill");
        let mode = mode.as_deref().unwrap_or("random");
        FillMode::parse(mode, self.probability()?)
            .ok_or_else(|| OptionsError::UnknownFill(mode.to_owned()))
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}
