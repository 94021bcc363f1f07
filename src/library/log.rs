use std::fmt;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode, WriteLogger};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    #[default]
    None,
    Console,
    FileOnly,
    Both,
}

impl LogMode {
    pub fn writes_file(self) -> bool {
        matches!(self, LogMode::FileOnly | LogMode::Both)
    }
}

impl FromStr for LogMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(LogMode::None),
            "console" => Ok(LogMode::Console),
            "both" => Ok(LogMode::Both),
            "file" => Ok(LogMode::FileOnly),
            _ => Err(format!(
                "Invalid value for --log: {} (use: none, file, console, both)",
                s
            )),
        }
    }
}

impl fmt::Display for LogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogMode::None => "none",
            LogMode::Console => "console",
            LogMode::FileOnly => "file",
            LogMode::Both => "both",
        };
        write!(f, "{}", name)
    }
}

/// Initializes logging: console, file, or both.
/// The file logger is only installed when `log_file` is given.
pub fn init_logging(mode: LogMode, log_file: Option<&Path>) {
    if mode == LogMode::None {
        return;
    }

    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();

    if matches!(mode, LogMode::Console | LogMode::Both) {
        // Diagnostics go to stderr so stdout only carries the version lines.
        loggers.push(TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    if mode.writes_file() {
        if let Some(p) = log_file {
            match File::create(p) {
                Ok(file) => loggers.push(WriteLogger::new(LevelFilter::Info, Config::default(), file)),
                Err(e) => eprintln!("Failed to create log file at {:?}: {}", p, e),
            }
        }
    }

    if let Err(e) = CombinedLogger::init(loggers) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}
