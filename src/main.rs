use log::{error, info};

use genversion::library::log::init_logging;
use genversion::{parse_arguments, run};

fn main() {
    let config = match parse_arguments() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("For more information, try '--help'.");
            std::process::exit(1);
        }
    };

    let log_file = config.log_mode.writes_file().then_some(config.log_path.as_path());
    init_logging(config.log_mode, log_file);
    info!("Configuration: {:?}", config);

    if let Err(e) = run(&config) {
        if config.log_mode.writes_file() {
            error!("{}", e);
        }
        eprintln!("genversion: {}", e);
        std::process::exit(1);
    }
}
