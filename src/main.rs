use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::io;
use supernets::config::Config;
use supernets::logging::init_logging;
use supernets::SupernetError;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::parse();
    init_logging(&config.log_config, config.verbose)?;
    log::info!("#Start main()");

    let stdout = io::stdout();
    let stderr = io::stderr();
    match supernets::run(&config, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(summary) => {
            log::info!(
                "#End main() {} networks written, {} lines rejected",
                summary.written,
                summary.rejected
            );
            Ok(())
        }
        Err(SupernetError::InputUnavailable { path, source }) => {
            log::error!("Unable to read {}: {source}", path.display());
            eprintln!("{}", "File not found, goodbye!".red());
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
