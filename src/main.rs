use log::debug;
use std::process;
use word_tally::{generate_report, Cli, CliCommand};

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let result = Cli::try_parse_args(std::env::args_os()).and_then(|command| match command {
        CliCommand::ShowUsage(usage) => Ok(usage),
        CliCommand::Run { input, config } => generate_report(&input, &config),
    });

    match result {
        Ok(output) => print!("{}", output),
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
