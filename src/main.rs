use projects::{
    commands::Cli,
    libs::{logging, messages::Message},
    msg_error,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    logging::init();

    match Cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(Message::CommandFailed(format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}
