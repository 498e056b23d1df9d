//! Configuration setup command.
//!
//! Runs the interactive wizard that chooses the database file, saves
//! `config.json` and creates the schema in the chosen database right away.

use crate::{
    db::db::DbConnection,
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the saved configuration instead of creating a new one
    ///
    /// The database file itself is left in place.
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_info!(Message::ConfigNotFound);
        }
        return Ok(());
    }

    let config = Config::init()?;
    config.save()?;
    DbConnection::open(config.database_path()?)?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
