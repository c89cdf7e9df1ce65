mod args;
mod backend;
mod config;
mod derive;
mod entry;
mod error;
mod logger;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
