mod cli;

use cli::commands::Command;
use cli::Hanoi;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Hanoi::from_args().execute();
}
