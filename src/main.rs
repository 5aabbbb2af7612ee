#![warn(clippy::if_not_else)]
#![warn(clippy::needless_continue)]
#![warn(clippy::redundant_closure_for_method_calls)]

mod run;

use clap::{load_yaml, App};
use linsys::utils::Config;

fn main() -> anyhow::Result<()> {
    linsys::utils::init_logging()?;

    let yaml = load_yaml!("cli.yml");
    let matches = App::from_yaml(yaml).get_matches();
    let result = run::solve(&get_config(&matches))?;
    print!("{result}");
    Ok(())
}

fn get_config(matches: &clap::ArgMatches<'_>) -> Config {
    Config {
        input: matches.value_of_os("input").map(Into::into),
        json: matches.is_present("json"),
        quiet: matches.is_present("quiet"),
    }
}
