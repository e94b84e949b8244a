use anyhow::Result;
use clap::{App as Cli, Arg};
use log::LevelFilter;
use widget_dash::{app::App, config::Config, logger};

fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml (defaults to ~/.config/widget-dash)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Capture debug logs in the log panel"),
        )
        .get_matches();

    let level = if matches.is_present("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log = logger::init(level)?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    App::start(config, log)
}
