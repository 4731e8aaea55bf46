use tracing::info;

use clap::{value_t, App, Arg};

use zfx_snowdag::settings::Settings;
use zfx_snowdag::simulation;
use zfx_snowdag::Result;

fn main() -> Result<()> {
    let matches = App::new("zfx-snowdag")
        .version("0.1")
        .author("zero.fx labs ltd.")
        .about("Simulates Snowball rounds over a conflict DAG")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("CONFIG")
                .takes_value(true),
        )
        .arg(Arg::with_name("seed").short("s").long("seed").value_name("SEED").takes_value(true))
        .arg(
            Arg::with_name("rounds")
                .short("r")
                .long("rounds")
                .value_name("ROUNDS")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("mode")
                .short("m")
                .long("mode")
                .value_name("MODE")
                .possible_values(&["dag", "snowball", "both"])
                .default_value("both"),
        )
        .arg(Arg::with_name("verbose").short("v").long("verbose"))
        .get_matches();

    let level =
        if matches.is_present("verbose") { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_level(false)
        .with_target(false)
        .without_time()
        .compact()
        .with_max_level(level)
        .init();

    let mut settings = Settings::new(matches.value_of("config"))?;
    if matches.is_present("seed") {
        settings.seed = value_t!(matches.value_of("seed"), u64).unwrap_or_else(|e| e.exit());
    }
    if matches.is_present("rounds") {
        settings.max_rounds =
            value_t!(matches.value_of("rounds"), usize).unwrap_or_else(|e| e.exit());
    }
    info!("settings => {:?}", settings);

    let mode = matches.value_of("mode").unwrap_or("both");
    if mode == "dag" || mode == "both" {
        let report = simulation::run_dag(&settings)?;
        info!("dag => {:?}", report);
    }
    if mode == "snowball" || mode == "both" {
        let report = simulation::run_snowball(&settings)?;
        info!("snowball => {:?}", report);
    }
    Ok(())
}
