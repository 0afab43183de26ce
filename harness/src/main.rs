use chrono::Local;
use clap::Parser;
use harness::report::Tally;
use harness::scenario::Scenario;
use log::{LevelFilter, info, warn};
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "run rule scenarios against the engine")]
struct Arguments {
    #[arg(help = "scenario files to run", required = true)]
    files: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let arguments = Arguments::parse();

    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .format(|buf, record| {
            writeln!(
                buf,
                "{style}[{}] [{:5}]{style:#} {}",
                Local::now().format("%T%.3f"),
                record.level(),
                record.args(),
                style = buf.default_level_style(record.level()),
            )
        })
        .init();

    let mut total = Tally::new();

    for file in &arguments.files {
        let text = std::fs::read_to_string(file)?;
        let scenarios = Scenario::parse(&text);

        let mut tally = Tally::new();
        for scenario in &scenarios {
            match scenario.run() {
                Ok(()) => {
                    info!("pass - {}", scenario.name);
                    tally.pass();
                }
                Err(reason) => {
                    warn!("FAIL - {}: {reason}", scenario.name);
                    tally.fail();
                }
            }
        }

        info!("{}: {tally}", file.display());
        total.merge(&tally);
    }

    println!("{total}");
    if !total.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
