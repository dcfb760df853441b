use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use colored::Colorize;
use log::*;

use sequencer::{CommandError, Simulation, StepOutcome, StepReport};

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Clone, Subcommand)]
enum CliCommand {
    /// Run the interactive flight console [default]
    Fly {
        #[clap(long, help = "Print step reports as JSON lines")]
        json: bool,
    },
    /// Fly a canned full mission without operator input
    Demo {
        #[clap(long, help = "Print step reports as JSON lines")]
        json: bool,
    },
}

fn print_reports(reports: &[StepReport], json: bool) {
    for report in reports {
        if json {
            match serde_json::to_string(report) {
                Ok(line) => println!("{}", line),
                Err(e) => error!("failed to serialize step report: {}", e),
            }
        } else {
            println!("{}", report.snapshot);
        }
    }

    match reports.last().map(|r| r.outcome) {
        Some(StepOutcome::FuelExhausted) => {
            println!("{}", "Mission failed due to insufficient fuel.".red().bold());
        }
        Some(StepOutcome::OrbitAchieved) => {
            println!("{}", "Orbit achieved! Mission successful.".green().bold());
        }
        _ => {}
    }
}

fn reject(error: CommandError) {
    println!("{}", error.to_string().yellow());
}

/// The original console always begins the burn before fast-forwarding, so a
/// fast_forward straight from the pad gets rejected by both entry points.
fn fast_forward(sim: &mut Simulation, seconds: u32, json: bool) {
    match sim.launch() {
        Ok(reports) => print_reports(&reports, json),
        Err(e) => reject(e),
    }
    match sim.advance(seconds) {
        Ok(reports) => print_reports(&reports, json),
        Err(e) => reject(e),
    }
}

fn fly(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    info!("starting interactive flight console");

    let mut sim = Simulation::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("Welcome to the rocket launch simulator.");
    println!("Commands: start_checks, launch, fast_forward <seconds>, exit");

    let mut line = String::new();
    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF, e.g. the end of piped input
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            None => continue,
            Some("exit") => {
                println!("Exiting the simulator.");
                break;
            }
            Some("start_checks") => match sim.begin_checks() {
                Ok(()) => println!("{}", "All systems are go for launch.".green()),
                Err(e) => reject(e),
            },
            Some("launch") => match sim.launch() {
                Ok(reports) => print_reports(&reports, json),
                Err(e) => reject(e),
            },
            Some("fast_forward") => match parts.next() {
                Some(arg) => match arg.parse::<u32>() {
                    Ok(seconds) if seconds > 0 => fast_forward(&mut sim, seconds, json),
                    _ => println!("Invalid input. Please enter a positive number of seconds."),
                },
                None => println!("Usage: fast_forward <seconds>"),
            },
            Some(other) => {
                println!("Unknown command: {}", other);
                println!("Commands: start_checks, launch, fast_forward <seconds>, exit");
            }
        }
    }

    Ok(())
}

fn demo(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = Simulation::new();
    sim.begin_checks()?;
    info!("pre-launch checks complete, starting burn");
    let reports = sim.launch()?;
    print_reports(&reports, json);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new().filter_level(LevelFilter::Info).parse_default_env().init();

    let args = Cli::parse();
    match args.command.unwrap_or(CliCommand::Fly { json: false }) {
        CliCommand::Fly { json } => fly(json),
        CliCommand::Demo { json } => demo(json),
    }
}
