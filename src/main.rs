use std::io::{self, Write};

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use space_trajectory::core::ballistics::{LaunchParameters, TrajectorySample};
use space_trajectory::core::error::Field;
use space_trajectory::core::input::{LaunchForm, parse_field};
use space_trajectory::core::planet::Planet;
use space_trajectory::core::report::{Annotations, ResultSummary, unsigned_zero};
use space_trajectory::core::session::{SimulationRequest, SimulationResponse, simulate};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "space_trajectory")]
#[command(version, about = "Projectile trajectory under constant gravity", long_about = None)]
struct Cli {
    /// Launch speed (m/s)
    #[arg(short = 'v', long, default_value = "20", allow_hyphen_values = true)]
    velocity: String,

    /// Launch angle (degrees above horizontal)
    #[arg(short = 'a', long, default_value = "45", allow_hyphen_values = true)]
    angle: String,

    /// Launch height (m)
    #[arg(short = 'H', long, default_value = "0", allow_hyphen_values = true)]
    height: String,

    /// Gravity (m/s^2), used when the planet is custom
    #[arg(short = 'g', long, allow_hyphen_values = true)]
    gravity: Option<String>,

    /// earth, moon, mars or custom. Defaults to custom when --gravity is
    /// given, otherwise earth.
    #[arg(short = 'p', long)]
    planet: Option<Planet>,

    /// Prompt for each value on stdin
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Include every trajectory sample in the output
    #[arg(long)]
    samples: bool,

    /// Logging verbosity level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    issued_at: String,
    planet: Planet,
    parameters: LaunchParameters,
    landed: bool,
    summary: ResultSummary,
    annotations: Annotations,
    #[serde(skip_serializing_if = "Option::is_none")]
    samples: Option<&'a [TrajectorySample]>,
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn read_field(prompt: &str, field: Field) -> anyhow::Result<String> {
    loop {
        print!("{prompt}");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .context("Could not read input")?;
        if bytes == 0 {
            bail!("Input ended unexpectedly (EOF).");
        }

        match parse_field(field, &line) {
            Ok(_) => return Ok(line.trim().to_string()),
            Err(err) => eprintln!("{err} Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn read_planet() -> anyhow::Result<Planet> {
    loop {
        print!("Planet [earth/moon/mars/custom] (earth): ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .context("Could not read input")?;
        if bytes == 0 {
            bail!("Input ended unexpectedly (EOF).");
        }
        if line.trim().is_empty() {
            return Ok(Planet::Earth);
        }

        match line.parse::<Planet>() {
            Ok(planet) => return Ok(planet),
            Err(err) => eprintln!("{err}"),
        }
    }
}

fn form_from_prompts() -> anyhow::Result<LaunchForm> {
    let velocity = read_field("Velocity (m/s): ", Field::Velocity)?;
    let angle = read_field("Angle (degrees): ", Field::Angle)?;
    let height = read_field("Height (m): ", Field::Height)?;
    let planet = read_planet()?;
    let gravity = if planet == Planet::Custom {
        read_field("Gravity (m/s^2): ", Field::Gravity)?
    } else {
        String::new()
    };

    Ok(LaunchForm {
        velocity,
        angle,
        gravity,
        height,
        planet,
    })
}

fn form_from_args(cli: &Cli) -> LaunchForm {
    let planet = match (cli.planet, &cli.gravity) {
        (Some(planet), _) => planet,
        (None, Some(_)) => Planet::Custom,
        (None, None) => Planet::Earth,
    };

    LaunchForm {
        velocity: cli.velocity.clone(),
        angle: cli.angle.clone(),
        gravity: cli.gravity.clone().unwrap_or_default(),
        height: cli.height.clone(),
        planet,
    }
}

fn point_line(label: &str, p: TrajectorySample) -> String {
    format!(
        "{label}: x = {:.2} m, y = {:.2} m",
        unsigned_zero(p.distance_m),
        unsigned_zero(p.height_m)
    )
}

fn print_point(label: &str, point: Option<TrajectorySample>) {
    if let Some(p) = point {
        println!("{}", point_line(label, p));
    }
}

fn print_table(response: &SimulationResponse, with_samples: bool) {
    let params = response.request.params;
    println!(
        "Planet: {} (g = {:.2} m/s^2)",
        response.request.planet, params.gravity_mps2
    );
    println!(
        "Launch: {:.2} m/s at {:.2} deg from {:.2} m",
        params.speed_mps, params.angle_deg, params.height_m
    );

    if !response.landed() {
        println!("No real landing time: the projectile never reaches the ground.");
    }

    println!();
    println!("{}", response.summary);
    print_point("Max height point", response.annotations.apex);
    print_point("Landing point", response.annotations.landing);

    if with_samples && response.landed() {
        println!();
        println!("{:>5}  {:>12}  {:>12}", "#", "x (m)", "y (m)");
        for (i, s) in response.result.samples.iter().enumerate() {
            println!("{i:>5}  {:>12.4}  {:>12.4}", s.distance_m, s.height_m);
        }
    }
}

fn print_json(response: &SimulationResponse, with_samples: bool) -> anyhow::Result<()> {
    let report = Report {
        issued_at: response.request.issued_at.to_rfc3339(),
        planet: response.request.planet,
        parameters: response.request.params,
        landed: response.landed(),
        summary: response.summary,
        annotations: response.annotations,
        samples: with_samples.then_some(response.result.samples.as_slice()),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;
    debug!(?cli, "parsed arguments");

    let form = if cli.interactive {
        form_from_prompts()?
    } else {
        form_from_args(&cli)
    };

    let request = SimulationRequest::from_form(&form)?;
    info!(planet = %request.planet, "launching");
    let response = simulate(request);

    match cli.output {
        OutputFormat::Table => print_table(&response, cli.samples),
        OutputFormat::Json => print_json(&response, cli.samples)?,
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
