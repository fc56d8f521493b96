use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use rucicka_kinematics::codec;
use rucicka_kinematics::diagnostics::TracingDiagnostics;
use rucicka_kinematics::kinematic_traits::{Kinematics, PoseRequest};
use rucicka_kinematics::kinematics_impl::ArmKinematics;
use rucicka_kinematics::parameters::arm_kinematics::Parameters;
use rucicka_kinematics::presets::PresetTable;
use rucicka_kinematics::utils::coordinates_table;

/// Solves joint coordinates for the arm and prints them in the text form
/// expected by the servo controller.
#[derive(Parser)]
#[command(name = "rucicka", version, about)]
struct Cli {
    /// YAML file with the arm geometry and calibration. Stock arm if not given.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print intermediate values of the solution. Also enabled by the DEBUG environment variable.
    #[arg(long, global = true)]
    debug: bool,

    /// Also print a table with joint names.
    #[arg(long, global = true)]
    table: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Joint coordinates for a target position
    Solve {
        /// Base rotation, degrees
        #[arg(long, allow_hyphen_values = true)]
        rotation: i32,
        /// Height of the target above the shoulder pivot
        #[arg(long, allow_hyphen_values = true)]
        height: f64,
        /// Horizontal distance of the target from the shoulder pivot
        #[arg(long, allow_hyphen_values = true)]
        distance: f64,
        /// Gripper opening
        #[arg(long)]
        gripper: i32,
        /// Wrist rotation, degrees
        #[arg(long)]
        wrist_rotate: i32,
        /// Wrist angle, degrees
        #[arg(long)]
        wrist: Option<i32>,
    },
    /// Coordinates of a named preset (default, low, high, park, ninety, min, max)
    Preset { name: String },
    /// Parse coordinates, clamp them into the joint limits and print them again
    Parse { text: String },
    /// Print the active parameters as YAML
    Params,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = cli.debug || std::env::var_os("DEBUG").is_some();
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let parameters = match &cli.config {
        Some(path) => Parameters::from_yaml_file(path)
            .with_context(|| format!("Failed to load parameters from {}", path.display()))?,
        None => Parameters::new(),
    };
    let mut arm = ArmKinematics::new(parameters);
    if verbose {
        arm = arm.with_diagnostics(Arc::new(TracingDiagnostics));
    }

    let coords = match cli.command {
        Command::Solve { rotation, height, distance, gripper, wrist_rotate, wrist } => {
            let request = PoseRequest { rotation, height, distance, gripper, wrist_rotate, wrist };
            arm.position_to_coords(&request)
                .context("Desired position is unreachable")?
        }
        Command::Preset { name } => {
            let presets = PresetTable::with_limits(arm.constraints());
            presets.get(&name)?
        }
        Command::Parse { text } => {
            let parsed = codec::parse(&text)?;
            let violations = arm.constraints().violations(&parsed);
            if !violations.is_empty() {
                tracing::warn!(?violations, "coordinates clamped into joint limits");
            }
            arm.constraints().constrain(&parsed)
        }
        Command::Params => {
            print!("{}", arm.parameters().to_yaml());
            return Ok(());
        }
    };

    if cli.table {
        eprintln!("{}", coordinates_table(&coords));
    }
    // Hand-off to the transport: the controller reads this line.
    println!("{}", codec::format(&coords));
    Ok(())
}
