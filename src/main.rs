use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use itertools::Itertools;
use platecalc_rs::{
    bar_kind::BarKind, calc_error::CalcError, calculator::Calculator, max_weights::MaxWeights,
    settings::Settings, store::Store,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "platecalc", version, about = "Percentage and plate calculator for barbell lifts")]
struct Cli {
    /// Directory holding settings.json and weights.json
    #[arg(long, global = true, env = "PLATECALC_DIR")]
    data_dir: Option<PathBuf>,

    /// More log output (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the percentage table for an exercise
    Table {
        /// Exercise name (defaults to the first configured exercise)
        exercise: Option<String>,

        /// Use this max instead of the stored one
        #[arg(short, long)]
        max: Option<String>,

        /// Bar to load for this table only (45 or 35)
        #[arg(short, long, value_parser = clap::value_parser!(BarKind))]
        bar: Option<BarKind>,
    },

    /// Record the max weight for an exercise
    Max { exercise: String, weight: String },

    /// Show the plates per side for a total bar weight
    Plates {
        weight: String,

        #[arg(short, long, value_parser = clap::value_parser!(BarKind))]
        bar: Option<BarKind>,
    },

    /// View or change settings
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand)]
enum SettingsCommand {
    Show,
    /// Go back to the default settings
    Reset,
    /// Set the bar weight (45 or 35)
    Bar {
        #[arg(value_parser = clap::value_parser!(BarKind))]
        kind: BarKind,
    },
    /// Set the border color of a plate (empty to clear)
    Color { plate: f64, color: String },
    AddExercise,
    RenameExercise { id: u32, name: String },
    DeleteExercise { id: u32 },
    /// Set the available plate sizes, heaviest first
    #[command(alias = "denominations")]
    Plates {
        #[arg(required = true)]
        weights: Vec<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = match cli.data_dir {
        Some(dir) => Store::open(dir),
        None => Store::default_location()?,
    };
    let mut settings = store.load_settings().context("loading settings")?;

    match cli.command.unwrap_or(Command::Table {
        exercise: None,
        max: None,
        bar: None,
    }) {
        Command::Table { exercise, max, bar } => {
            let name = resolve_exercise(&settings, exercise.as_deref())?;
            let max_weight = match max {
                Some(input) => MaxWeights::parse_input(&input),
                None => store.load_weights()?.get(&name),
            };
            if let Some(kind) = bar {
                settings.set_barbell_weight(kind);
            }
            print_table(&settings, &name, max_weight);
        }
        Command::Max { exercise, weight } => {
            let name = resolve_exercise(&settings, Some(&exercise))?;
            let mut weights = store.load_weights()?;
            let max_weight = MaxWeights::parse_input(&weight);
            weights.set(&name, max_weight);
            store.save_weights(&weights)?;
            println!("{name}: {max_weight} lbs");
        }
        Command::Plates { weight, bar } => {
            let weight = MaxWeights::parse_input(&weight);
            if let Some(kind) = bar {
                settings.set_barbell_weight(kind);
            }
            let breakdown = Calculator::new(&settings).breakdown(weight);
            if weight < settings.barbell_weight {
                println!("{weight} lbs is lighter than the {} lbs bar", settings.barbell_weight);
            } else {
                println!(
                    "{weight} lbs: {} lbs per side [{}]",
                    breakdown.per_side(),
                    breakdown.groups().iter().join(" ")
                );
                if breakdown.residual() > 0.0 {
                    println!("  {} lbs per side cannot be made with these plates", breakdown.residual());
                }
            }
        }
        Command::Settings(command) => run_settings(&store, &mut settings, command)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_exercise(settings: &Settings, name: Option<&str>) -> Result<String, CalcError> {
    match name {
        Some(name) => settings
            .exercise(name)
            .map(|exercise| exercise.name.clone())
            .ok_or_else(|| CalcError::UnknownExerciseName(name.to_string())),
        None => settings
            .active_exercise()
            .map(str::to_string)
            .ok_or_else(|| CalcError::UnknownExerciseName(String::new())),
    }
}

fn print_table(settings: &Settings, exercise: &str, max_weight: f64) {
    println!(
        "{exercise}: max {max_weight} lbs, bar {} lbs",
        settings.barbell_weight
    );

    let rows = Calculator::new(settings).table(max_weight);
    if rows.is_empty() {
        println!("Enter a max heavier than the bar to see percentages.");
        return;
    }

    for row in &rows {
        println!("{row}");
        if row.residual() > 0.0 {
            println!("       {} lbs per side cannot be made with these plates", row.residual());
        }
    }

    let legend = rows
        .iter()
        .flat_map(|row| row.groups().iter().map(|group| group.plate))
        .sorted_by(|a, b| b.weight().total_cmp(&a.weight()))
        .dedup()
        .map(|plate| format!("{plate} {}", settings.border_color(plate.weight())))
        .join(", ");
    if !legend.is_empty() {
        println!("Plate colors: {legend}");
    }
}

fn run_settings(
    store: &Store,
    settings: &mut Settings,
    command: SettingsCommand,
) -> anyhow::Result<()> {
    match command {
        SettingsCommand::Show => {
            print_settings(settings);
            return Ok(());
        }
        SettingsCommand::Reset => {
            store.clear_settings()?;
            println!("Settings reset to defaults.");
            return Ok(());
        }
        SettingsCommand::Bar { kind } => settings.set_barbell_weight(kind),
        SettingsCommand::Color { plate, color } => settings.set_border_color(plate, &color)?,
        SettingsCommand::AddExercise => {
            let id = settings.add_exercise();
            println!("Added exercise {id}; rename it with `settings rename-exercise {id} <name>`.");
        }
        SettingsCommand::RenameExercise { id, name } => settings.rename_exercise(id, &name)?,
        SettingsCommand::DeleteExercise { id } => settings.delete_exercise(id)?,
        SettingsCommand::Plates { weights } => settings.set_denominations(&weights)?,
    }

    store.save_settings(settings)?;
    print_settings(settings);
    Ok(())
}

fn print_settings(settings: &Settings) {
    let bar = settings
        .bar_kind()
        .map_or_else(|| format!("{} lbs", settings.barbell_weight), |kind| kind.to_string());
    println!("Bar: {bar}");
    println!("Plates: {}", settings.denominations.plates().iter().join(", "));

    println!("Border colors:");
    for border in &settings.border_colors {
        println!("  {:>4}: {}", border.plate, border.color());
    }

    println!("Exercises:");
    for exercise in &settings.exercise_types {
        println!("  {:>2}. {}", exercise.id, exercise.name);
    }
}
