//! CLI front end for the sparse Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sparse::{
    config::{CliOverrides, OutputFormat, Settings},
    console::ConsoleRunner,
    engine::{
        io::{create_example_patterns, load_cells_from_file, save_alive_cells},
        LifeEngine,
    },
    utils::{CellFormatter, ColorOutput},
};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "game_of_life_sparse")]
#[command(about = "Sparse Game of Life console simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Game of Life session
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid columns (overrides config)
        #[arg(long)]
        cols: Option<u32>,

        /// Grid rows (overrides config)
        #[arg(long)]
        rows: Option<u32>,

        /// Seed cells file, one x,y per line (overrides config; skips
        /// interactive entry)
        #[arg(short = 'f', long)]
        cells: Option<PathBuf>,

        /// Generations to run without prompting (overrides config)
        #[arg(short, long)]
        steps: Option<usize>,

        /// Output format for the final alive set (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the final alive set to this file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short = 'F', long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            cols,
            rows,
            cells,
            steps,
            format,
            output,
            verbose,
        } => run_command(config, cols, rows, cells, steps, format, output, verbose),
        Commands::Setup { directory, force } => setup_command(directory, force),
    };

    if let Err(error) = result {
        eprintln!("{}", ColorOutput::error(&format!("{:#}", error)));
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn run_command(
    config_path: PathBuf,
    cols: Option<u32>,
    rows: Option<u32>,
    cells_file: Option<PathBuf>,
    steps: Option<usize>,
    format: Option<OutputFormat>,
    dump_file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        cols,
        rows,
        steps,
        cells_file,
        format,
        dump_file,
    };
    settings.merge_with_cli(&cli_overrides);

    settings
        .validate()
        .context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Grid: {}x{}", settings.grid.cols, settings.grid.rows);
        println!("  Steps: {}", settings.simulation.steps);
        match settings.input.cells_file {
            Some(ref file) => println!("  Cells file: {}", file.display()),
            None => println!("  Cells file: (interactive)"),
        }
        println!();
    }

    let engine = match settings.input.cells_file {
        Some(ref cells_path) => {
            let cells = load_cells_from_file(cells_path, settings.grid.cols, settings.grid.rows)?;
            let mut engine =
                LifeEngine::with_initial_cells(settings.grid.cols, settings.grid.rows, cells)?;
            println!("Initial alive cells: {}", engine.alive_count());

            if settings.simulation.steps > 0 {
                run_generations(&mut engine, settings.simulation.steps, verbose);
            } else {
                println!("Press 'N' to run the next generation, anything else to quit");
                let stdin = io::stdin();
                let mut runner = ConsoleRunner::new(stdin.lock(), io::stdout());
                runner.command_loop(&mut engine)?;
                println!("Game of Life finished");
            }
            engine
        }
        None => {
            // Fully interactive: grid size and cells come from stdin.
            let stdin = io::stdin();
            let mut runner = ConsoleRunner::new(stdin.lock(), io::stdout());
            runner.run()?
        }
    };

    report_final_state(&engine, &settings)?;
    Ok(())
}

fn run_generations(engine: &mut LifeEngine, steps: usize, verbose: bool) {
    let started = Instant::now();
    for generation in 1..=steps {
        let step_started = Instant::now();
        engine.advance();
        if verbose {
            println!(
                "Generation {}: {} alive cells in {} ms",
                generation,
                engine.alive_count(),
                step_started.elapsed().as_millis()
            );
        }
    }
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Ran {} generation(s) in {:.3}s, {} alive cells remaining",
            steps,
            started.elapsed().as_secs_f64(),
            engine.alive_count()
        ))
    );
}

fn report_final_state(engine: &LifeEngine, settings: &Settings) -> Result<()> {
    match settings.output.dump_file {
        Some(ref path) => {
            save_alive_cells(engine, path, settings.output.format)
                .with_context(|| format!("Failed to save alive cells to {}", path.display()))?;
            println!(
                "{}",
                ColorOutput::info(&format!("Alive cells saved to {}", path.display()))
            );
        }
        None if engine.alive_count() > 0 => {
            println!("Final alive cells:");
            let formatted = match settings.output.format {
                OutputFormat::Text => CellFormatter::format_cells(engine.alive_cells()),
                OutputFormat::Json => CellFormatter::format_cells_json(engine.alive_cells())?,
            };
            println!("{}", formatted);
        }
        None => {}
    }
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit the configuration in {}", config_path.display());
    println!(
        "2. Run: cargo run -- run --cells {} --cols 10 --rows 10 --steps 4",
        patterns_dir.join("glider.txt").display()
    );
    println!("3. Or run: cargo run -- run   (for an interactive session)");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_sparse",
            "run",
            "--cols",
            "10",
            "--rows",
            "10",
            "--steps",
            "5",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());
    }

    #[test]
    fn test_run_command_with_pattern_file() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();
        let dump = temp_dir.path().join("out.txt");

        let result = run_command(
            temp_dir.path().join("missing.yaml"),
            Some(10),
            Some(10),
            Some(temp_dir.path().join("blinker.txt")),
            Some(3),
            Some(OutputFormat::Text),
            Some(dump.clone()),
            false,
        );

        assert!(result.is_ok());
        let content = std::fs::read_to_string(&dump).unwrap();
        // Three generations flip the horizontal blinker to its vertical phase.
        assert_eq!(content, "1,0\n1,1\n1,2\n");
    }

    #[test]
    fn test_run_command_rejects_missing_cells_file() {
        let temp_dir = tempdir().unwrap();

        let result = run_command(
            temp_dir.path().join("missing.yaml"),
            Some(10),
            Some(10),
            Some(temp_dir.path().join("nope.txt")),
            Some(1),
            None,
            None,
            false,
        );

        assert!(result.is_err());
    }
}
