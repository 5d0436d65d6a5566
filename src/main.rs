//! Gridlife CLI - Run Game of Life simulations from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use gridlife::{
    engine::{GridStats, LifeGrid, Stepper},
    schema::{GridConfig, Pattern, Seed},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [steps]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to grid configuration file");
        eprintln!("  steps        Number of generations (default: 100)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let steps: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: GridConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        Seed::default()
    };

    let mut grid = LifeGrid::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });
    seed.apply(&mut grid);

    println!("Gridlife Simulation");
    println!("===================");
    println!("Grid: {}x{}", config.width, config.height);
    println!("Steps: {}", steps);
    println!();

    let initial_stats = GridStats::from_grid(&grid);

    println!("Initial state:");
    println!("  Population: {}", initial_stats.population);
    println!("  Density: {:.4}", initial_stats.density);
    println!();

    let mut stepper = Stepper::for_grid(&grid);

    // Run simulation
    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..steps {
        stepper.step(&mut grid);

        // Print progress every 10%
        if (i + 1) % (steps / 10).max(1) == 0 {
            let stats = GridStats::from_grid(&grid);
            let elapsed = start.elapsed().as_secs_f32();
            let steps_per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  Step {}/{}: population={}, {:.1} steps/s",
                i + 1,
                steps,
                stats.population,
                steps_per_sec
            );
        }
    }

    let elapsed = start.elapsed();
    let final_stats = GridStats::from_grid(&grid);

    println!();
    println!("Final state (generation {}):", final_stats.generation);
    println!("  Population: {}", final_stats.population);
    println!("  Density: {:.4}", final_stats.density);
    println!();
    print_frame(&grid);
    println!();
    println!(
        "Time: {:.2}s ({:.1} steps/s)",
        elapsed.as_secs_f32(),
        steps as f32 / elapsed.as_secs_f32()
    );
}

/// Render the grid as one ASCII line per row.
fn print_frame(grid: &LifeGrid) {
    let mut line = String::with_capacity(grid.width());
    for row in 0..grid.height() as i32 {
        line.clear();
        for col in 0..grid.width() as i32 {
            line.push(if grid.is_alive(row, col).unwrap_or(false) {
                '#'
            } else {
                '.'
            });
        }
        println!("{}", line);
    }
}

fn print_example_config() {
    let config = GridConfig::default();
    let seed = Seed {
        pattern: Pattern::Glider { row: 1, col: 1 },
    };

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", serde_json::to_string_pretty(&seed).unwrap());
}
