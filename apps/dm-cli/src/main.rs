use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dm_app::{AppError, AppResult, query};
use dm_core::{DemandSeries, ProvinceKey, Scenario};
use dm_data::Dataset;

#[derive(Parser)]
#[command(name = "dm-cli")]
#[command(about = "Demandmap CLI - provincial electricity demand dataset tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the dataset files and their cross-file join keys
    Validate {
        /// Directory holding the boundary file and demand tables
        data_dir: PathBuf,
    },
    /// List provinces found in the boundary file
    Provinces {
        /// Directory holding the boundary file and demand tables
        data_dir: PathBuf,
    },
    /// Print national totals per scenario
    Summary {
        /// Directory holding the boundary file and demand tables
        data_dir: PathBuf,
    },
    /// Export one demand series as CSV
    ExportSeries {
        /// Directory holding the boundary file and demand tables
        data_dir: PathBuf,
        /// Scenario name (SSP1..SSP5)
        scenario: String,
        /// Province name; omitted means the national aggregate
        #[arg(long)]
        province: Option<String>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { data_dir } => cmd_validate(&data_dir),
        Commands::Provinces { data_dir } => cmd_provinces(&data_dir),
        Commands::Summary { data_dir } => cmd_summary(&data_dir),
        Commands::ExportSeries {
            data_dir,
            scenario,
            province,
            output,
        } => cmd_export_series(&data_dir, &scenario, province.as_deref(), output.as_deref()),
    }
}

fn cmd_validate(data_dir: &Path) -> AppResult<()> {
    println!("Validating dataset: {}", data_dir.display());
    let dataset = Dataset::load(data_dir)?;
    println!("✓ Dataset is valid");
    println!("  Provinces: {}", dataset.boundaries.len());
    println!(
        "  Projected years: {}-{}",
        dataset.scenario(Scenario::Ssp1).first_year(),
        dataset.scenario(Scenario::Ssp1).last_year()
    );
    println!(
        "  Historical years: {}-{}",
        dataset.historical.first_year(),
        dataset.historical.last_year()
    );
    Ok(())
}

fn cmd_provinces(data_dir: &Path) -> AppResult<()> {
    let dataset = Dataset::load(data_dir)?;
    println!("Provinces in boundary file:");
    for boundary in &dataset.boundaries {
        println!("  {} (key: {})", boundary.name, boundary.key);
    }
    Ok(())
}

fn cmd_summary(data_dir: &Path) -> AppResult<()> {
    let dataset = Dataset::load(data_dir)?;
    println!("National residential demand:");
    for scenario in Scenario::ALL {
        let Some(total) = query::national_projection(&dataset, scenario) else {
            continue;
        };
        let first = total.first_year();
        let last = total.last_year();
        println!(
            "  {}: {:.1} TWh in {} -> {:.1} TWh in {}",
            scenario,
            total.get(first).unwrap_or(0.0) / 1000.0,
            first,
            total.get(last).unwrap_or(0.0) / 1000.0,
            last
        );
    }
    Ok(())
}

fn cmd_export_series(
    data_dir: &Path,
    scenario: &str,
    province: Option<&str>,
    output: Option<&Path>,
) -> AppResult<()> {
    let dataset = Dataset::load(data_dir)?;
    let scenario: Scenario = scenario.parse()?;

    let series: DemandSeries = match province {
        Some(name) => {
            let key = ProvinceKey::new(name);
            query::province_projection(&dataset, scenario, &key).ok_or_else(|| {
                AppError::UnknownProvince {
                    name: name.to_string(),
                }
            })?
        }
        None => query::national_projection(&dataset, scenario)
            .ok_or_else(|| AppError::InvalidInput("dataset holds no rows".to_string()))?,
    };

    // Build CSV
    let mut csv = String::from("year,demand_gwh\n");
    for (year, value) in series.iter() {
        csv.push_str(&format!("{},{}\n", year, value));
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} data points to {}",
            series.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}
