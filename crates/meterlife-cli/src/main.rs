use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "meterlife",
    version,
    about = "Prepaid electricity balance life estimation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full estimation and print the report
    Estimate(commands::estimate::EstimateArgs),
    /// Show the usage forecast chart
    Forecast(commands::forecast::ForecastArgs),
    /// Show the appliance cost breakdown
    Appliances(commands::appliances::AppliancesArgs),
    /// Run file management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Estimate(args) => commands::estimate::run(args),
        Commands::Forecast(args) => commands::forecast::run(args),
        Commands::Appliances(args) => commands::appliances::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
