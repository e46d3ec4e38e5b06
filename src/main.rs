mod board;
mod builder;
mod cell;
mod cli;
mod error;
mod exporter;
mod fmt;
mod importer;
mod models;
mod schema;
mod settings;
mod store;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { export_dir } => cli::init::run(export_dir),
        Commands::Import { file, profile } => cli::import::run(&file, profile.as_deref()),
        Commands::Board { file, profile } => cli::board::run(&file, profile.as_deref()),
        Commands::Comment {
            file,
            id,
            text,
            output,
            profile,
        } => cli::comment::run(&file, &id, &text, output.as_deref(), profile.as_deref()),
        Commands::Export {
            file,
            output,
            profile,
        } => cli::export::run(&file, output.as_deref(), profile.as_deref()),
        Commands::Template { output } => cli::template::run(output.as_deref()),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
