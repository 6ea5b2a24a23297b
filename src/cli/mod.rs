pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moe-tune")]
#[command(about = "MoE kernel tuning configuration manager", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Configuration store root (overrides the config file)
    #[arg(long, global = true)]
    config_root: Option<PathBuf>,
    /// JSON model registry (overrides the built-in models)
    #[arg(long, global = true)]
    registry: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered models
    List,
    /// Recommend a configuration for a model
    Recommend {
        /// Registered model name
        model: String,
    },
    /// Show every compatible configuration from other models
    Find {
        /// Registered model name
        model: String,
    },
    /// Run kernel tuning for a model
    Tune {
        /// Registered model name
        model: String,
        /// Tensor parallel size
        #[arg(long)]
        tp_size: Option<usize>,
        /// Data type
        #[arg(long)]
        dtype: Option<String>,
        /// Batch sizes to benchmark (defaults depend on model size)
        #[arg(long, num_args = 1..)]
        batch_sizes: Option<Vec<usize>>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = commands::Context::load(cli.config, cli.config_root, cli.registry)?;

    match cli.command {
        Commands::List => commands::list(&ctx),
        Commands::Recommend { model } => commands::recommend(&ctx, &model),
        Commands::Find { model } => commands::find(&ctx, &model),
        Commands::Tune {
            model,
            tp_size,
            dtype,
            batch_sizes,
        } => commands::tune(&ctx, &model, tp_size, dtype, batch_sizes),
    }
}
