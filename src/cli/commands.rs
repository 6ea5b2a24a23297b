use anyhow::{Context as _, Result};
use moe_tune_rs::config::Config;
use moe_tune_rs::registry::ModelRegistry;
use moe_tune_rs::resolver::{ConfigStore, Recommendation, Resolver};
use moe_tune_rs::tuning::{default_batch_sizes, BenchmarkRunner, TuningRequest, TuningRunner};
use std::fs;
use std::path::PathBuf;

/// Settings resolved from the config file and command-line overrides
pub struct Context {
    pub config: Config,
    pub registry: ModelRegistry,
}

impl Context {
    pub fn load(
        config_path: Option<PathBuf>,
        config_root: Option<PathBuf>,
        registry_path: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        };
        if let Some(root) = config_root {
            config.paths.config_root = root.to_string_lossy().to_string();
        }
        if let Some(path) = registry_path {
            config.paths.registry_file = Some(path.to_string_lossy().to_string());
        }

        let registry = match &config.paths.registry_file {
            Some(path) => ModelRegistry::from_file(&PathBuf::from(path))?,
            None => ModelRegistry::builtin(),
        };

        Ok(Self { config, registry })
    }

    fn store(&self) -> ConfigStore {
        ConfigStore::new(self.config.paths.config_root())
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.registry, self.store(), self.config.matching.clone())
    }
}

pub fn list(ctx: &Context) -> Result<()> {
    println!("Registered models:");
    for profile in ctx.registry.profiles() {
        println!(
            "  {}: {} experts, intermediate {}, {}",
            profile.name, profile.expert_count, profile.intermediate_size, profile.size_category
        );
    }
    Ok(())
}

pub fn recommend(ctx: &Context, model: &str) -> Result<()> {
    let profile = ctx.registry.lookup(model)?;

    println!("Configuration for {}:", model);
    println!("  Experts: {}", profile.expert_count);
    println!("  Intermediate size: {}", profile.intermediate_size);
    println!();

    match ctx.resolver().recommend_for(model)? {
        Recommendation::ExactHit(files) => {
            println!("✅ Dedicated configuration found:");
            for file in files {
                println!("  - {}", file.display());
            }
        }
        Recommendation::ApproximateHit(candidates) => {
            println!("🔄 Compatible configuration found:");
            for c in candidates {
                println!(
                    "  - {} (similarity: {:.2})",
                    c.location.display(),
                    c.similarity
                );
            }
        }
        Recommendation::NoMatch => {
            println!("❌ No compatible configuration, run tuning:");
            println!("  moe-tune tune {}", model);
        }
    }

    Ok(())
}

pub fn find(ctx: &Context, model: &str) -> Result<()> {
    let candidates = ctx.resolver().compatible_for(model)?;

    if candidates.is_empty() {
        println!("No compatible configuration for {}", model);
        return Ok(());
    }

    println!("Compatible configurations for {}:", model);
    for c in candidates {
        println!(
            "  - {} (E{} N{}, similarity: {:.3})",
            c.location.display(),
            c.experts,
            c.intermediate,
            c.similarity
        );
    }
    Ok(())
}

pub fn tune(
    ctx: &Context,
    model: &str,
    tp_size: Option<usize>,
    dtype: Option<String>,
    batch_sizes: Option<Vec<usize>>,
) -> Result<()> {
    let profile = ctx.registry.lookup(model)?;
    let tuning = &ctx.config.tuning;

    let store = ctx.store();
    fs::create_dir_all(store.root())
        .with_context(|| format!("Failed to create config root {}", store.root().display()))?;

    let request = TuningRequest {
        model_path: profile.model_path.clone(),
        tp_size: tp_size.unwrap_or(tuning.tp_size),
        dtype: dtype.unwrap_or_else(|| tuning.dtype.clone()),
        batch_sizes: default_batch_sizes(profile, batch_sizes),
        output_dir: store.model_dir(model),
    };
    if request.tp_size == 0 {
        anyhow::bail!("--tp-size must be at least 1");
    }

    let runner = BenchmarkRunner::new(tuning);
    println!("Tuning {}...", model);
    println!("Command: {}", runner.command_line(&request));
    println!();

    let outcome = runner.run(&request)?;
    if outcome.success {
        println!("✅ Tuning for {} finished", model);
        Ok(())
    } else {
        println!("❌ Tuning for {} failed", model);
        anyhow::bail!("benchmark exited with status {:?}", outcome.exit_code)
    }
}
