use crate::config::TuningConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// One tuning run
#[derive(Debug, Clone, PartialEq)]
pub struct TuningRequest {
    pub model_path: String,
    pub tp_size: usize,
    pub dtype: String,
    pub batch_sizes: Vec<usize>,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TuningOutcome {
    pub success: bool,
    pub exit_code: Option<i32>,
}

pub trait TuningRunner {
    fn run(&self, request: &TuningRequest) -> Result<TuningOutcome>;
}

/// Runs the MoE benchmark script with `--tune`
#[derive(Debug, Clone)]
pub struct BenchmarkRunner {
    python: String,
    script: String,
    seed: u64,
    trust_remote_code: bool,
}

impl BenchmarkRunner {
    pub fn new(config: &TuningConfig) -> Self {
        Self {
            python: config.python.clone(),
            script: config.benchmark_script.clone(),
            seed: config.seed,
            trust_remote_code: config.trust_remote_code,
        }
    }

    /// Arguments passed to the interpreter, script first
    pub fn args(&self, request: &TuningRequest) -> Vec<String> {
        let mut args = vec![
            self.script.clone(),
            "--model".to_string(),
            request.model_path.clone(),
            "--tp-size".to_string(),
            request.tp_size.to_string(),
            "--dtype".to_string(),
            request.dtype.clone(),
            "--batch-size".to_string(),
        ];
        args.extend(request.batch_sizes.iter().map(|b| b.to_string()));
        args.push("--tune".to_string());
        args.push("--save-dir".to_string());
        args.push(request.output_dir.to_string_lossy().to_string());
        if self.trust_remote_code {
            args.push("--trust-remote-code".to_string());
        }
        args.push("--seed".to_string());
        args.push(self.seed.to_string());
        args
    }

    /// Printable form of the command
    pub fn command_line(&self, request: &TuningRequest) -> String {
        let mut parts = vec![self.python.clone()];
        parts.extend(self.args(request));
        parts.join(" ")
    }
}

impl TuningRunner for BenchmarkRunner {
    fn run(&self, request: &TuningRequest) -> Result<TuningOutcome> {
        fs::create_dir_all(&request.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                request.output_dir.display()
            )
        })?;

        tracing::info!("Running: {}", self.command_line(request));

        let status = Command::new(&self.python)
            .args(self.args(request))
            .status()
            .with_context(|| format!("Failed to launch {} {}", self.python, self.script))?;

        Ok(TuningOutcome {
            success: status.success(),
            exit_code: status.code(),
        })
    }
}
