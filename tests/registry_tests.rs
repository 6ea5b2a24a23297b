use anyhow::Result;
use moe_tune_rs::registry::{ModelRegistry, SizeCategory};
use moe_tune_rs::tuning::{default_batch_sizes, TuningOutcome, TuningRequest, TuningRunner};
use std::cell::RefCell;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_registry_from_file() -> Result<()> {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("models.json");
    fs::write(
        &path,
        r#"[
            {
                "name": "olmoe_1b_7b",
                "model_path": "allenai/OLMoE-1B-7B-0924",
                "expert_count": 64,
                "intermediate_size": 1024,
                "hidden_size": 2048,
                "topk": 8,
                "size_category": "small_moe"
            }
        ]"#,
    )?;

    let registry = ModelRegistry::from_file(&path)?;
    assert_eq!(registry.names(), vec!["olmoe_1b_7b".to_string()]);
    let profile = registry.lookup("olmoe_1b_7b")?;
    assert_eq!(profile.size_category, SizeCategory::Small);
    assert_eq!(profile.topk, 8);
    Ok(())
}

#[test]
fn test_registry_file_with_invalid_profile() -> Result<()> {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("models.json");
    fs::write(
        &path,
        r#"[{ "name": "bad", "model_path": "x", "expert_count": 0,
              "intermediate_size": 1024, "hidden_size": 1, "topk": 1,
              "size_category": "large" }]"#,
    )?;

    let err = ModelRegistry::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("expert_count"));
    Ok(())
}

#[test]
fn test_registry_file_missing() {
    let err = ModelRegistry::from_file(std::path::Path::new("/nonexistent/models.json"))
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read model registry"));
}

#[test]
fn test_default_batch_sizes_follow_category() -> Result<()> {
    let registry = ModelRegistry::builtin();

    let mixtral = registry.lookup("mixtral_8x7b")?;
    assert_eq!(default_batch_sizes(mixtral, None).last(), Some(&256));

    let deepseek = registry.lookup("deepseek_v2")?;
    assert_eq!(default_batch_sizes(deepseek, None).last(), Some(&64));
    assert_eq!(default_batch_sizes(deepseek, Some(vec![3, 5])), vec![3, 5]);
    assert_eq!(default_batch_sizes(deepseek, Some(vec![])).len(), 7);
    Ok(())
}

/// Records requests instead of launching a process
struct RecordingRunner {
    requests: RefCell<Vec<TuningRequest>>,
}

impl TuningRunner for RecordingRunner {
    fn run(&self, request: &TuningRequest) -> Result<TuningOutcome> {
        self.requests.borrow_mut().push(request.clone());
        Ok(TuningOutcome {
            success: true,
            exit_code: Some(0),
        })
    }
}

#[test]
fn test_runner_trait_object() -> Result<()> {
    let registry = ModelRegistry::builtin();
    let profile = registry.lookup("qwen3_30b")?;

    let recorder = RecordingRunner {
        requests: RefCell::new(Vec::new()),
    };
    let runner: &dyn TuningRunner = &recorder;

    let request = TuningRequest {
        model_path: profile.model_path.clone(),
        tp_size: 1,
        dtype: "auto".to_string(),
        batch_sizes: default_batch_sizes(profile, None),
        output_dir: "configs/qwen3_30b".into(),
    };
    assert!(runner.run(&request)?.success);

    let seen = recorder.requests.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].batch_sizes, vec![1, 2, 4, 8, 16, 32, 64, 128]);
    Ok(())
}
