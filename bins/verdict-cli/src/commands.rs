// CLI commands for the verdict harness
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use verdict_core::manifest::{TaskManifest, TestSpec};
use verdict_core::{check_solution, TestSuite, UserSolution};

/// Load the manifest and solution payload, run every test case, and
/// print the report.
pub fn run(task_path: &Path, solution_path: &Path, json: bool) -> Result<()> {
    let manifest = TaskManifest::load(task_path)?;
    let payload = fs::read_to_string(solution_path).with_context(|| {
        format!(
            "Failed to read solution payload: {}",
            solution_path.display()
        )
    })?;

    let task = manifest.into_task();
    let solution = UserSolution::new(payload);

    info!(
        description = %task.description(),
        test_count = task.suite().test_count(),
        "Checking solution"
    );

    let submission = check_solution(&solution, &task);

    if json {
        let report = serde_json::to_string_pretty(&submission)
            .context("Failed to serialize submission")?;
        println!("{}", report);
        return Ok(());
    }

    println!("Task: {}", task.description());
    println!(
        "Total tests passed: {} out of {}",
        submission.total_passed(),
        task.suite().test_count()
    );
    for (i, result) in submission.results().iter().enumerate() {
        println!("Test {}: {}", i + 1, result.actual_output);
    }
    println!("Total test suites created: {}", TestSuite::total_created());

    Ok(())
}

/// Scaffold a sample task manifest in `dir`.
pub fn init(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let manifest = TaskManifest {
        description: "Example Task".to_string(),
        tests: vec![
            TestSpec::Basic {
                input: "input1".to_string(),
                expected: "input1".to_string(),
            },
            TestSpec::Basic {
                input: "input2".to_string(),
                expected: "expected2".to_string(),
            },
            TestSpec::Advanced {
                input: "input3".to_string(),
                expected: "input3".to_string(),
                complexity_level: 3,
            },
        ],
    };

    let path = dir.join("task.json");
    let content = serde_json::to_string_pretty(&manifest)
        .context("Failed to serialize sample manifest")?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote sample task manifest to {}", path.display());
    Ok(())
}
