//! Task manifests: the on-disk JSON description a task is built from.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::case::{AdvancedTestCase, BasicTestCase};
use crate::suite::TestSuite;
use crate::task::Task;

/// On-disk description of a single test case, tagged by variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TestSpec {
    Basic {
        input: String,
        expected: String,
    },
    Advanced {
        input: String,
        expected: String,
        complexity_level: i32,
    },
}

/// On-disk description of a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskManifest {
    pub description: String,
    pub tests: Vec<TestSpec>,
}

impl TaskManifest {
    /// Loads a manifest from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Task manifest not found: {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read task manifest: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse task manifest: {}", path.display()))
    }

    /// Builds a suite holding one case per entry, in manifest order. An
    /// empty test list yields an empty suite, not an error.
    pub fn build_suite(&self) -> TestSuite {
        let mut suite = TestSuite::new();
        for spec in &self.tests {
            match spec {
                TestSpec::Basic { input, expected } => {
                    suite.add_test(BasicTestCase::new(input.clone(), expected.clone()));
                }
                TestSpec::Advanced {
                    input,
                    expected,
                    complexity_level,
                } => {
                    suite.add_test(AdvancedTestCase::new(
                        input.clone(),
                        expected.clone(),
                        *complexity_level,
                    ));
                }
            }
        }
        suite
    }

    pub fn into_task(self) -> Task {
        let suite = self.build_suite();
        Task::new(self.description, &suite)
    }
}
