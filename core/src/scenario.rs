use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use crate::driver::{RunDriver, RunResult};
use crate::error::Result;
use crate::provisioner::Provisioner;
use crate::schema::Complexity;

/// One benchmarked configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub num_tools: u32,
    pub parallel: bool,
    pub complexity: Complexity,
}

impl Scenario {
    pub const fn new(num_tools: u32, parallel: bool, complexity: Complexity) -> Self {
        Self {
            num_tools,
            parallel,
            complexity,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "num_tools={} parallel={} complexity={}",
            self.num_tools, self.parallel, self.complexity
        )
    }
}

pub const TOOL_COUNTS: [u32; 3] = [1, 2, 5];

/// The fixed 18-entry matrix: tier, then sequential before parallel, then tool count.
pub fn default_scenarios() -> Vec<Scenario> {
    let mut scenarios = Vec::with_capacity(18);
    for complexity in Complexity::ALL {
        for parallel in [false, true] {
            for num_tools in TOOL_COUNTS {
                scenarios.push(Scenario::new(num_tools, parallel, complexity));
            }
        }
    }
    scenarios
}

/// Narrows the scenario list. Empty filters match everything; order is kept.
#[derive(Debug, Clone, Default)]
pub struct ScenarioFilter {
    pub complexities: Vec<Complexity>,
    pub parallel: Option<bool>,
    pub tool_counts: Vec<u32>,
}

impl ScenarioFilter {
    pub fn matches(&self, scenario: &Scenario) -> bool {
        (self.complexities.is_empty() || self.complexities.contains(&scenario.complexity))
            && self.parallel.map_or(true, |p| p == scenario.parallel)
            && (self.tool_counts.is_empty() || self.tool_counts.contains(&scenario.num_tools))
    }

    pub fn apply(&self, scenarios: Vec<Scenario>) -> Vec<Scenario> {
        scenarios.into_iter().filter(|s| self.matches(s)).collect()
    }
}

/// Runs scenarios strictly one after another.
pub struct ScenarioRunner<'a> {
    provisioner: Provisioner<'a>,
    driver: RunDriver<'a>,
}

impl<'a> ScenarioRunner<'a> {
    pub fn new(provisioner: Provisioner<'a>, driver: RunDriver<'a>) -> Self {
        Self {
            provisioner,
            driver,
        }
    }

    /// Provisions, runs and always deletes the assistant for one scenario.
    ///
    /// A deletion failure is returned only when the run itself succeeded;
    /// otherwise it is logged and the run error wins.
    pub async fn run_scenario(&self, scenario: &Scenario) -> Result<RunResult> {
        let assistant_id = self
            .provisioner
            .create_assistant(scenario.parallel, scenario.complexity)
            .await?;

        let outcome = self
            .driver
            .run_assistant(
                &assistant_id,
                scenario.num_tools,
                scenario.parallel,
                scenario.complexity,
            )
            .await;
        let cleanup = self.provisioner.delete_assistant(&assistant_id).await;

        match (outcome, cleanup) {
            (Ok(result), Ok(())) => Ok(result),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(cleanup_err)) => {
                warn!(assistant_id = %assistant_id, "cleanup after failed run also failed: {}", cleanup_err);
                Err(e)
            }
        }
    }

    /// Runs every scenario in order, calling `on_done` after each one.
    ///
    /// The first error aborts the batch.
    pub async fn run_all<F>(&self, scenarios: &[Scenario], mut on_done: F) -> Result<Vec<RunResult>>
    where
        F: FnMut(&Scenario, &RunResult),
    {
        let mut results = Vec::with_capacity(scenarios.len());
        for (i, scenario) in scenarios.iter().enumerate() {
            info!("[{}/{}] {}", i + 1, scenarios.len(), scenario);
            let result = self.run_scenario(scenario).await?;
            on_done(scenario, &result);
            results.push(result);
        }
        Ok(results)
    }
}
