use clap::Parser;
use profiler_core::{Complexity, ScenarioFilter};

/// Benchmarks tool-call latency of a hosted assistant across scenarios.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only run these complexity tiers (simple, medium, complex). Repeatable.
    #[arg(long = "complexity", value_name = "TIER")]
    pub complexities: Vec<Complexity>,

    /// Only run parallel (true) or sequential (false) scenarios.
    #[arg(long)]
    pub parallel: Option<bool>,

    /// Only run scenarios with this many requested tool calls. Repeatable.
    #[arg(long = "tools", value_name = "N")]
    pub tool_counts: Vec<u32>,

    /// Abort a run that has not completed after this many seconds.
    #[arg(long, value_name = "SECS")]
    pub max_poll_secs: Option<u64>,

    /// Also print the results as JSON after the table.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn filter(&self) -> ScenarioFilter {
        ScenarioFilter {
            complexities: self.complexities.clone(),
            parallel: self.parallel,
            tool_counts: self.tool_counts.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_filters() {
        let cli = Cli::parse_from([
            "fn-profiler",
            "--complexity",
            "simple",
            "--complexity",
            "complex",
            "--parallel",
            "false",
            "--tools",
            "5",
            "--json",
        ]);
        let filter = cli.filter();

        assert_eq!(filter.complexities, vec![Complexity::Simple, Complexity::Complex]);
        assert_eq!(filter.parallel, Some(false));
        assert_eq!(filter.tool_counts, vec![5]);
        assert!(cli.json);
    }

    #[test]
    fn rejects_unknown_tier() {
        assert!(Cli::try_parse_from(["fn-profiler", "--complexity", "huge"]).is_err());
    }

    #[test]
    fn defaults_run_everything() {
        let cli = Cli::parse_from(["fn-profiler"]);
        assert!(cli.filter().complexities.is_empty());
        assert_eq!(cli.max_poll_secs, None);
    }
}
