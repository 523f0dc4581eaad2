//! Tool-call latency profiler for hosted assistants.
//!
//! One assistant per scenario, one conversation per assistant. Tool calls the
//! model emits are answered locally by a fixed-delay stub and the wall-clock
//! cost of the whole exchange is recorded.

pub mod config;
pub mod driver;
pub mod error;
pub mod llm;
pub mod provisioner;
pub mod report;
pub mod scenario;
pub mod schema;
pub mod service;
pub mod tool;

pub use config::{DriverConfig, ServiceConfig};
pub use driver::{RunDriver, RunResult};
pub use error::{ProfilerError, Result};
pub use llm::OpenAiAssistants;
pub use provisioner::Provisioner;
pub use scenario::{default_scenarios, Scenario, ScenarioFilter, ScenarioRunner};
pub use schema::Complexity;
pub use service::AssistantService;
