use std::time::Duration;

use tokio::time::sleep;

pub const TOOL_NAME: &str = "simple_tool";
pub const TOOL_DESCRIPTION: &str = "A simple tool that processes input";

/// Local stand-in for real tool work: waits `delay`, then echoes its input.
///
/// Accepts any argument payload; nothing is validated.
pub async fn simple_tool(arguments: &str, delay: Duration) -> String {
    sleep(delay).await;
    format!("Processed {arguments}")
}
