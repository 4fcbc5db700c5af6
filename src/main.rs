//! NutriTrack
//!
//! An MCP server for BMI, calorie targets, meal plans and nutrition tracking.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutritrack::build_info;
use nutritrack::mcp::NutriTrackService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays free for the MCP stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutritrack=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    tracing::info!("Starting MCP server on stdio");

    let service = NutriTrackService::new();
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    tracing::info!("MCP server stopped");
    Ok(())
}
