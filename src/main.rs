//! Diet Calculator (dietcalc)
//!
//! An MCP server for health metrics and meal plan suggestions.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use dietcalc::build_info;
use dietcalc::config::{ServerConfig, DEFAULT_LOG_DIRECTIVE};
use dietcalc::mcp::DietcalcService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they don't interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = ServerConfig::from_env()?;
    match config.seed {
        Some(seed) => eprintln!("Plan seed: {}", seed),
        None => eprintln!("Plan seed: random"),
    }

    eprintln!("Starting MCP server on stdio...");
    let service = DietcalcService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
