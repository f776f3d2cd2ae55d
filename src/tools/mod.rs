//! Tools module
//!
//! Tool implementations behind the MCP server: input validation, display
//! rounding, and response shaping around the core calculators.

pub mod diet_plan;
pub mod foods;
pub mod format;
pub mod metrics;
pub mod status;
pub mod validation;

pub use validation::ValidationError;
