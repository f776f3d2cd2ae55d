//! dietcalc MCP Server Implementation
//!
//! Exposes the metric and meal-plan tools over MCP.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::ServerConfig;
use crate::nutrition::NutritionTable;
use crate::planner::{PlanAssembler, RngSource};
use crate::tools::status::{StatusTracker, PLANNER_INSTRUCTIONS};
use crate::tools::{diet_plan, foods, metrics, ValidationError};

/// dietcalc MCP Service
#[derive(Clone)]
pub struct DietcalcService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    assembler: Arc<PlanAssembler>,
    table: NutritionTable,
    rng_source: Arc<RngSource>,
    plans_generated: Arc<AtomicU64>,
    tool_router: ToolRouter<DietcalcService>,
}

impl DietcalcService {
    pub fn new(config: ServerConfig) -> Self {
        let table = NutritionTable::standard();
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            assembler: Arc::new(PlanAssembler::new(table, config.planner)),
            table,
            rng_source: Arc::new(RngSource::new(config.seed)),
            plans_generated: Arc::new(AtomicU64::new(0)),
            tool_router: Self::tool_router(),
        }
    }

    fn record_plan(&self) {
        self.plans_generated.fetch_add(1, Ordering::Relaxed);
    }
}

fn invalid_params(e: ValidationError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BiometricsParams {
    /// Age in years
    pub age: i64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// "male" or "female"
    pub gender: String,
    /// Trains as an athlete (default false)
    #[serde(default)]
    pub is_athlete: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BuildDietPlanParams {
    /// Daily calorie target in kcal (0 or more)
    pub target_calories: f64,
    /// Daily protein target in grams (0 or more)
    pub target_protein_grams: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFoodsParams {
    /// Filter by category: carb, protein, vegetable, fruit, fat (optional)
    pub category: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl DietcalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the dietcalc service including build info, plans generated, and process information")]
    async fn dietcalc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(
            self.plans_generated.load(Ordering::Relaxed),
            self.rng_source.is_seeded(),
        );
        json_result(&status)
    }

    #[tool(description = "Get instructions for computing health metrics and meal plans. Call this when unsure how to use the dietcalc tools.")]
    fn planner_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(PLANNER_INSTRUCTIONS)]))
    }

    // --- Metrics ---

    #[tool(description = "Compute BMI, BMI category, ideal weight, basal metabolic rate, daily calorie need, and daily protein range from age, height (cm), weight (kg), gender, and athlete status")]
    fn compute_metrics(&self, Parameters(p): Parameters<BiometricsParams>) -> Result<CallToolResult, McpError> {
        let result = metrics::compute_metrics(p.age, p.height_cm, p.weight_kg, &p.gender, p.is_athlete)
            .map_err(invalid_params)?;
        json_result(&result)
    }

    // --- Meal Plans ---

    #[tool(description = "Build a one-day meal plan (breakfast, lunch, dinner, snacks) approximating a calorie and protein target. Plans are randomized suggestions and may fall short of the targets.")]
    fn build_diet_plan(&self, Parameters(p): Parameters<BuildDietPlanParams>) -> Result<CallToolResult, McpError> {
        let mut rng = self.rng_source.next_rng();
        let result = diet_plan::build_diet_plan(&self.assembler, p.target_calories, p.target_protein_grams, &mut rng)
            .map_err(invalid_params)?;
        self.record_plan();
        json_result(&result)
    }

    #[tool(description = "Full assessment: compute health metrics from biometrics, then build a one-day meal plan for the daily calorie need and the average of the protein range")]
    fn assess(&self, Parameters(p): Parameters<BiometricsParams>) -> Result<CallToolResult, McpError> {
        let mut rng = self.rng_source.next_rng();
        let result = diet_plan::assess(&self.assembler, p.age, p.height_cm, p.weight_kg, &p.gender, p.is_athlete, &mut rng)
            .map_err(invalid_params)?;
        self.record_plan();
        json_result(&result)
    }

    // --- Foods ---

    #[tool(description = "List the reference foods the meal planner draws from, with nutrients per serving")]
    fn list_foods(&self, Parameters(p): Parameters<ListFoodsParams>) -> Result<CallToolResult, McpError> {
        let result = foods::list_foods(&self.table, p.category.as_deref()).map_err(invalid_params)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for DietcalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "dietcalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Diet Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Diet Calculator (dietcalc) - Health metrics and one-day meal plan suggestions. \
                 Call planner_instructions for the workflow. \
                 Metrics: compute_metrics. \
                 Plans: assess (metrics + plan from biometrics), build_diet_plan (explicit targets). \
                 Reference data: list_foods. Service: dietcalc_status."
                    .into(),
            ),
        }
    }
}
