//! Status Tool
//!
//! Runtime status of the dietcalc service, and the usage guide served to
//! MCP clients.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage instructions for AI assistants
pub const PLANNER_INSTRUCTIONS: &str = r#"
# Diet Calculator Instructions

## Workflow

1. Collect the user's age (years), height (cm), weight (kg), gender
   (male/female), and whether they train as an athlete.
2. Call `assess` with those values. It returns health metrics and a
   one-day meal plan sized to the user's daily calorie need.
3. To plan for a custom budget instead, call `build_diet_plan` with
   `target_calories` and `target_protein_grams`.
4. `compute_metrics` returns the metrics alone.
5. `list_foods` shows the reference foods the planner draws from.

## Metrics

| Field | Meaning |
|-------|---------|
| bmi | Body-mass index (2 decimals) |
| bmi_category | underweight < 18.5 <= normal < 24.9 <= overweight < 29.9 <= obese |
| ideal_weight_kg | Robinson formula; flat 50 kg (male) / 45 kg (female) at or below 152.4 cm |
| weight_difference_kg | Current weight minus ideal weight |
| bmr_kcal | Mifflin-St Jeor basal metabolic rate |
| daily_calories_kcal | BMR x 1.7 for athletes, x 1.4 otherwise |
| protein_min/max_grams | 1.2-2.0 g/kg for athletes, 0.8-1.2 g/kg otherwise |

## Meal Plans

- Budget split: breakfast 25%, lunch 35%, dinner 30%, snacks 10%.
- Each meal first draws protein foods, then carbs, fruits, and vegetables.
- A meal may exceed its calorie share by at most 50 kcal.
- Plans are suggestions drawn at random. They often fall short of the
  targets and two requests rarely return the same plan.
- Meals that received no food are omitted from the response.

## Presenting Results

- Calories are whole numbers; protein has one decimal.
- Remind the user that the plan is a rough suggestion, not medical advice.
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct DietcalcStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Plans generated since startup
    pub plans_generated: u64,
    /// Whether plan randomness is seeded from configuration
    pub seeded: bool,

    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn get_status(&self, plans_generated: u64, seeded: bool) -> DietcalcStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        DietcalcStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            plans_generated,
            seeded,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_counters() {
        let tracker = StatusTracker::new();
        let status = tracker.get_status(3, true);
        assert_eq!(status.plans_generated, 3);
        assert!(status.seeded);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, crate::build_info::VERSION);
    }

    #[test]
    fn test_instructions_mention_every_tool() {
        for tool in ["assess", "build_diet_plan", "compute_metrics", "list_foods"] {
            assert!(PLANNER_INSTRUCTIONS.contains(tool), "missing {}", tool);
        }
    }
}
