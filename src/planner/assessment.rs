//! Full assessment: metrics plus a plan sized to them

use rand::Rng;
use serde::Serialize;

use crate::metrics::compute_metrics;
use crate::models::{Biometrics, DietPlan, Metrics};

use super::PlanAssembler;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub metrics: Metrics,
    /// Midpoint of the protein range, used as the plan's protein target
    pub protein_target_grams: f64,
    pub plan: DietPlan,
}

/// Compute metrics, then build a plan for the TDEE and average protein need
pub fn assess<R: Rng + ?Sized>(
    assembler: &PlanAssembler,
    biometrics: &Biometrics,
    rng: &mut R,
) -> Assessment {
    let metrics = compute_metrics(biometrics);
    let protein_target_grams = metrics.protein_range_grams.average();
    let plan = assembler.build(metrics.tdee_kcal, protein_target_grams, rng);

    Assessment {
        metrics,
        protein_target_grams,
        plan,
    }
}
