//! Diet Calculator (dietcalc) Library
//!
//! Health metrics from basic biometrics and randomized one-day meal plans
//! that approximate a calorie and protein budget.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod metrics;
pub mod models;
pub mod nutrition;
pub mod planner;
pub mod tools;
