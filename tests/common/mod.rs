// Test utility module for solar-risk integration tests
#![allow(dead_code)]

use solar_risk::{Category, FactorRatings, RiskEngine};
use std::path::PathBuf;

/// Path to a file under tests/data
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

/// Every configured factor of `category` rated `rating`
pub fn uniform_ratings(engine: &RiskEngine, category: Category, rating: i64) -> FactorRatings {
    engine
        .config()
        .category(category)
        .factor_names()
        .map(|factor| (factor, rating))
        .collect()
}

/// Ratings for one category from a list of factor/rating pairs
pub fn ratings(pairs: &[(&str, i64)]) -> FactorRatings {
    pairs.iter().copied().collect()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
