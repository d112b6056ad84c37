//! Catalog of the reference rating factors.
//!
//! Each factor carries a display label and a rubric describing what each
//! rating on the 1-5 scale means, from 5 (best) down to 1 (worst). Factors
//! added through custom configuration have no catalog entry and are shown
//! by their raw key.

use crate::risk::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub category: Category,
    /// Descriptions for ratings 5, 4, 3, 2, 1 in that order
    pub rubric: [&'static str; 5],
}

impl FactorInfo {
    /// Rubric entry for a rating, `None` outside 1-5
    pub fn describe(&self, rating: i64) -> Option<&'static str> {
        if !(1..=5).contains(&rating) {
            return None;
        }
        self.rubric.get((5 - rating) as usize).copied()
    }
}

pub const CATALOG: &[FactorInfo] = &[
    FactorInfo {
        key: "grid_connection",
        label: "Grid Connection",
        category: Category::Operational,
        rubric: [
            "Direct connection to major transmission",
            "Strong distribution network connection",
            "Standard grid, occasional constraints",
            "Weak grid, regular curtailment",
            "Remote/unstable grid, frequent outages",
        ],
    },
    FactorInfo {
        key: "om_provider",
        label: "O&M Provider Experience",
        category: Category::Operational,
        rubric: [
            "Tier 1 provider (Fluence, First Solar, etc.)",
            "Established regional provider (5+ years)",
            "Mid-tier provider, decent track record",
            "New provider or limited solar experience",
            "Self-operated or unproven contractor",
        ],
    },
    FactorInfo {
        key: "regulatory",
        label: "Regulatory Environment",
        category: Category::Operational,
        rubric: [
            "Streamlined permitting, supportive policies",
            "Standard regulatory process",
            "Moderate bureaucracy, some delays",
            "Complex permitting, changing regulations",
            "Hostile regulatory environment",
        ],
    },
    FactorInfo {
        key: "site_access",
        label: "Site Accessibility",
        category: Category::Operational,
        rubric: [
            "Easy road access, near population centers",
            "Good access roads, moderate distance",
            "Standard rural access",
            "Difficult terrain or remote location",
            "Very remote, challenging logistics",
        ],
    },
    FactorInfo {
        key: "panel_tech",
        label: "Panel Technology",
        category: Category::Technical,
        rubric: [
            "Tier 1 proven tech (JinkoSolar, LONGi, etc.)",
            "Tier 1 with newer technology",
            "Tier 2 established manufacturer",
            "Tier 2 or newer technology",
            "Unproven manufacturer or cutting-edge tech",
        ],
    },
    FactorInfo {
        key: "inverter_tech",
        label: "Inverter Technology",
        category: Category::Technical,
        rubric: [
            "Tier 1 inverters (SMA, ABB, SolarEdge, etc.)",
            "Established power electronics",
            "Mid-tier proven technology",
            "Newer technology or manufacturer",
            "Unproven or experimental systems",
        ],
    },
    FactorInfo {
        key: "system_design",
        label: "System Design Complexity",
        category: Category::Technical,
        rubric: [
            "Simple fixed-tilt ground mount",
            "Single-axis tracking, standard design",
            "Complex tracking or mounting systems",
            "Challenging site conditions (slopes, etc.)",
            "Experimental design or extreme conditions",
        ],
    },
    FactorInfo {
        key: "installation",
        label: "Installation Quality",
        category: Category::Technical,
        rubric: [
            "Tier 1 EPC contractor with proven record",
            "Experienced regional EPC",
            "Standard EPC contractor",
            "Limited solar experience",
            "New contractor or self-built",
        ],
    },
    FactorInfo {
        key: "weather_variability",
        label: "Weather Variability",
        category: Category::Climate,
        rubric: [
            "Very stable climate (Phoenix, Las Vegas)",
            "Generally stable with some variation",
            "Moderate seasonal/yearly variation",
            "Significant weather variability",
            "Highly unpredictable climate patterns",
        ],
    },
    FactorInfo {
        key: "extreme_weather",
        label: "Extreme Weather Risk",
        category: Category::Climate,
        rubric: [
            "Minimal extreme weather risk",
            "Occasional severe weather",
            "Moderate hail/wind/storm risk",
            "Regular extreme weather events",
            "High hurricane/tornado/severe hail risk",
        ],
    },
    FactorInfo {
        key: "resource_stability",
        label: "Long-term Resource Stability",
        category: Category::Climate,
        rubric: [
            "Consistent solar resource over decades",
            "Very stable with minor variations",
            "Generally stable solar resource",
            "Some climate change impacts expected",
            "Significant long-term uncertainty",
        ],
    },
];

pub fn lookup(key: &str) -> Option<&'static FactorInfo> {
    CATALOG.iter().find(|f| f.key == key)
}

pub fn for_category(category: Category) -> impl Iterator<Item = &'static FactorInfo> {
    CATALOG.iter().filter(move |f| f.category == category)
}

/// Display label, falling back to the key itself
pub fn label_for(key: &str) -> &str {
    lookup(key).map(|f| f.label).unwrap_or(key)
}
