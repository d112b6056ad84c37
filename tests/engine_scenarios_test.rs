//! End-to-end behavior of the scoring engine with the reference weights.

mod common;

use common::{approx_eq, ratings, uniform_ratings};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use solar_risk::risk::insights::NO_RECOMMENDATIONS;
use solar_risk::{
    advisories, classify_indicator, classify_level, interpret, recommend, Advisory, Category,
    FactorRatings, Interpretation, RiskEngine, RiskLevel, ValidationError,
};

const OPERATIONAL: [&str; 4] = ["grid_connection", "om_provider", "regulatory", "site_access"];
const TECHNICAL: [&str; 4] = ["panel_tech", "inverter_tech", "system_design", "installation"];
const CLIMATE: [&str; 3] = ["weather_variability", "extreme_weather", "resource_stability"];

fn zip(names: &[&str], values: &[i64]) -> FactorRatings {
    names.iter().copied().zip(values.iter().copied()).collect()
}

#[test]
fn all_threes_scores_medium_with_no_recommendations() {
    let engine = RiskEngine::default();
    let scores = engine
        .compute_scores(
            &uniform_ratings(&engine, Category::Operational, 3),
            &uniform_ratings(&engine, Category::Technical, 3),
            &uniform_ratings(&engine, Category::Climate, 3),
        )
        .unwrap();

    for value in [
        scores.operational,
        scores.technical,
        scores.climate,
        scores.overall,
    ] {
        assert!(approx_eq(value, 3.0), "{value}");
        assert_eq!(classify_level(value), RiskLevel::MediumRisk);
    }
    assert_eq!(recommend(&scores), NO_RECOMMENDATIONS);
    assert_eq!(interpret(scores.overall), Interpretation::Good);
}

#[test]
fn weak_technical_category_gets_only_technical_advisory() {
    let engine = RiskEngine::default();
    let scores = engine
        .compute_scores(
            &ratings(&[
                ("grid_connection", 5),
                ("om_provider", 5),
                ("regulatory", 5),
                ("site_access", 5),
            ]),
            &uniform_ratings(&engine, Category::Technical, 1),
            &uniform_ratings(&engine, Category::Climate, 5),
        )
        .unwrap();

    assert!(approx_eq(scores.operational, 5.0));
    assert!(approx_eq(scores.technical, 1.0));
    assert!(approx_eq(scores.climate, 5.0));
    // 5.0 * 0.30 + 1.0 * 0.40 + 5.0 * 0.30
    assert!(approx_eq(scores.overall, 3.4), "{}", scores.overall);
    assert_eq!(classify_level(scores.overall), RiskLevel::MediumRisk);
    assert_eq!(classify_level(scores.technical), RiskLevel::VeryHighRisk);

    assert_eq!(
        advisories(&scores),
        vec![Advisory {
            category: Category::Technical
        }]
    );
    assert_eq!(
        recommend(&scores),
        "Technical: Review equipment selection and contractor experience."
    );
}

#[test]
fn rating_of_six_is_rejected() {
    let engine = RiskEngine::default();
    for category in Category::ALL {
        let mut inputs = Category::ALL.map(|c| uniform_ratings(&engine, c, 3));
        let index = Category::ALL.iter().position(|c| *c == category).unwrap();
        let factor = inputs[index].iter().next().map(|(f, _)| f.to_string()).unwrap();
        inputs[index].insert(factor.clone(), 6);

        let err = engine
            .compute_scores(&inputs[0], &inputs[1], &inputs[2])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::RatingOutOfRange {
                category: category.as_str().to_string(),
                factor,
                rating: 6,
            }
        );
    }
}

#[test]
fn missing_factor_is_rejected() {
    let engine = RiskEngine::default();
    let operational = ratings(&[
        ("grid_connection", 4),
        ("om_provider", 4),
        ("regulatory", 4),
    ]);

    let err = engine
        .compute_scores(
            &operational,
            &uniform_ratings(&engine, Category::Technical, 4),
            &uniform_ratings(&engine, Category::Climate, 4),
        )
        .unwrap_err();

    assert_eq!(
        err,
        ValidationError::missing_factor("operational", "site_access")
    );
}

#[test]
fn factor_from_another_category_is_unexpected() {
    let engine = RiskEngine::default();
    let climate = uniform_ratings(&engine, Category::Climate, 4).with("panel_tech", 4);

    let err = engine
        .compute_scores(
            &uniform_ratings(&engine, Category::Operational, 4),
            &uniform_ratings(&engine, Category::Technical, 4),
            &climate,
        )
        .unwrap_err();

    assert_eq!(err, ValidationError::unexpected_factor("climate", "panel_tech"));
}

#[test]
fn uniform_extremes_are_exact() {
    let engine = RiskEngine::default();
    for category in Category::ALL {
        for rating in [1, 5] {
            let score = engine
                .category_score(category, &uniform_ratings(&engine, category, rating))
                .unwrap();
            assert!(approx_eq(score, rating as f64), "{category} {rating} -> {score}");
        }
    }
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(RiskEngine::default());
    let handles: Vec<_> = (1..=5)
        .map(|rating| {
            let engine = std::sync::Arc::clone(&engine);
            std::thread::spawn(move || {
                engine
                    .compute_scores(
                        &uniform_ratings(&engine, Category::Operational, rating),
                        &uniform_ratings(&engine, Category::Technical, rating),
                        &uniform_ratings(&engine, Category::Climate, rating),
                    )
                    .map(|s| s.overall)
            })
        })
        .collect();

    for (rating, handle) in (1..=5).zip(handles) {
        let overall = handle.join().unwrap().unwrap();
        assert!(approx_eq(overall, rating as f64));
    }
}

fn rating_set() -> impl Strategy<Value = (Vec<i64>, Vec<i64>, Vec<i64>)> {
    (
        prop::collection::vec(1i64..=5, OPERATIONAL.len()),
        prop::collection::vec(1i64..=5, TECHNICAL.len()),
        prop::collection::vec(1i64..=5, CLIMATE.len()),
    )
}

proptest! {
    #[test]
    fn valid_ratings_stay_on_scale((op, tech, climate) in rating_set()) {
        let engine = RiskEngine::default();
        let scores = engine
            .compute_scores(&zip(&OPERATIONAL, &op), &zip(&TECHNICAL, &tech), &zip(&CLIMATE, &climate))
            .unwrap();

        for value in [scores.operational, scores.technical, scores.climate, scores.overall] {
            prop_assert!((1.0..=5.0).contains(&value), "{}", value);
        }
    }

    #[test]
    fn identical_inputs_give_identical_scores((op, tech, climate) in rating_set()) {
        let engine = RiskEngine::default();
        let (op, tech, climate) = (zip(&OPERATIONAL, &op), zip(&TECHNICAL, &tech), zip(&CLIMATE, &climate));

        let first = engine.compute_scores(&op, &tech, &climate).unwrap();
        let second = engine.compute_scores(&op, &tech, &climate).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn raising_a_rating_never_lowers_scores(
        (op, tech, climate) in rating_set(),
        pick in 0usize..11,
    ) {
        let engine = RiskEngine::default();
        let (mut op2, mut tech2, mut climate2) = (op.clone(), tech.clone(), climate.clone());
        let (slot, category) = match pick {
            0..=3 => (&mut op2[pick], Category::Operational),
            4..=7 => (&mut tech2[pick - 4], Category::Technical),
            _ => (&mut climate2[pick - 8], Category::Climate),
        };
        prop_assume!(*slot < 5);
        *slot += 1;

        let before = engine
            .compute_scores(&zip(&OPERATIONAL, &op), &zip(&TECHNICAL, &tech), &zip(&CLIMATE, &climate))
            .unwrap();
        let after = engine
            .compute_scores(&zip(&OPERATIONAL, &op2), &zip(&TECHNICAL, &tech2), &zip(&CLIMATE, &climate2))
            .unwrap();

        prop_assert!(after.category(category) >= before.category(category));
        prop_assert!(after.overall >= before.overall);
    }

    #[test]
    fn level_and_indicator_agree(score in 1.0..=5.0f64) {
        prop_assert_eq!(classify_indicator(score), classify_level(score).indicator());
    }
}
