// ABOUTME: Integration tests for meal plan storage and goal suggestion
// ABOUTME: Single-active invariant and nutrition-engine-derived targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use fittrack::context::AppContext;
use fittrack::demo::DEMO_PATIENT_ID;
use fittrack::meal_plans::MealPlanStore;
use fittrack::nutrition::{ActivityLevel, MacroRatio};
use fittrack_core::models::{FoodItem, Meal, MealPlan, NutritionGoals};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn plan(id: &str, patient_id: &str, day: NaiveDate, active: bool) -> MealPlan {
    MealPlan {
        id: id.into(),
        patient_id: patient_id.into(),
        date: day,
        goals: NutritionGoals {
            calories: 2400.0,
            protein: 180.0,
            carbs: 240.0,
            fat: 80.0,
            activity_level: "moderate".into(),
        },
        meals: vec![Meal {
            id: format!("{id}-m1"),
            name: "Breakfast".into(),
            time: "07:30".into(),
            foods: vec![FoodItem {
                id: format!("{id}-f1"),
                name: "Oats".into(),
                calories: 389.0,
                protein: 16.9,
                carbs: 66.3,
                fat: 6.9,
                amount: "100g".into(),
            }],
        }],
        active,
    }
}

#[test]
fn test_upsert_and_list_by_patient_newest_first() {
    let ctx = AppContext::in_memory();
    let store = ctx.meal_plans();

    store
        .upsert(plan("mp1", DEMO_PATIENT_ID, date(2025, 3, 1), false))
        .unwrap();
    store
        .upsert(plan("mp2", DEMO_PATIENT_ID, date(2025, 9, 1), false))
        .unwrap();
    store.upsert(plan("mp3", "other", date(2025, 6, 1), true)).unwrap();

    let plans = store.list_by_patient(DEMO_PATIENT_ID).unwrap();
    let ids: Vec<&str> = plans.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["mp2", "mp1"]);
}

#[test]
fn test_activating_a_plan_deactivates_siblings() {
    let ctx = AppContext::in_memory();
    let store = ctx.meal_plans();

    store
        .upsert(plan("mp1", DEMO_PATIENT_ID, date(2025, 3, 1), true))
        .unwrap();
    store
        .upsert(plan("mp2", DEMO_PATIENT_ID, date(2025, 9, 1), true))
        .unwrap();
    // Another patient's active plan is untouched
    store.upsert(plan("mp3", "other", date(2025, 6, 1), true)).unwrap();

    let active = store.active_for(DEMO_PATIENT_ID).unwrap().unwrap();
    assert_eq!(active.id, "mp2");
    assert!(store.active_for("other").unwrap().is_some());

    let actives = store
        .list_by_patient(DEMO_PATIENT_ID)
        .unwrap()
        .into_iter()
        .filter(|p| p.active)
        .count();
    assert_eq!(actives, 1);
}

#[test]
fn test_upsert_replaces_by_identifier() {
    let ctx = AppContext::in_memory();
    let store = ctx.meal_plans();

    store
        .upsert(plan("mp1", DEMO_PATIENT_ID, date(2025, 3, 1), false))
        .unwrap();
    let mut revised = plan("mp1", DEMO_PATIENT_ID, date(2025, 3, 1), false);
    revised.goals.calories = 2100.0;
    store.upsert(revised).unwrap();

    let plans = store.list_by_patient(DEMO_PATIENT_ID).unwrap();
    assert_eq!(plans.len(), 1);
    assert!((plans[0].goals.calories - 2100.0).abs() < f64::EPSILON);
}

#[test]
fn test_suggested_goals_come_from_the_nutrition_engine() {
    let ctx = AppContext::in_memory();
    let patient = ctx.patients().get_required(DEMO_PATIENT_ID).unwrap();

    let goals = MealPlanStore::suggest_goals(
        &patient,
        80.0,
        ActivityLevel::Moderate,
        MacroRatio {
            protein_pct: 30.0,
            carbs_pct: 40.0,
            fat_pct: 30.0,
        },
        date(2025, 12, 23),
    )
    .unwrap();

    // Male, 180 cm, age 35 at the reference date, 80 kg:
    // BMR 1755, moderate multiplier 1.55 -> 2720 kcal
    assert!((goals.calories - 2720.0).abs() < f64::EPSILON);
    assert!((goals.protein - 204.0).abs() < f64::EPSILON);
    assert!((goals.carbs - 272.0).abs() < f64::EPSILON);
    assert!((goals.fat - 91.0).abs() < f64::EPSILON);
    assert_eq!(goals.activity_level, "moderate");
}

#[test]
fn test_meal_totals_aggregate_foods() {
    let sample = plan("mp1", DEMO_PATIENT_ID, date(2025, 3, 1), false);
    assert!((sample.total_calories() - 389.0).abs() < f64::EPSILON);
}
