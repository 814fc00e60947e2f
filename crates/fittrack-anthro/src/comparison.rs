// ABOUTME: Longitudinal assessment comparison with chronological pairing
// ABOUTME: Delta computation, improvement classification, and selection state machine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 fittrack

//! Before/after analysis over a patient's assessment history.
//!
//! Two user-chosen assessments are always resolved into chronological
//! `(before, after)` order; per-metric signed deltas are classified as
//! improved, worsened, or unchanged with the polarity declared explicitly
//! by the caller. Selection follows a strict gating policy: an "after"
//! candidate must postdate the chosen "before", and changing "before"
//! invalidates an "after" that no longer qualifies.

use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::Assessment;
use serde::{Deserialize, Serialize};

/// Deltas with absolute value below this count as unchanged
pub const UNCHANGED_EPSILON: f64 = fittrack_core::constants::limits::UNCHANGED_EPSILON;

/// Resolve two assessments into chronological `(before, after)` order
///
/// The assessment with the strictly earlier date becomes `before`. Equal
/// dates keep the argument order, so the resolution is deterministic and
/// idempotent under argument swap for distinct dates.
#[must_use]
pub fn order_pair<'a>(
    a: &'a Assessment,
    b: &'a Assessment,
) -> (&'a Assessment, &'a Assessment) {
    if b.date < a.date {
        (b, a)
    } else {
        (a, b)
    }
}

/// Valid "after" candidates once a "before" assessment is chosen
///
/// Only assessments dated strictly later than `before` qualify; `before`
/// itself never appears in the result.
#[must_use]
pub fn selectable_after<'a>(
    candidates: &'a [Assessment],
    before: &Assessment,
) -> Vec<&'a Assessment> {
    candidates
        .iter()
        .filter(|a| a.id != before.id && a.date > before.date)
        .collect()
}

/// Qualitative direction of a metric change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeltaStatus {
    /// The change moved the metric in the desired direction
    Improved,
    /// The change moved the metric against the desired direction
    Worsened,
    /// The change was below the reporting threshold
    Unchanged,
}

/// The metrics tracked in a before/after report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrackedMetric {
    /// Body weight (kg); tracked weight-loss-oriented
    Weight,
    /// Body-fat percentage
    BodyFatPercentage,
    /// Lean mass (kg); gaining is improvement
    LeanMass,
    /// Sum of the seven skinfolds (mm)
    SumSkinfolds,
}

impl TrackedMetric {
    /// Display unit for the metric
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Weight | Self::LeanMass => "kg",
            Self::BodyFatPercentage => "%",
            Self::SumSkinfolds => "mm",
        }
    }

    /// Whether an increase in this metric counts as improvement
    #[must_use]
    pub const fn higher_is_better(self) -> bool {
        matches!(self, Self::LeanMass)
    }
}

/// Classify a signed delta given the metric's declared polarity
///
/// Deltas with absolute value below [`UNCHANGED_EPSILON`] are `Unchanged`
/// regardless of polarity. Otherwise the sign decides, inverted for
/// metrics where higher is better.
#[must_use]
pub fn classify_delta(delta: f64, higher_is_better: bool) -> DeltaStatus {
    if delta.abs() < UNCHANGED_EPSILON {
        return DeltaStatus::Unchanged;
    }
    let improved = if higher_is_better {
        delta > 0.0
    } else {
        delta < 0.0
    };
    if improved {
        DeltaStatus::Improved
    } else {
        DeltaStatus::Worsened
    }
}

/// One metric's before/after values with its classified change
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDelta {
    /// Which metric this row tracks
    pub metric: TrackedMetric,
    /// Value at the earlier assessment
    pub before: f64,
    /// Value at the later assessment
    pub after: f64,
    /// Signed change, `after - before`
    pub delta: f64,
    /// Qualitative direction given the metric's polarity
    pub status: DeltaStatus,
}

/// Signed changes between two chronologically ordered assessments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaReport {
    /// Identifier of the earlier assessment
    pub before_id: String,
    /// Identifier of the later assessment
    pub after_id: String,
    /// Whole days between the two assessment dates
    pub elapsed_days: i64,
    /// Per-metric rows in fixed display order
    pub deltas: Vec<MetricDelta>,
}

impl DeltaReport {
    /// Look up the row for a tracked metric
    #[must_use]
    pub fn metric(&self, metric: TrackedMetric) -> Option<&MetricDelta> {
        self.deltas.iter().find(|d| d.metric == metric)
    }
}

fn metric_values(assessment: &Assessment, metric: TrackedMetric) -> f64 {
    match metric {
        TrackedMetric::Weight => assessment.weight_kg,
        TrackedMetric::BodyFatPercentage => assessment.metrics.body_fat_percentage,
        TrackedMetric::LeanMass => assessment.metrics.lean_mass_kg,
        TrackedMetric::SumSkinfolds => assessment.metrics.sum_skinfolds,
    }
}

/// Compute the delta report for two assessments of the same patient
///
/// The pair is resolved through [`order_pair`] first, so argument order
/// cannot invert the report.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the assessments belong to
/// different patients.
pub fn compute_deltas(a: &Assessment, b: &Assessment) -> AppResult<DeltaReport> {
    if a.patient_id != b.patient_id {
        return Err(AppError::invalid_input(format!(
            "Cannot compare assessments of different patients ({} vs {})",
            a.patient_id, b.patient_id
        )));
    }

    let (before, after) = order_pair(a, b);
    let elapsed_days = (after.date - before.date).num_days();

    let deltas = [
        TrackedMetric::Weight,
        TrackedMetric::BodyFatPercentage,
        TrackedMetric::LeanMass,
        TrackedMetric::SumSkinfolds,
    ]
    .into_iter()
    .map(|metric| {
        let before_value = metric_values(before, metric);
        let after_value = metric_values(after, metric);
        let delta = after_value - before_value;
        MetricDelta {
            metric,
            before: before_value,
            after: after_value,
            delta,
            status: classify_delta(delta, metric.higher_is_better()),
        }
    })
    .collect();

    Ok(DeltaReport {
        before_id: before.id.clone(),
        after_id: after.id.clone(),
        elapsed_days,
        deltas,
    })
}

/// Progress of the two-slot comparison selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing chosen yet
    NoneSelected,
    /// A "before" assessment is chosen; "after" still open
    BeforeSelected,
    /// Both slots are filled with a valid chronological pair
    BothSelected,
}

/// Two-slot selection with strict chronological gating
///
/// Selecting "before" is always allowed. Selecting "after" requires a
/// chosen "before" and a candidate dated strictly later. Re-choosing
/// "before" clears an "after" that no longer postdates it, reverting to
/// `BeforeSelected`.
///
/// Comparison must not be offered for patients with fewer than two
/// assessments; that precondition belongs to the caller.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSelection {
    before_id: Option<String>,
    after_id: Option<String>,
}

impl ComparisonSelection {
    /// Fresh selection with both slots empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current progress through the selection flow
    #[must_use]
    pub const fn state(&self) -> SelectionState {
        match (&self.before_id, &self.after_id) {
            (None, _) => SelectionState::NoneSelected,
            (Some(_), None) => SelectionState::BeforeSelected,
            (Some(_), Some(_)) => SelectionState::BothSelected,
        }
    }

    /// Identifier currently in the "before" slot
    #[must_use]
    pub fn before_id(&self) -> Option<&str> {
        self.before_id.as_deref()
    }

    /// Identifier currently in the "after" slot
    #[must_use]
    pub fn after_id(&self) -> Option<&str> {
        self.after_id.as_deref()
    }

    /// Choose the "before" assessment
    ///
    /// Always allowed. If an "after" is already chosen and no longer
    /// strictly postdates the new "before", it is cleared.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ResourceNotFound` if `id` is not among
    /// `assessments`.
    pub fn select_before(&mut self, assessments: &[Assessment], id: &str) -> AppResult<()> {
        let before = find(assessments, id)?;

        let stale = match self.after_id.as_deref() {
            Some(after_id) => {
                find(assessments, after_id).map_or(true, |after| after.date <= before.date)
            }
            None => false,
        };
        if stale {
            tracing::debug!("clearing stale after-selection");
            self.after_id = None;
        }

        self.before_id = Some(before.id.clone());
        Ok(())
    }

    /// Choose the "after" assessment
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when no "before" is chosen or the
    /// candidate does not strictly postdate it, and
    /// `AppError::ResourceNotFound` if `id` is not among `assessments`.
    pub fn select_after(&mut self, assessments: &[Assessment], id: &str) -> AppResult<()> {
        let before_id = self
            .before_id
            .as_deref()
            .ok_or_else(|| AppError::invalid_input("Select a \"before\" assessment first"))?;
        let before = find(assessments, before_id)?;
        let candidate = find(assessments, id)?;

        if !selectable_after(assessments, before)
            .iter()
            .any(|a| a.id == candidate.id)
        {
            return Err(AppError::invalid_input(format!(
                "Assessment {} on {} does not postdate the selected \"before\" ({})",
                candidate.id, candidate.date, before.date
            )));
        }

        self.after_id = Some(candidate.id.clone());
        Ok(())
    }

    /// Empty both slots
    pub fn clear(&mut self) {
        self.before_id = None;
        self.after_id = None;
    }

    /// The chosen pair in chronological order, once both slots are filled
    #[must_use]
    pub fn resolved_pair<'a>(
        &self,
        assessments: &'a [Assessment],
    ) -> Option<(&'a Assessment, &'a Assessment)> {
        let before = find(assessments, self.before_id.as_deref()?).ok()?;
        let after = find(assessments, self.after_id.as_deref()?).ok()?;
        Some(order_pair(before, after))
    }
}

fn find<'a>(assessments: &'a [Assessment], id: &str) -> AppResult<&'a Assessment> {
    assessments
        .iter()
        .find(|a| a.id == id)
        .ok_or_else(|| AppError::not_found(format!("assessment {id}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::NaiveDate;
    use fittrack_core::models::{BodyMetrics, SkinfoldSet};

    fn assessment(id: &str, date: (i32, u32, u32), weight: f64) -> Assessment {
        Assessment {
            id: id.into(),
            patient_id: "p1".into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            weight_kg: weight,
            skinfolds: SkinfoldSet {
                triceps: 10.0,
                subscapular: 10.0,
                biceps: 10.0,
                mid_axillary: 10.0,
                suprailiac: 10.0,
                abdominal: 10.0,
                thigh: 10.0,
            },
            metrics: BodyMetrics {
                body_density: 1.05,
                body_fat_percentage: 20.0,
                fat_mass_kg: weight * 0.2,
                lean_mass_kg: weight * 0.8,
                sum_skinfolds: 70.0,
            },
            photos: None,
            notes: None,
        }
    }

    #[test]
    fn order_pair_is_swap_idempotent() {
        let early = assessment("a", (2025, 1, 15), 88.0);
        let late = assessment("b", (2025, 12, 23), 80.0);

        let (b1, a1) = order_pair(&early, &late);
        let (b2, a2) = order_pair(&late, &early);
        assert_eq!(b1.id, b2.id);
        assert_eq!(a1.id, a2.id);
        assert_eq!(b1.id, "a");
    }

    #[test]
    fn order_pair_equal_dates_keeps_argument_order() {
        let x = assessment("x", (2025, 6, 1), 80.0);
        let y = assessment("y", (2025, 6, 1), 81.0);
        let (before, after) = order_pair(&x, &y);
        assert_eq!(before.id, "x");
        assert_eq!(after.id, "y");
    }

    #[test]
    fn selectable_after_excludes_before_and_earlier_dates() {
        let list = vec![
            assessment("a", (2025, 1, 15), 88.0),
            assessment("b", (2025, 6, 10), 85.0),
            assessment("c", (2025, 6, 10), 85.0),
            assessment("d", (2025, 12, 23), 80.0),
        ];
        let after = selectable_after(&list, &list[1]);
        let ids: Vec<&str> = after.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["d"]);
    }

    #[test]
    fn classify_respects_epsilon_regardless_of_polarity() {
        for polarity in [true, false] {
            assert_eq!(classify_delta(0.009, polarity), DeltaStatus::Unchanged);
            assert_eq!(classify_delta(-0.009, polarity), DeltaStatus::Unchanged);
        }
    }

    #[test]
    fn classify_inverts_for_higher_is_better() {
        assert_eq!(classify_delta(-1.5, false), DeltaStatus::Improved);
        assert_eq!(classify_delta(1.5, false), DeltaStatus::Worsened);
        assert_eq!(classify_delta(1.5, true), DeltaStatus::Improved);
        assert_eq!(classify_delta(-1.5, true), DeltaStatus::Worsened);
    }

    #[test]
    fn compute_deltas_orders_and_signs() {
        let early = assessment("a", (2025, 1, 15), 88.0);
        let late = assessment("b", (2025, 12, 23), 80.0);

        // Argument order must not matter
        let report = compute_deltas(&late, &early).unwrap();
        assert_eq!(report.before_id, "a");
        assert_eq!(report.after_id, "b");
        assert_eq!(report.elapsed_days, 342);

        let weight = report.metric(TrackedMetric::Weight).unwrap();
        assert!((weight.delta + 8.0).abs() < 1e-9);
        assert_eq!(weight.status, DeltaStatus::Improved);
    }

    #[test]
    fn compute_deltas_rejects_cross_patient_pairs() {
        let a = assessment("a", (2025, 1, 15), 88.0);
        let mut b = assessment("b", (2025, 12, 23), 80.0);
        b.patient_id = "p2".into();
        assert!(compute_deltas(&a, &b).is_err());
    }

    #[test]
    fn selection_walks_the_states() {
        let list = vec![
            assessment("a", (2025, 1, 15), 88.0),
            assessment("b", (2025, 6, 10), 85.0),
            assessment("c", (2025, 12, 23), 80.0),
        ];
        let mut selection = ComparisonSelection::new();
        assert_eq!(selection.state(), SelectionState::NoneSelected);

        selection.select_before(&list, "a").unwrap();
        assert_eq!(selection.state(), SelectionState::BeforeSelected);

        selection.select_after(&list, "c").unwrap();
        assert_eq!(selection.state(), SelectionState::BothSelected);

        let (before, after) = selection.resolved_pair(&list).unwrap();
        assert_eq!(before.id, "a");
        assert_eq!(after.id, "c");
    }

    #[test]
    fn selecting_after_without_before_is_rejected() {
        let list = vec![assessment("a", (2025, 1, 15), 88.0)];
        let mut selection = ComparisonSelection::new();
        assert!(selection.select_after(&list, "a").is_err());
    }

    #[test]
    fn selecting_an_earlier_after_is_rejected() {
        let list = vec![
            assessment("a", (2025, 1, 15), 88.0),
            assessment("b", (2025, 6, 10), 85.0),
        ];
        let mut selection = ComparisonSelection::new();
        selection.select_before(&list, "b").unwrap();
        assert!(selection.select_after(&list, "a").is_err());
    }

    #[test]
    fn changing_before_clears_a_stale_after() {
        let list = vec![
            assessment("a", (2025, 1, 15), 88.0),
            assessment("b", (2025, 6, 10), 85.0),
            assessment("c", (2025, 12, 23), 80.0),
        ];
        let mut selection = ComparisonSelection::new();
        selection.select_before(&list, "a").unwrap();
        selection.select_after(&list, "b").unwrap();
        assert_eq!(selection.state(), SelectionState::BothSelected);

        // "b" no longer postdates the new before "c"
        selection.select_before(&list, "c").unwrap();
        assert_eq!(selection.state(), SelectionState::BeforeSelected);
        assert_eq!(selection.after_id(), None);

        // A still-later after survives a before change
        selection.clear();
        selection.select_before(&list, "a").unwrap();
        selection.select_after(&list, "c").unwrap();
        selection.select_before(&list, "b").unwrap();
        assert_eq!(selection.state(), SelectionState::BothSelected);
        assert_eq!(selection.after_id(), Some("c"));
    }
}
