//! Per-employee sick-leave summaries.
//!
//! Spans are apportioned against the period, the contributing fragments are
//! folded in input order, and employees are summarized in parallel.

use std::collections::HashMap;

use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{
    PayrollPeriod, SickLeaveFragment, SickLeavePayrollSummary, SickLeaveSpan, SickLeaveStatus,
};

use super::sick_leave_apportion::apportion_sick_leave;

/// How fragment percentages are averaged into one figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageAveraging {
    /// Plain mean over fragments, each fragment counting once.
    #[default]
    FragmentMean,
    /// Mean weighted by each fragment's days inside the period.
    DayWeighted,
}

/// Lookup of employee display names.
pub trait EmployeeDirectory {
    /// Returns the display name for `employee_id`, if known.
    fn display_name(&self, employee_id: &str) -> Option<String>;
}

impl EmployeeDirectory for HashMap<String, String> {
    fn display_name(&self, employee_id: &str) -> Option<String> {
        self.get(employee_id).cloned()
    }
}

/// A directory that knows no one.
impl EmployeeDirectory for () {
    fn display_name(&self, _employee_id: &str) -> Option<String> {
        None
    }
}

/// Averages the fragments' percentages; zero when there are no fragments.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{average_percentage, PercentageAveraging};
/// use rust_decimal::Decimal;
///
/// assert_eq!(average_percentage(&[], PercentageAveraging::FragmentMean), Decimal::ZERO);
/// ```
pub fn average_percentage(fragments: &[SickLeaveFragment], averaging: PercentageAveraging) -> Decimal {
    let (weighted_sum, weight) = fragments.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(sum, weight), fragment| {
            let w = match averaging {
                PercentageAveraging::FragmentMean => Decimal::ONE,
                PercentageAveraging::DayWeighted => Decimal::from(fragment.total_days),
            };
            (sum + fragment.percentage * w, weight + w)
        },
    );

    if weight.is_zero() {
        Decimal::ZERO
    } else {
        weighted_sum / weight
    }
}

fn fragment_of(span: &SickLeaveSpan, period: &PayrollPeriod) -> Option<SickLeaveFragment> {
    if span.status == SickLeaveStatus::Cancelled {
        return None;
    }
    let apportioned = apportion_sick_leave(span, period);
    apportioned.contributes().then(|| SickLeaveFragment {
        span_id: span.id.clone(),
        effective_start: apportioned.effective_start,
        effective_end: apportioned.effective_end,
        total_days: apportioned.total_days,
        employer_days: apportioned.employer_days,
        nav_days: apportioned.nav_days,
        percentage: span.percentage,
    })
}

/// Summarizes one employee's spans for a payroll period.
///
/// Cancelled spans and spans without days inside the period are left out;
/// the rest are summed in input order without deduplication.
///
/// # Errors
///
/// Returns `InvalidPeriod` for a reversed period and `InvalidSickLeave` for a
/// span whose percentage lies outside `0..=100`.
pub fn summarize_employee_sick_leave<'a>(
    employee_id: &str,
    spans: impl IntoIterator<Item = &'a SickLeaveSpan>,
    period: &PayrollPeriod,
    averaging: PercentageAveraging,
    directory: &(impl EmployeeDirectory + ?Sized),
) -> EngineResult<SickLeavePayrollSummary> {
    period.validate()?;

    let mut fragments = Vec::new();
    for span in spans {
        span.validate()?;
        if let Some(fragment) = fragment_of(span, period) {
            fragments.push(fragment);
        }
    }

    let (total_sick_days, employer_period_days, nav_period_days) = fragments.iter().fold(
        (0, 0, 0),
        |(total, employer, nav), fragment| {
            (
                total + fragment.total_days,
                employer + fragment.employer_days,
                nav + fragment.nav_days,
            )
        },
    );

    debug!(
        employee_id = %employee_id,
        fragments = fragments.len(),
        total_sick_days,
        "Sick leave summarized"
    );

    Ok(SickLeavePayrollSummary {
        employee_id: employee_id.to_string(),
        employee_name: directory.display_name(employee_id),
        total_sick_days,
        employer_period_days,
        nav_period_days,
        weighted_percentage: average_percentage(&fragments, averaging),
        fragments,
    })
}

/// Summarizes sick leave for every employee appearing in `spans`.
///
/// Employees are returned in order of first appearance. Employees whose
/// spans contribute no days to the period are omitted.
///
/// # Errors
///
/// Returns `InvalidPeriod` for a reversed period, otherwise the
/// `InvalidSickLeave` error of the first invalid span in input order. Spans
/// are validated before any employee is summarized.
pub fn summarize_sick_leave<D>(
    spans: &[SickLeaveSpan],
    period: &PayrollPeriod,
    averaging: PercentageAveraging,
    directory: &D,
) -> EngineResult<Vec<SickLeavePayrollSummary>>
where
    D: EmployeeDirectory + Sync + ?Sized,
{
    period.validate()?;

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&SickLeaveSpan>)> = Vec::new();
    for span in spans {
        span.validate()?;
        let slot = *index.entry(span.employee_id.as_str()).or_insert_with(|| {
            groups.push((span.employee_id.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(span);
    }

    let summaries = groups
        .par_iter()
        .map(|(employee_id, employee_spans)| {
            summarize_employee_sick_leave(
                employee_id,
                employee_spans.iter().copied(),
                period,
                averaging,
                directory,
            )
        })
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(summaries
        .into_iter()
        .filter(|summary| !summary.fragments.is_empty())
        .collect())
}
