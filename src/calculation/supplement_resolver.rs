//! Wage supplement resolution for a single shift.
//!
//! Given the active rule set and a shift's base hours and base cost, this
//! module decides which night, evening, weekend and holiday rules apply and
//! what each one pays.

use std::collections::BTreeMap;

use chrono::Weekday;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AmountType, AppliedSupplement, Shift, SupplementRuleSet, SupplementType, WageSupplementRule,
};

use super::time_overlap::calculate_overlap_hours;

/// Supplements that applied to one shift, keyed by type.
///
/// A type missing from the map pays nothing for the shift.
pub type ResolvedSupplements = BTreeMap<SupplementType, AppliedSupplement>;

/// Resolves every supplement that applies to `shift`.
///
/// - Night and evening: the first rule of the type with a time window; hours
///   are the overlap of the shift with that window and the cost is hours ×
///   amount, whatever the amount type.
/// - Weekend: only for weekend shifts; see [`select_weekend_rule`]. Cost is
///   base hours × amount.
/// - Holiday: only for holiday shifts, using the first holiday rule. A
///   percentage rule pays base cost × amount / 100, a fixed rule base hours ×
///   amount.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_supplements;
/// use payroll_engine::models::{Shift, SupplementRuleSet, SupplementType, WageSupplementRule};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = SupplementRuleSet::new(vec![
///     WageSupplementRule::new("night", "Nattillegg", SupplementType::Night, Decimal::new(50, 0))
///         .with_window("23:00", "06:00")
///         .unwrap(),
/// ]);
/// let shift = Shift::new("s1", NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), "22:00", "06:00").unwrap();
///
/// let resolved =
///     resolve_supplements(&shift, Decimal::new(8, 0), Decimal::new(1600, 0), &rules)
///         .unwrap();
/// let night = &resolved[&SupplementType::Night];
/// assert_eq!(night.hours, Decimal::new(7, 0));
/// assert_eq!(night.cost, Decimal::new(350, 0));
/// ```
pub fn resolve_supplements(
    shift: &Shift,
    base_hours: Decimal,
    base_cost: Decimal,
    rules: &SupplementRuleSet,
) -> EngineResult<ResolvedSupplements> {
    let mut resolved = ResolvedSupplements::new();

    for supplement_type in [SupplementType::Night, SupplementType::Evening] {
        if let Some(applied) = resolve_timed(shift, rules, supplement_type)? {
            resolved.insert(supplement_type, applied);
        }
    }

    if shift.is_weekend {
        if let Some(rule) = select_weekend_rule(rules, shift.day_of_week()) {
            let cost = supplement_cost(shift, rule, base_hours.checked_mul(rule.amount))?;
            resolved.insert(SupplementType::Weekend, applied(rule, base_hours, cost));
        }
    }

    if shift.is_holiday {
        if let Some(rule) = rules.of_type(SupplementType::Holiday).next() {
            let cost = match rule.amount_type {
                AmountType::Percentage => rule
                    .amount
                    .checked_div(Decimal::ONE_HUNDRED)
                    .and_then(|share| base_cost.checked_mul(share)),
                AmountType::Fixed => base_hours.checked_mul(rule.amount),
            };
            let cost = supplement_cost(shift, rule, cost)?;
            resolved.insert(SupplementType::Holiday, applied(rule, base_hours, cost));
        }
    }

    Ok(resolved)
}

/// Picks the weekend rule for a shift starting on `weekday`.
///
/// Returns the first weekend rule (priority order) targeting that exact day,
/// falling back to the first weekend rule of any kind.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::select_weekend_rule;
/// use payroll_engine::models::{SupplementRuleSet, SupplementType, WageSupplementRule};
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// let rules = SupplementRuleSet::new(vec![
///     WageSupplementRule::new("sat", "Lørdagstillegg", SupplementType::Weekend, Decimal::new(30, 0)),
///     WageSupplementRule::new("sun", "Søndagstillegg", SupplementType::Weekend, Decimal::new(60, 0)),
/// ]);
///
/// assert_eq!(select_weekend_rule(&rules, Weekday::Sun).unwrap().id, "sun");
/// // No rule targets Friday, so the first weekend rule is used.
/// assert_eq!(select_weekend_rule(&rules, Weekday::Fri).unwrap().id, "sat");
/// ```
pub fn select_weekend_rule(
    rules: &SupplementRuleSet,
    weekday: Weekday,
) -> Option<&WageSupplementRule> {
    let named = rules
        .of_type(SupplementType::Weekend)
        .find(|rule| rule.weekend_day().matches(weekday));

    named.or_else(|| {
        let fallback = rules.of_type(SupplementType::Weekend).next();
        if let Some(rule) = fallback {
            debug!(
                rule_id = %rule.id,
                weekday = ?weekday,
                "No weekend rule targets this day, using first weekend rule"
            );
        }
        fallback
    })
}

/// Resolves a night or evening supplement from the shift's window overlap.
fn resolve_timed(
    shift: &Shift,
    rules: &SupplementRuleSet,
    supplement_type: SupplementType,
) -> EngineResult<Option<AppliedSupplement>> {
    let Some((rule, window)) = rules
        .of_type(supplement_type)
        .find_map(|rule| rule.time_window().map(|window| (rule, window)))
    else {
        return Ok(None);
    };

    let hours = calculate_overlap_hours(shift.window(), window);
    if hours.is_zero() {
        return Ok(None);
    }

    let cost = supplement_cost(shift, rule, hours.checked_mul(rule.amount))?;
    Ok(Some(applied(rule, hours, cost)))
}

fn supplement_cost(
    shift: &Shift,
    rule: &WageSupplementRule,
    cost: Option<Decimal>,
) -> EngineResult<Decimal> {
    cost.ok_or_else(|| {
        EngineError::overflow(format_args!(
            "supplement '{}' for shift '{}'",
            rule.id, shift.id
        ))
    })
}

fn applied(rule: &WageSupplementRule, hours: Decimal, cost: Decimal) -> AppliedSupplement {
    AppliedSupplement {
        rule_id: rule.id.clone(),
        rule_name: rule.name.clone(),
        hours,
        cost,
    }
}
