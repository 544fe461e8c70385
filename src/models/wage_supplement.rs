//! Wage supplement rules and the rule set used during calculation.
//!
//! Rules are configured by an administrator and are read-only while shifts
//! are costed. [`SupplementRuleSet`] holds only the active rules, stably
//! ordered by ascending priority.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::time_window::{TimeWindow, hhmm_option};

/// The condition a supplement pays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplementType {
    /// Hours inside the night window.
    Night,
    /// Hours inside the evening window.
    Evening,
    /// Every hour of a weekend shift.
    Weekend,
    /// Every hour of a public holiday shift.
    Holiday,
}

impl std::fmt::Display for SupplementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SupplementType::Night => write!(f, "night"),
            SupplementType::Evening => write!(f, "evening"),
            SupplementType::Weekend => write!(f, "weekend"),
            SupplementType::Holiday => write!(f, "holiday"),
        }
    }
}

/// How a rule's `amount` is interpreted.
///
/// Only holiday rules distinguish the two; night, evening and weekend rules
/// always treat `amount` as an hourly amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountType {
    /// `amount` is a percentage of base pay.
    Percentage,
    /// `amount` is a fixed sum per hour.
    Fixed,
}

/// Which weekend day a weekend rule is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendDay {
    /// Saturday shifts.
    Saturday,
    /// Sunday shifts.
    Sunday,
    /// Saturday and Sunday shifts.
    Both,
    /// Not tied to a specific day.
    Any,
}

impl WeekendDay {
    /// Returns true when the rule is specifically for `weekday`.
    ///
    /// `Any` never counts as a specific match; it is only picked up by the
    /// first-in-list fallback.
    pub fn matches(self, weekday: Weekday) -> bool {
        matches!(
            (self, weekday),
            (WeekendDay::Saturday | WeekendDay::Both, Weekday::Sat)
                | (WeekendDay::Sunday | WeekendDay::Both, Weekday::Sun)
        )
    }

    /// Infers the day from a Norwegian rule name such as "Lørdagstillegg".
    ///
    /// Used for rule records that predate the explicit field. A name that
    /// mentions both days, like "Lørdag- og søndagstillegg", gives `Both`.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::WeekendDay;
    ///
    /// assert_eq!(WeekendDay::from_rule_name("Søndagstillegg"), WeekendDay::Sunday);
    /// assert_eq!(WeekendDay::from_rule_name("Helgetillegg"), WeekendDay::Any);
    /// assert_eq!(WeekendDay::from_rule_name("Lørdag- og søndagstillegg"), WeekendDay::Both);
    /// ```
    pub fn from_rule_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        match (lower.contains("lørdag"), lower.contains("søndag")) {
            (true, true) => WeekendDay::Both,
            (true, false) => WeekendDay::Saturday,
            (false, true) => WeekendDay::Sunday,
            (false, false) => WeekendDay::Any,
        }
    }
}

fn default_active() -> bool {
    true
}

/// A configured wage supplement rule.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AmountType, SupplementType, WageSupplementRule};
/// use rust_decimal::Decimal;
///
/// let rule = WageSupplementRule::new("night", "Nattillegg", SupplementType::Night, Decimal::new(55, 0))
///     .with_window("23:00", "06:00")
///     .unwrap();
/// assert_eq!(rule.amount_type, AmountType::Fixed);
/// assert!(rule.time_window().unwrap().wraps_midnight());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageSupplementRule {
    /// Unique identifier of the rule.
    pub id: String,
    /// Display name shown to administrators.
    pub name: String,
    /// What the rule pays for.
    #[serde(rename = "type")]
    pub supplement_type: SupplementType,
    /// How `amount` is interpreted.
    pub amount_type: AmountType,
    /// The rule's amount: an hourly sum or a percentage.
    pub amount: Decimal,
    /// Start of the qualifying time window, if any.
    #[serde(default, with = "hhmm_option")]
    pub time_start: Option<NaiveTime>,
    /// End of the qualifying time window, if any. May wrap past midnight.
    #[serde(default, with = "hhmm_option")]
    pub time_end: Option<NaiveTime>,
    /// Lower numbers are considered first.
    #[serde(default)]
    pub priority: i32,
    /// Inactive rules are ignored by all calculations.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Weekend day the rule targets. Inferred from the name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekend_day: Option<WeekendDay>,
}

impl WageSupplementRule {
    /// Creates an active fixed-amount rule with priority 0 and no time window.
    pub fn new(id: &str, name: &str, supplement_type: SupplementType, amount: Decimal) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            supplement_type,
            amount_type: AmountType::Fixed,
            amount,
            time_start: None,
            time_end: None,
            priority: 0,
            active: true,
            weekend_day: None,
        }
    }

    /// Sets the qualifying time window from `HH:MM` strings.
    pub fn with_window(mut self, start: &str, end: &str) -> crate::error::EngineResult<Self> {
        let window = TimeWindow::parse(start, end)?;
        self.time_start = Some(window.start);
        self.time_end = Some(window.end);
        Ok(self)
    }

    /// Sets how the amount is interpreted.
    pub fn with_amount_type(mut self, amount_type: AmountType) -> Self {
        self.amount_type = amount_type;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the targeted weekend day.
    pub fn with_weekend_day(mut self, day: WeekendDay) -> Self {
        self.weekend_day = Some(day);
        self
    }

    /// Marks the rule inactive.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// The qualifying window when both ends are configured.
    pub fn time_window(&self) -> Option<TimeWindow> {
        match (self.time_start, self.time_end) {
            (Some(start), Some(end)) => Some(TimeWindow::new(start, end)),
            _ => None,
        }
    }

    /// The weekend day this rule targets, `Any` when unset.
    pub fn weekend_day(&self) -> WeekendDay {
        self.weekend_day.unwrap_or(WeekendDay::Any)
    }
}

/// The active supplement rules, stably sorted by ascending priority.
///
/// Building a rule set is the only way calculations see rules, so "active and
/// in priority order" holds for every lookup. Weekend rules without an explicit
/// [`WeekendDay`] get one inferred from their name here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<WageSupplementRule>", into = "Vec<WageSupplementRule>")]
pub struct SupplementRuleSet {
    rules: Vec<WageSupplementRule>,
}

impl SupplementRuleSet {
    /// Builds a rule set, dropping inactive rules and sorting by priority.
    pub fn new(rules: impl IntoIterator<Item = WageSupplementRule>) -> Self {
        let mut rules: Vec<WageSupplementRule> = rules
            .into_iter()
            .filter(|rule| rule.active)
            .map(|mut rule| {
                if rule.supplement_type == SupplementType::Weekend && rule.weekend_day.is_none() {
                    rule.weekend_day = Some(WeekendDay::from_rule_name(&rule.name));
                }
                rule
            })
            .collect();
        rules.sort_by_key(|rule| rule.priority);
        Self { rules }
    }

    /// All active rules in priority order.
    pub fn rules(&self) -> &[WageSupplementRule] {
        &self.rules
    }

    /// Active rules of one type, in priority order.
    pub fn of_type(
        &self,
        supplement_type: SupplementType,
    ) -> impl Iterator<Item = &WageSupplementRule> + '_ {
        self.rules
            .iter()
            .filter(move |rule| rule.supplement_type == supplement_type)
    }

    /// Number of active rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true when no active rules are configured.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<WageSupplementRule>> for SupplementRuleSet {
    fn from(rules: Vec<WageSupplementRule>) -> Self {
        Self::new(rules)
    }
}

impl From<SupplementRuleSet> for Vec<WageSupplementRule> {
    fn from(set: SupplementRuleSet) -> Self {
        set.rules
    }
}
