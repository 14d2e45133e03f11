//! Period chips under the chart.
//!
//! The selector never remembers anything: it is rebuilt from the caller's
//! active period each frame and turns a click into a `PeriodChange`.

use strum::IntoEnumIterator;

use crate::domain::Period;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodChip {
    pub period: Period,
    pub label: String,
    pub is_active: bool,
}

/// Emitted on every chip click, including a click on the active chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodChange {
    pub requested: Period,
    pub previous: Period,
}

impl PeriodChange {
    pub fn is_reselect(&self) -> bool {
        self.requested == self.previous
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSelector {
    active: Period,
}

impl PeriodSelector {
    pub fn new(active: Period) -> Self {
        Self { active }
    }

    pub fn chips(&self) -> Vec<PeriodChip> {
        Period::iter()
            .map(|period| PeriodChip {
                period,
                label: period.label(),
                is_active: period == self.active,
            })
            .collect()
    }

    pub fn select(&self, period: Period) -> PeriodChange {
        PeriodChange {
            requested: period,
            previous: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_chip_is_active() {
        let selector = PeriodSelector::new(Period::D30);
        let chips = selector.chips();
        assert_eq!(chips.len(), 4);
        let active: Vec<_> = chips.iter().filter(|c| c.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].period, Period::D30);
        assert_eq!(active[0].label, "30D");
    }

    #[test]
    fn reselecting_active_period_still_emits() {
        let selector = PeriodSelector::new(Period::D7);
        let change = selector.select(Period::D7);
        assert_eq!(change.requested, Period::D7);
        assert!(change.is_reselect());
    }

    #[test]
    fn selecting_other_period_reports_previous() {
        let change = PeriodSelector::new(Period::D1).select(Period::Y1);
        assert_eq!(
            change,
            PeriodChange {
                requested: Period::Y1,
                previous: Period::D1
            }
        );
        assert!(!change.is_reselect());
    }
}
