use {
    serde::{Deserialize, Serialize},
    std::time::Duration,
    strum_macros::EnumIter,
};

use crate::utils::TimeUtils;

/// Time range of the historical chart. Exactly one is active at a time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    Default,
    clap::ValueEnum,
)]
pub enum Period {
    #[value(name = "1d")]
    D1,
    #[default]
    #[value(name = "7d")]
    D7,
    #[value(name = "30d")]
    D30,
    #[value(name = "1y")]
    Y1,
}

impl Period {
    pub const fn token(&self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::D7 => "7d",
            Self::D30 => "30d",
            Self::Y1 => "1y",
        }
    }

    /// Chip text, e.g. `7D`
    pub fn label(&self) -> String {
        self.token().to_uppercase()
    }

    pub const fn span(&self) -> Duration {
        match self {
            Self::D1 => days(1),
            Self::D7 => days(7),
            Self::D30 => days(30),
            Self::Y1 => days(365),
        }
    }

    /// Spacing between samples of a history for this period.
    pub const fn sample_step(&self) -> Duration {
        match self {
            Self::D1 => hours(1),
            Self::D7 => hours(4),
            Self::D30 => hours(12),
            Self::Y1 => days(7),
        }
    }

    pub fn sample_count(&self) -> usize {
        (self.span().as_secs() / self.sample_step().as_secs()) as usize
    }
}

const fn hours(n: u64) -> Duration {
    Duration::from_secs(n * TimeUtils::S_IN_H as u64)
}

const fn days(n: u64) -> Duration {
    Duration::from_secs(n * TimeUtils::S_IN_D as u64)
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_are_upper_case_tokens() {
        let labels: Vec<String> = Period::iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["1D", "7D", "30D", "1Y"]);
    }

    #[test]
    fn spans_match_calendar_lengths() {
        assert_eq!(Period::D1.span().as_secs(), 86_400);
        assert_eq!(Period::Y1.span().as_secs(), 365 * 86_400);
        assert_eq!(Period::D7.sample_step().as_secs(), 4 * 3_600);
    }

    #[test]
    fn sample_counts() {
        assert_eq!(Period::D1.sample_count(), 24);
        assert_eq!(Period::D7.sample_count(), 42);
        assert_eq!(Period::D30.sample_count(), 60);
        assert_eq!(Period::Y1.sample_count(), 52);
    }
}
