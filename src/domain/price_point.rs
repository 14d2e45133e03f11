use {
    itertools::{Itertools, MinMaxResult},
    serde::{Deserialize, Serialize},
};

/// One sample of a price history.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    /// Unix seconds
    pub timestamp: i64,
    pub price: f64,
}

impl PricePoint {
    pub const fn new(timestamp: i64, price: f64) -> Self {
        Self { timestamp, price }
    }
}

/// Samples ordered by ascending timestamp. May be empty.
pub type Series = Vec<PricePoint>;

/// Lowest and highest price of a series, computed by whoever owns the series.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
}

impl Extrema {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Min and max over the finite prices of `points`.
    pub fn of(points: &[PricePoint]) -> Option<Self> {
        let prices = points.iter().map(|p| p.price).filter(|p| p.is_finite());
        match prices.minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(p) => Some(Self::new(p, p)),
            MinMaxResult::MinMax(min, max) => Some(Self::new(min, max)),
        }
    }

    #[inline]
    pub fn is_flat(&self) -> bool {
        self.min == self.max
    }
}

pub fn is_chronological(points: &[PricePoint]) -> bool {
    points.windows(2).all(|w| w[0].timestamp <= w[1].timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extrema_of_empty_series_is_none() {
        assert_eq!(Extrema::of(&[]), None);
    }

    #[test]
    fn extrema_ignores_non_finite_prices() {
        let series = vec![
            PricePoint::new(0, 12.0),
            PricePoint::new(60, f64::NAN),
            PricePoint::new(120, 3.5),
            PricePoint::new(180, f64::INFINITY),
            PricePoint::new(240, 40.0),
        ];
        assert_eq!(Extrema::of(&series), Some(Extrema::new(3.5, 40.0)));
    }

    #[test]
    fn single_point_is_flat() {
        let extrema = Extrema::of(&[PricePoint::new(0, 7.0)]).unwrap();
        assert!(extrema.is_flat());
        assert_eq!(extrema.min, 7.0);
    }

    #[test]
    fn chronological_check() {
        let ordered = [PricePoint::new(0, 1.0), PricePoint::new(0, 2.0), PricePoint::new(5, 1.0)];
        let shuffled = [PricePoint::new(5, 1.0), PricePoint::new(0, 2.0)];
        assert!(is_chronological(&ordered));
        assert!(!is_chronological(&shuffled));
        assert!(is_chronological(&[]));
    }
}
