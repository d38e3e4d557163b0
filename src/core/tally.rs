use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Head to head results over a batch of hand pairs.
///
/// Merging is associative so partial tallies from different workers can be
/// combined in any grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    /// Pairs where the first hand won.
    pub wins_a: usize,
    /// Pairs where the second hand won.
    pub wins_b: usize,
    /// Pairs that were exactly equal.
    pub ties: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one comparison result, `Greater` meaning the first hand won.
    pub fn record(&mut self, outcome: Ordering) {
        match outcome {
            Ordering::Greater => self.wins_a += 1,
            Ordering::Less => self.wins_b += 1,
            Ordering::Equal => self.ties += 1,
        }
    }

    /// Combine two tallies.
    pub fn merge(self, other: Self) -> Self {
        Self {
            wins_a: self.wins_a + other.wins_a,
            wins_b: self.wins_b + other.wins_b,
            ties: self.ties + other.ties,
        }
    }

    /// Total number of pairs counted.
    pub fn total(&self) -> usize {
        self.wins_a + self.wins_b + self.ties
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<Ordering> for Tally {
    fn from(outcome: Ordering) -> Self {
        let mut tally = Self::default();
        tally.record(outcome);
        tally
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, rhs: Self) -> Self::Output {
        self.merge(rhs)
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.merge(rhs);
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::merge)
    }
}

impl FromIterator<Ordering> for Tally {
    fn from_iter<T: IntoIterator<Item = Ordering>>(iter: T) -> Self {
        let mut tally = Self::default();
        for outcome in iter {
            tally.record(outcome);
        }
        tally
    }
}

impl Extend<Ordering> for Tally {
    fn extend<T: IntoIterator<Item = Ordering>>(&mut self, iter: T) {
        for outcome in iter {
            self.record(outcome);
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "first: {}, second: {}, tie: {}",
            self.wins_a, self.wins_b, self.ties
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut tally = Tally::new();
        tally.record(Ordering::Greater);
        tally.record(Ordering::Greater);
        tally.record(Ordering::Less);
        tally.record(Ordering::Equal);
        assert_eq!(2, tally.wins_a);
        assert_eq!(1, tally.wins_b);
        assert_eq!(1, tally.ties);
        assert_eq!(4, tally.total());
    }

    #[test]
    fn test_merge_is_associative() {
        let a = Tally::from(Ordering::Greater);
        let b = Tally::from(Ordering::Less);
        let c: Tally = [Ordering::Equal, Ordering::Equal].into_iter().collect();
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(4, (a + b + c).total());
    }

    #[test]
    fn test_sum_and_extend() {
        let parts = vec![
            Tally::from(Ordering::Greater),
            Tally::from(Ordering::Greater),
            Tally::from(Ordering::Less),
        ];
        let summed: Tally = parts.into_iter().sum();
        assert_eq!(2, summed.wins_a);

        let mut extended = Tally::new();
        extended.extend([Ordering::Less, Ordering::Equal]);
        extended += summed;
        assert_eq!(
            Tally {
                wins_a: 2,
                wins_b: 2,
                ties: 1
            },
            extended
        );
    }

    #[test]
    fn test_display() {
        let tally = Tally {
            wins_a: 376,
            wins_b: 624,
            ties: 0,
        };
        assert_eq!("first: 376, second: 624, tie: 0", tally.to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json() {
        let tally = Tally {
            wins_a: 3,
            wins_b: 2,
            ties: 0,
        };
        assert_eq!(
            r#"{"wins_a":3,"wins_b":2,"ties":0}"#,
            tally.to_json().unwrap()
        );
    }
}
