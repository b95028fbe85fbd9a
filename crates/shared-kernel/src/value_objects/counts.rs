// crates/shared-kernel/src/value_objects/counts.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Number of times a single character occurred in a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccurrenceCount(usize);

impl OccurrenceCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Default for OccurrenceCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for OccurrenceCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<usize> for OccurrenceCount {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign for OccurrenceCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl AddAssign<usize> for OccurrenceCount {
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl PartialEq<usize> for OccurrenceCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<OccurrenceCount> for usize {
    fn eq(&self, other: &OccurrenceCount) -> bool {
        *self == other.0
    }
}

impl From<usize> for OccurrenceCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<OccurrenceCount> for usize {
    fn from(count: OccurrenceCount) -> Self {
        count.value()
    }
}

impl Sum for OccurrenceCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a OccurrenceCount> for OccurrenceCount {
    fn sum<I: Iterator<Item = &'a OccurrenceCount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Sum<usize> for OccurrenceCount {
    fn sum<I: Iterator<Item = usize>>(iter: I) -> Self {
        Self(iter.sum())
    }
}

impl FromIterator<OccurrenceCount> for OccurrenceCount {
    fn from_iter<I: IntoIterator<Item = OccurrenceCount>>(iter: I) -> Self {
        iter.into_iter().sum()
    }
}

impl FromIterator<usize> for OccurrenceCount {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().sum()
    }
}

mod display {
    use std::fmt;

    use super::OccurrenceCount;

    impl fmt::Display for OccurrenceCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
