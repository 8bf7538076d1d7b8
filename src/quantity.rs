pub mod cost;
pub mod energy;
pub mod power;
pub mod rate;

use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// Dimensional newtype over a raw `f64`-like sample type `T`.
///
/// The const parameters count the powers of kilowatts, hours, and currency in
/// the unit, so mixing up units is a type error rather than a silent bug:
/// energy times a price is a cost, a cost divided by capacity is a rate, and
/// nothing else type-checks.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct Quantity<T, const POWER: isize, const TIME: isize, const COST: isize>(pub T);

impl<const POWER: isize, const TIME: isize, const COST: isize> Quantity<f64, POWER, TIME, COST> {
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub fn min(self, rhs: Self) -> Self {
        Self(self.0.min(rhs.0))
    }

    #[must_use]
    pub fn max(self, rhs: Self) -> Self {
        Self(self.0.max(rhs.0))
    }
}

/// Scaling by a bare number keeps the dimension.
impl<T, const POWER: isize, const TIME: isize, const COST: isize> Mul<T>
    for Quantity<T, POWER, TIME, COST>
where
    T: Mul<T>,
{
    type Output = Quantity<T::Output, POWER, TIME, COST>;

    fn mul(self, rhs: T) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<T, const POWER: isize, const TIME: isize, const COST: isize> Div<T>
    for Quantity<T, POWER, TIME, COST>
where
    T: Div<T>,
{
    type Output = Quantity<T::Output, POWER, TIME, COST>;

    fn div(self, rhs: T) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::{cost::Cost, energy::KilowattHours, power::Kilowatts, rate::KilowattHourRate};

    #[test]
    fn test_min_max() {
        let lhs = KilowattHours::from(1.0);
        let rhs = KilowattHours::from(2.0);
        assert_eq!(lhs.min(rhs), lhs);
        assert_eq!(lhs.max(rhs), rhs);
    }

    #[test]
    fn test_scaling_keeps_the_dimension() {
        assert_eq!(Kilowatts::from(2.0) * 3.0, Kilowatts::from(6.0));
        assert_eq!(KilowattHours::from(6.0) / 2.0, KilowattHours::from(3.0));
    }

    #[test]
    fn test_energy_times_rate_is_cost() {
        assert_eq!(KilowattHours::from(4.0) * KilowattHourRate::from(0.25), Cost::from(1.0));
    }

    #[test]
    fn test_cost_per_capacity_is_a_rate() {
        let normalized = Cost::from(500.0) / Kilowatts::from(2.0);
        assert_eq!(normalized.0, 250.0);
    }
}
