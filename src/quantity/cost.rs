use std::{
    fmt::{Display, Formatter},
    ops::Div,
};

use crate::quantity::{Quantity, power::Kilowatts, rate::KilowattRate};

/// An annualized amount of currency.
pub type Cost = Quantity<f64, 0, 0, 1>;

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Div<Kilowatts> for Cost {
    type Output = KilowattRate;

    fn div(self, rhs: Kilowatts) -> Self::Output {
        KilowattRate::from(self.0 / rhs.0)
    }
}
