use std::fmt::{Display, Formatter};

use crate::quantity::Quantity;

/// Currency per kilowatt-hour: energy prices and annualized storage fixed costs.
pub type KilowattHourRate = Quantity<f64, -1, -1, 1>;

/// Currency per kilowatt of installed capacity per year.
pub type KilowattRate = Quantity<f64, -1, 0, 1>;

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}/kWh", self.0)
    }
}

impl Display for KilowattRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}/kW", self.0)
    }
}
