use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{
        energy::KilowattHours,
        power::Kilowatts,
        rate::{KilowattHourRate, KilowattRate},
    },
};

/// Prices, technical limits, and annualized fixed costs of one analysis run.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Params {
    /// Width of one capacity slice in kilowatts.
    pub slice_width: Kilowatts,

    /// Number of capacity slices to evaluate.
    pub slice_count: usize,

    /// Electricity purchase price.
    pub purchase_rate: KilowattHourRate,

    /// Feed-in price for surplus generation.
    pub feed_in_rate: KilowattHourRate,

    /// Maximum amount of PV to consider.
    pub max_pv: Kilowatts,

    /// Maximum cumulative battery capacity.
    pub max_battery: KilowattHours,

    /// Charging efficiency, in `(0, 1]`.
    pub charging_efficiency: f64,

    /// Discharging efficiency, in `(0, 1]`.
    pub discharging_efficiency: f64,

    /// Annualized fixed cost of PV per kilowatt.
    pub pv_annual_cost: KilowattRate,

    /// Annualized fixed cost of battery per kilowatt-hour.
    pub battery_annual_cost: KilowattHourRate,
}

impl Params {
    /// Parse and validate parameters from a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let params: Self = toml::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    /// Reject out-of-range parameters before any series computation starts.
    pub fn validate(&self) -> Result {
        if self.slice_count == 0 {
            return Err(Error::Configuration {
                field: "slice_count",
                reason: "at least one slice is required".to_string(),
            });
        }
        if !self.slice_width.0.is_finite() || self.slice_width.0 <= 0.0 {
            return Err(Error::Configuration {
                field: "slice_width",
                reason: format!("must be finite and positive, got {}", self.slice_width.0),
            });
        }
        ensure_efficiency("charging_efficiency", self.charging_efficiency)?;
        ensure_efficiency("discharging_efficiency", self.discharging_efficiency)?;
        ensure_finite_non_negative("purchase_rate", self.purchase_rate.0)?;
        ensure_finite_non_negative("feed_in_rate", self.feed_in_rate.0)?;
        ensure_finite_non_negative("max_pv", self.max_pv.0)?;
        ensure_finite_non_negative("max_battery", self.max_battery.0)?;
        ensure_finite_non_negative("pv_annual_cost", self.pv_annual_cost.0)?;
        ensure_finite_non_negative("battery_annual_cost", self.battery_annual_cost.0)?;
        Ok(())
    }
}

fn ensure_efficiency(field: &'static str, value: f64) -> Result {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(Error::Configuration {
            field,
            reason: format!("must be within (0, 1], got {value}"),
        })
    }
}

fn ensure_finite_non_negative(field: &'static str, value: f64) -> Result {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::Configuration {
            field,
            reason: format!("must be finite and non-negative, got {value}"),
        })
    }
}

#[cfg(test)]
pub(crate) fn test_params() -> Params {
    Params {
        slice_width: Kilowatts::from(0.01),
        slice_count: 1000,
        purchase_rate: KilowattHourRate::from(25.0),
        feed_in_rate: KilowattHourRate::from(6.0),
        max_pv: Kilowatts::from(10.0),
        max_battery: KilowattHours::from(20.0),
        charging_efficiency: 0.9,
        discharging_efficiency: 0.9,
        pv_annual_cost: KilowattRate::from(11000.0),
        battery_annual_cost: KilowattHourRate::from(4000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_defaults() {
        test_params().validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_zero_slice_width() {
        let mut params = test_params();
        params.slice_width = Kilowatts::ZERO;
        assert!(matches!(
            params.validate(),
            Err(Error::Configuration { field: "slice_width", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_slice_count() {
        let mut params = test_params();
        params.slice_count = 0;
        assert!(matches!(
            params.validate(),
            Err(Error::Configuration { field: "slice_count", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_efficiency() {
        for value in [0.0, -0.1, 1.1, f64::NAN] {
            let mut params = test_params();
            params.charging_efficiency = value;
            assert!(
                matches!(
                    params.validate(),
                    Err(Error::Configuration { field: "charging_efficiency", .. })
                ),
                "accepted charging_efficiency = {value}",
            );
        }
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut params = test_params();
        params.purchase_rate = KilowattHourRate::from(-1.0);
        assert!(matches!(
            params.validate(),
            Err(Error::Configuration { field: "purchase_rate", .. })
        ));
    }

    #[test]
    fn test_from_toml_str() {
        let params = Params::from_toml_str(
            r#"
                slice_width = 0.01
                slice_count = 1000
                purchase_rate = 25.0
                feed_in_rate = 6.0
                max_pv = 10.0
                max_battery = 20.0
                charging_efficiency = 0.9
                discharging_efficiency = 0.9
                pv_annual_cost = 11000.0
                battery_annual_cost = 4000.0
            "#,
        )
        .unwrap();
        assert_eq!(params, test_params());
    }

    #[test]
    fn test_from_toml_str_validates() {
        let result = Params::from_toml_str(
            r#"
                slice_width = 0.01
                slice_count = 1000
                purchase_rate = 25.0
                feed_in_rate = 6.0
                max_pv = 10.0
                max_battery = 20.0
                charging_efficiency = 1.5
                discharging_efficiency = 0.9
                pv_annual_cost = 11000.0
                battery_annual_cost = 4000.0
            "#,
        );
        assert!(matches!(
            result,
            Err(Error::Configuration { field: "charging_efficiency", .. })
        ));
    }
}
