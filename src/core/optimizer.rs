use crate::{
    core::{
        battery::BatteryPlan,
        curve::{CostCurve, CostRow},
        sizing::Sizing,
    },
    params::Params,
    prelude::*,
    profile::Profile,
    quantity::energy::KilowattHours,
};

/// Candidate generation technology for one capacity slice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Technology {
    PvOnly,
    PvBattery,
    Grid,
}

impl CostRow {
    /// The least-cost technology of this row.
    ///
    /// Ties go to the earlier entry of {PV-only, PV+battery, Grid}; the fold
    /// keeps the incumbent unless a candidate is strictly cheaper.
    #[must_use]
    pub fn cheapest(&self) -> Technology {
        [
            (Technology::PvOnly, self.pv_only),
            (Technology::PvBattery, self.pv_battery),
            (Technology::Grid, self.grid),
        ]
        .into_iter()
        .reduce(|best, candidate| if candidate.1 < best.1 { candidate } else { best })
        .map_or(Technology::Grid, |(technology, _)| technology)
    }
}

/// Pick the least-cost technology per slice and aggregate the winners into
/// the total PV capacity, the total battery capacity, and (when charging
/// profiles were retained) the summed charging profile.
pub(crate) fn select(curve: CostCurve, plans: Vec<BatteryPlan>, params: &Params) -> Sizing {
    debug_assert_eq!(curve.len(), plans.len());

    let winners: Vec<Technology> = curve.rows().iter().map(CostRow::cheapest).collect();

    let pv_slices = winners
        .iter()
        .filter(|winner| matches!(winner, Technology::PvOnly | Technology::PvBattery))
        .count();
    #[expect(clippy::cast_precision_loss)]
    let pv_capacity = params.slice_width * pv_slices as f64;

    let battery_capacity: KilowattHours = winners
        .iter()
        .zip(&plans)
        .filter(|(winner, _)| **winner == Technology::PvBattery)
        .map(|(_, plan)| plan.capacity)
        .sum();

    let charging = aggregate_charging(&winners, &plans);

    debug!(pv = %pv_capacity, battery = %battery_capacity, "selected optimal capacities");

    Sizing {
        pv_capacity,
        battery_capacity,
        winners,
        cost_curve: curve,
        battery_plans: plans,
        charging,
    }
}

/// Elementwise sum of the charging profiles of the slices won by PV+battery.
/// Absent whenever the plans carry no profiles (aggregate sizing).
fn aggregate_charging(winners: &[Technology], plans: &[BatteryPlan]) -> Option<Profile> {
    let shape = plans.first().and_then(|plan| plan.charging.as_ref())?;
    let mut total = Profile::zeros(shape.n_days(), shape.steps_per_day());
    for (winner, plan) in winners.iter().zip(plans) {
        if *winner == Technology::PvBattery {
            if let Some(charging) = &plan.charging {
                total.accumulate(charging);
            }
        }
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::{power::Kilowatts, rate::KilowattRate};

    fn row(pv_only: f64, pv_battery: f64, grid: f64) -> CostRow {
        CostRow {
            level: Kilowatts::ZERO,
            pv_only: KilowattRate::from(pv_only),
            pv_battery: KilowattRate::from(pv_battery),
            grid: KilowattRate::from(grid),
        }
    }

    #[test]
    fn test_cheapest_picks_the_minimum() {
        assert_eq!(row(3.0, 2.0, 1.0).cheapest(), Technology::Grid);
        assert_eq!(row(1.0, 2.0, 3.0).cheapest(), Technology::PvOnly);
        assert_eq!(row(2.0, 1.0, 3.0).cheapest(), Technology::PvBattery);
    }

    #[test]
    fn test_cheapest_breaks_ties_in_enumeration_order() {
        assert_eq!(row(1.0, 1.0, 1.0).cheapest(), Technology::PvOnly);
        assert_eq!(row(2.0, 1.0, 1.0).cheapest(), Technology::PvBattery);
        assert_eq!(row(1.0, 2.0, 1.0).cheapest(), Technology::PvOnly);
    }
}
