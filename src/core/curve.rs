use crate::{
    core::{
        battery::{BatteryPlan, ChargeModel, size_battery},
        slices::Slices,
    },
    params::Params,
    prelude::*,
    quantity::{energy::KilowattHours, power::Kilowatts, rate::KilowattRate},
};

/// Annualized cost of one slice under each candidate technology,
/// normalized per kilowatt of capacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostRow {
    /// Capacity level this slice sits at: `slice_index × slice_width`.
    pub level: Kilowatts,

    /// Install the slice as PV and sell every surplus.
    pub pv_only: KilowattRate,

    /// Install the slice as PV and retain part of the surplus in a battery.
    pub pv_battery: KilowattRate,

    /// Skip the slice and buy the covered demand from the grid.
    pub grid: KilowattRate,
}

/// The screening curves: one [`CostRow`] per slice, in slice order.
#[derive(Clone, Debug, PartialEq)]
pub struct CostCurve(Vec<CostRow>);

impl CostCurve {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> &[CostRow] {
        &self.0
    }
}

/// Derive the per-slice cost curves of the three candidate technologies,
/// sizing a battery for every slice along the way.
///
/// Slices are priced in index order while a running total of sized battery
/// capacity is kept; once the total reaches `max_battery`, the remaining
/// slices are priced without a battery and sell all of their surplus. The cap
/// is checked before a slice is admitted, so the total may overshoot by at
/// most one slice's battery.
pub(crate) fn build_cost_curve(
    slices: &Slices,
    params: &Params,
    annualization: f64,
    model: ChargeModel,
) -> (CostCurve, Vec<BatteryPlan>) {
    let pv_fixed = params.slice_width * params.pv_annual_cost;
    let round_trip = params.discharging_efficiency * params.charging_efficiency;

    let mut rows = Vec::with_capacity(slices.len());
    let mut plans = Vec::with_capacity(slices.len());
    let mut battery_total = KilowattHours::ZERO;

    for (index, slice) in slices.iter().enumerate() {
        let grid = slice.demand_met.total() * params.purchase_rate * annualization;

        let pv_only = pv_fixed - slice.surplus.total() * params.feed_in_rate * annualization;

        let plan = if battery_total < params.max_battery {
            size_battery(&slice.surplus, params, annualization, model)
        } else {
            BatteryPlan::idle(model, slice.surplus.n_days(), slice.surplus.steps_per_day())
        };
        battery_total += plan.capacity;

        let sold = match &plan.charging {
            Some(charging) => slice
                .surplus
                .iter()
                .zip(charging.iter())
                .map(|(surplus, charged)| surplus - charged)
                .sum::<KilowattHours>(),
            None => slice.surplus.total() - plan.charged_energy,
        };
        let pv_battery = pv_fixed + plan.capacity * params.battery_annual_cost
            - sold * params.feed_in_rate * annualization
            - plan.charged_energy * params.purchase_rate * (round_trip * annualization);

        #[expect(clippy::cast_precision_loss)]
        let level = params.slice_width * index as f64;
        rows.push(CostRow {
            level,
            pv_only: pv_only / params.slice_width,
            pv_battery: pv_battery / params.slice_width,
            grid: grid / params.slice_width,
        });
        plans.push(plan);
    }

    debug!(total_battery = %battery_total, "derived cost curves");
    (CostCurve(rows), plans)
}
