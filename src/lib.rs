//! Economic sizing of photovoltaic and battery capacity for self-consumption,
//! using the screening curve method: the demand curve is decomposed into
//! discrete capacity slices, each slice is priced under «buy from the grid»,
//! «install PV», and «install PV with a battery», and the cheapest technology
//! per slice determines the overall optimal capacities.
//!
//! ```
//! use sunslice::{
//!     Analysis,
//!     ChargeModel,
//!     KilowattHourRate,
//!     KilowattHours,
//!     KilowattRate,
//!     Kilowatts,
//!     Params,
//! };
//!
//! let params = Params {
//!     slice_width: Kilowatts::from(1.0),
//!     slice_count: 2,
//!     purchase_rate: KilowattHourRate::from(0.25),
//!     feed_in_rate: KilowattHourRate::from(0.06),
//!     max_pv: Kilowatts::from(2.0),
//!     max_battery: KilowattHours::from(10.0),
//!     charging_efficiency: 0.9,
//!     discharging_efficiency: 0.9,
//!     pv_annual_cost: KilowattRate::from(110.0),
//!     battery_annual_cost: KilowattHourRate::from(40.0),
//! };
//!
//! // Two days of four samples each; PV is the generation of one kilowatt:
//! let pv = [0.0, 1.2, 1.0, 0.0, 0.0, 1.1, 0.9, 0.0];
//! let demand = [0.4, 0.3, 0.5, 0.6, 0.4, 0.3, 0.5, 0.6];
//!
//! let sizing = Analysis::builder()
//!     .pv(&pv)
//!     .demand(&demand)
//!     .n_days(2)
//!     .steps_per_day(4)
//!     .params(&params)
//!     .try_build()?
//!     .optimize(ChargeModel::Exact);
//!
//! assert!(sizing.pv_capacity <= Kilowatts::from(2.0));
//! # Ok::<(), sunslice::Error>(())
//! ```

mod analysis;
mod core;
mod error;
mod params;
mod prelude;
mod profile;
mod quantity;
mod tables;

pub use self::{
    analysis::Analysis,
    core::{BatteryPlan, CapacitySlice, ChargeModel, CostCurve, CostRow, Sizing, Slices, Technology},
    error::{Error, Result},
    params::Params,
    profile::Profile,
    quantity::{
        Quantity,
        cost::Cost,
        energy::KilowattHours,
        power::Kilowatts,
        rate::{KilowattHourRate, KilowattRate},
    },
    tables::{cost_curve_table, summary_table},
};
