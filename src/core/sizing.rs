use crate::{
    core::{battery::BatteryPlan, curve::CostCurve, optimizer::Technology},
    profile::Profile,
    quantity::{energy::KilowattHours, power::Kilowatts},
};

/// Terminal result of one analysis run.
#[derive(Clone, Debug, PartialEq)]
pub struct Sizing {
    /// Economically optimal PV capacity to install.
    pub pv_capacity: Kilowatts,

    /// Economically optimal battery capacity to install alongside.
    pub battery_capacity: KilowattHours,

    /// Winning technology per slice, in slice order.
    pub winners: Vec<Technology>,

    /// The screening curves the selection was made from.
    pub cost_curve: CostCurve,

    /// Battery sizing outcome per slice, in slice order.
    pub battery_plans: Vec<BatteryPlan>,

    /// Summed charging profile of the slices won by PV+battery.
    /// Present under exact sizing only.
    pub charging: Option<Profile>,
}
