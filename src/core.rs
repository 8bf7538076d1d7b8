mod battery;
mod curve;
mod optimizer;
mod sizing;
mod slices;

pub use self::{
    battery::{BatteryPlan, ChargeModel},
    curve::{CostCurve, CostRow},
    optimizer::Technology,
    sizing::Sizing,
    slices::{CapacitySlice, Slices},
};

pub(crate) use self::{curve::build_cost_curve, optimizer::select};
