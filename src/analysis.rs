use bon::Builder;

use crate::{
    core::{
        BatteryPlan,
        ChargeModel,
        CostCurve,
        Sizing,
        Slices,
        build_cost_curve,
        select,
    },
    params::Params,
    prelude::*,
};

/// One screening-curve analysis run over a PV/demand history.
///
/// The stages [`Self::decompose`], [`Self::cost_curve`] and [`Self::select`]
/// are also exposed individually, and their dependency order is carried by
/// the values they exchange: a later stage cannot be called without the
/// output of the earlier one.
#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct Analysis<'a> {
    /// Generation of one kilowatt of PV, `n_days × steps_per_day` samples.
    pv: &'a [f64],

    /// Demand over the same period, same shape.
    demand: &'a [f64],

    /// Number of days covered by the series.
    n_days: usize,

    /// Samples per day.
    #[builder(default = 24)]
    steps_per_day: usize,

    params: &'a Params,
}

impl<'a, S: analysis_builder::IsComplete> AnalysisBuilder<'a, S> {
    /// Check the parameters and series shapes before any computation.
    pub fn try_build(self) -> Result<Analysis<'a>> {
        let analysis = self.build();
        analysis.validate()?;
        Ok(analysis)
    }

    /// Build the analysis and run the full pipeline.
    pub fn optimize(self, model: ChargeModel) -> Result<Sizing> {
        Ok(self.try_build()?.optimize(model))
    }
}

impl Analysis<'_> {
    fn validate(&self) -> Result {
        self.params.validate()?;
        if self.n_days == 0 {
            return Err(Error::Configuration {
                field: "n_days",
                reason: "at least one day of history is required".to_string(),
            });
        }
        if self.steps_per_day == 0 {
            return Err(Error::Configuration {
                field: "steps_per_day",
                reason: "at least one sample per day is required".to_string(),
            });
        }
        let expected = self.n_days * self.steps_per_day;
        if self.pv.len() != expected {
            return Err(Error::SeriesShape { series: "PV", expected, actual: self.pv.len() });
        }
        if self.demand.len() != expected {
            return Err(Error::SeriesShape {
                series: "demand",
                expected,
                actual: self.demand.len(),
            });
        }
        Ok(())
    }

    /// Scales a sampled-period total to an annual quantity: `365 / n_days`.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn annualization(&self) -> f64 {
        365.0 / self.n_days as f64
    }

    /// Decompose the demand curve into capacity slices.
    #[instrument(skip_all, name = "Slicing…", fields(n_slices = self.params.slice_count))]
    #[must_use]
    pub fn decompose(&self) -> Slices {
        Slices::decompose(self.pv, self.demand, self.steps_per_day, self.params)
    }

    /// Derive the per-slice screening curves, sizing a battery per slice.
    #[instrument(skip_all, name = "Pricing…", fields(model = ?model))]
    #[must_use]
    pub fn cost_curve(
        &self,
        slices: &Slices,
        model: ChargeModel,
    ) -> (CostCurve, Vec<BatteryPlan>) {
        build_cost_curve(slices, self.params, self.annualization(), model)
    }

    /// Pick the least-cost technology per slice and aggregate the winners.
    #[must_use]
    pub fn select(&self, curve: CostCurve, plans: Vec<BatteryPlan>) -> Sizing {
        select(curve, plans, self.params)
    }

    /// Run all stages in dependency order.
    #[instrument(
        skip_all,
        name = "Optimizing…",
        fields(n_slices = self.params.slice_count, n_days = self.n_days),
    )]
    #[must_use]
    pub fn optimize(&self, model: ChargeModel) -> Sizing {
        let slices = self.decompose();
        let (curve, plans) = self.cost_curve(&slices, model);
        self.select(curve, plans)
    }
}
