use crate::{params::Params, profile::Profile, quantity::energy::KilowattHours};

/// Decomposed series of one capacity increment.
#[derive(Clone, Debug, PartialEq)]
pub struct CapacitySlice {
    /// Demand covered by this slice's generation, i.e. energy otherwise purchased.
    pub demand_met: Profile,

    /// Generation left over once the residual demand is served.
    pub surplus: Profile,
}

/// The demand curve decomposed into per-slice residual-load and surplus series.
#[derive(Clone, Debug, PartialEq)]
pub struct Slices(Vec<CapacitySlice>);

impl Slices {
    /// Split the PV and demand series into `slice_count` capacity increments.
    ///
    /// Each increment contributes `slice_width` worth of the per-kilowatt PV
    /// series. Slice by slice, generation is absorbed by the running residual
    /// demand; whatever the residual cannot absorb carries over as surplus.
    pub(crate) fn decompose(
        pv: &[f64],
        demand: &[f64],
        steps_per_day: usize,
        params: &Params,
    ) -> Self {
        let generated: Vec<KilowattHours> = pv
            .iter()
            .map(|&sample| KilowattHours::from(sample * params.slice_width.0))
            .collect();
        let mut residual: Vec<KilowattHours> =
            demand.iter().copied().map(KilowattHours::from).collect();

        let mut slices = Vec::with_capacity(params.slice_count);
        for _ in 0..params.slice_count {
            let mut met = Vec::with_capacity(generated.len());
            let mut surplus = Vec::with_capacity(generated.len());
            for (&generation, remaining) in generated.iter().zip(residual.iter_mut()) {
                let excess = (generation - *remaining).max(KilowattHours::ZERO);
                let absorbed = generation - excess;
                *remaining -= absorbed;
                met.push(absorbed);
                surplus.push(excess);
            }
            slices.push(CapacitySlice {
                demand_met: Profile::from_samples(met, steps_per_day),
                surplus: Profile::from_samples(surplus, steps_per_day),
            });
        }
        Self(slices)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CapacitySlice> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CapacitySlice] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Slices {
    type IntoIter = std::slice::Iter<'a, CapacitySlice>;
    type Item = &'a CapacitySlice;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
