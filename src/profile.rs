use crate::quantity::energy::KilowattHours;

/// A day-shaped energy series: `n_days × steps_per_day` samples in day order.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    samples: Vec<KilowattHours>,
    steps_per_day: usize,
}

impl Profile {
    pub(crate) fn from_samples(samples: Vec<KilowattHours>, steps_per_day: usize) -> Self {
        debug_assert_ne!(steps_per_day, 0);
        debug_assert_eq!(samples.len() % steps_per_day, 0);
        Self { samples, steps_per_day }
    }

    pub(crate) fn zeros(n_days: usize, steps_per_day: usize) -> Self {
        Self::from_samples(vec![KilowattHours::ZERO; n_days * steps_per_day], steps_per_day)
    }

    #[must_use]
    pub fn n_days(&self) -> usize {
        self.samples.len() / self.steps_per_day
    }

    #[must_use]
    pub const fn steps_per_day(&self) -> usize {
        self.steps_per_day
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[KilowattHours] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = KilowattHours> + '_ {
        self.samples.iter().copied()
    }

    /// Sum over the whole period.
    #[must_use]
    pub fn total(&self) -> KilowattHours {
        self.iter().sum()
    }

    /// Iterate the per-day sample windows.
    pub fn days(&self) -> impl Iterator<Item = &[KilowattHours]> {
        self.samples.chunks_exact(self.steps_per_day)
    }

    /// Sum of each day's samples, in day order.
    #[must_use]
    pub fn daily_totals(&self) -> Vec<KilowattHours> {
        self.days().map(|day| day.iter().copied().sum()).collect()
    }

    /// Elementwise addition of an equally shaped profile.
    pub(crate) fn accumulate(&mut self, rhs: &Self) {
        debug_assert_eq!(self.steps_per_day, rhs.steps_per_day);
        debug_assert_eq!(self.samples.len(), rhs.samples.len());
        for (sample, increment) in self.samples.iter_mut().zip(rhs.iter()) {
            *sample += increment;
        }
    }
}
