use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::{
    params::Params,
    profile::Profile,
    quantity::{cost::Cost, energy::KilowattHours},
};

/// How the sizer realizes the per-day charging cap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChargeModel {
    /// Simulate every day step by step and keep the full charging profile.
    ///
    /// `O(n_days² × steps_per_day)` per slice.
    Exact,

    /// Use the closed-form charged-energy total over the sorted daily surplus
    /// values. No charging profile is produced.
    ///
    /// `O(n_days log n_days)` per slice.
    Aggregate,
}

/// Battery sizing outcome for one slice.
#[derive(Clone, Debug, PartialEq)]
pub struct BatteryPlan {
    /// Required battery capacity.
    pub capacity: KilowattHours,

    /// Total energy routed into the battery over the sampled period.
    pub charged_energy: KilowattHours,

    /// Number of accepted greedy trials: daily charging caps admitted before
    /// the marginal benefit turned negative.
    pub accepted_days: usize,

    /// Charging time series, present under [`ChargeModel::Exact`] only.
    pub charging: Option<Profile>,
}

impl BatteryPlan {
    /// A plan that installs no battery at all.
    pub(crate) fn idle(model: ChargeModel, n_days: usize, steps_per_day: usize) -> Self {
        Self {
            capacity: KilowattHours::ZERO,
            charged_energy: KilowattHours::ZERO,
            accepted_days: 0,
            charging: match model {
                ChargeModel::Exact => Some(Profile::zeros(n_days, steps_per_day)),
                ChargeModel::Aggregate => None,
            },
        }
    }
}

/// Find the most economic battery capacity for one slice's surplus series.
///
/// Daily surplus totals are sorted ascending and tried as progressively larger
/// daily charging caps. A trial is accepted while its marginal benefit (the
/// value of avoided grid purchases, net of the battery fixed cost and of the
/// feed-in revenue forgone on retained energy) stays non-negative; the first
/// negative trial stops the search.
pub(crate) fn size_battery(
    surplus: &Profile,
    params: &Params,
    annualization: f64,
    model: ChargeModel,
) -> BatteryPlan {
    let sorted_daily: Vec<KilowattHours> = surplus
        .daily_totals()
        .into_iter()
        .sorted_by_key(|total| OrderedFloat(total.0))
        .collect();

    let mut plan = BatteryPlan::idle(model, surplus.n_days(), surplus.steps_per_day());
    // Running Σ of daily totals below the current trial cap:
    let mut below_cap = KilowattHours::ZERO;

    for (trial, &daily_cap) in sorted_daily.iter().enumerate() {
        let (charged, charging) = match model {
            ChargeModel::Exact => {
                let charging = charge_profile(surplus, daily_cap);
                (charging.total(), Some(charging))
            }
            ChargeModel::Aggregate => {
                // Days below the cap contribute their full surplus,
                // the remaining days are clipped to the cap:
                #[expect(clippy::cast_precision_loss)]
                let clipped = daily_cap * (sorted_daily.len() - trial) as f64;
                (below_cap + clipped, None)
            }
        };
        let capacity = daily_cap * params.charging_efficiency;

        let delta_charged = charged - plan.charged_energy;
        let delta_capacity = capacity - plan.capacity;
        let avoided_purchases = delta_charged
            * params.purchase_rate
            * (params.discharging_efficiency * params.charging_efficiency * annualization);
        let fixed_cost = delta_capacity * params.battery_annual_cost;
        let forgone_sales = delta_charged * params.feed_in_rate * annualization;
        if avoided_purchases - fixed_cost - forgone_sales < Cost::ZERO {
            break;
        }

        plan = BatteryPlan { capacity, charged_energy: charged, accepted_days: trial + 1, charging };
        below_cap += daily_cap;
    }
    plan
}

/// First-fit daily charging: within each day, surplus is routed into the
/// battery in sample order until the daily cap is reached.
fn charge_profile(surplus: &Profile, daily_cap: KilowattHours) -> Profile {
    let mut samples = Vec::with_capacity(surplus.len());
    for day in surplus.days() {
        let mut room = daily_cap;
        for &available in day {
            let charge = available.min(room);
            room -= charge;
            samples.push(charge);
        }
    }
    Profile::from_samples(samples, surplus.steps_per_day())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        params::test_params,
        quantity::rate::{KilowattHourRate, KilowattRate},
    };

    /// Three days with daily surplus totals 2.0, 6.0, and 4.0.
    fn surplus() -> Profile {
        Profile::from_samples(
            [0.0, 1.5, 0.5, 0.0, 1.0, 3.0, 2.0, 0.0, 0.0, 0.5, 2.5, 1.0]
                .into_iter()
                .map(KilowattHours::from)
                .collect(),
            4,
        )
    }

    /// Storage is nearly free and purchases are expensive: every trial is accepted.
    fn battery_friendly_params() -> Params {
        Params {
            purchase_rate: KilowattHourRate::from(30.0),
            feed_in_rate: KilowattHourRate::from(1.0),
            battery_annual_cost: KilowattHourRate::from(1.0),
            pv_annual_cost: KilowattRate::from(0.0),
            ..test_params()
        }
    }

    #[test]
    fn test_charge_profile_first_fit() {
        let charging = charge_profile(&surplus(), KilowattHours::from(3.0));
        let expected: Vec<KilowattHours> =
            [0.0, 1.5, 0.5, 0.0, 1.0, 2.0, 0.0, 0.0, 0.0, 0.5, 2.5, 0.0]
                .into_iter()
                .map(KilowattHours::from)
                .collect();
        assert_eq!(charging.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_charge_profile_daily_totals_are_clipped() {
        let charging = charge_profile(&surplus(), KilowattHours::from(4.0));
        assert_eq!(
            charging.daily_totals(),
            vec![
                KilowattHours::from(2.0),
                KilowattHours::from(4.0),
                KilowattHours::from(4.0),
            ],
        );
    }

    #[test]
    fn test_exact_and_aggregate_totals_agree() {
        let annualization = 365.0 / 3.0;
        let params = battery_friendly_params();
        let exact = size_battery(&surplus(), &params, annualization, ChargeModel::Exact);
        let aggregate = size_battery(&surplus(), &params, annualization, ChargeModel::Aggregate);
        assert_eq!(exact.accepted_days, aggregate.accepted_days);
        assert_abs_diff_eq!(exact.capacity.0, aggregate.capacity.0, epsilon = 1e-9);
        assert_abs_diff_eq!(exact.charged_energy.0, aggregate.charged_energy.0, epsilon = 1e-9);
        assert!(exact.charging.is_some());
        assert!(aggregate.charging.is_none());
    }

    #[test]
    fn test_all_trials_accepted_when_storage_is_cheap() {
        let params = battery_friendly_params();
        let plan = size_battery(&surplus(), &params, 365.0 / 3.0, ChargeModel::Exact);
        assert_eq!(plan.accepted_days, 3);
        // The final cap is the largest daily total:
        assert_abs_diff_eq!(plan.capacity.0, 6.0 * params.charging_efficiency);
        // Every day is charged in full:
        assert_abs_diff_eq!(plan.charged_energy.0, 12.0);
    }

    #[test]
    fn test_unaffordable_battery_keeps_the_zero_plan() {
        let params = Params {
            battery_annual_cost: KilowattHourRate::from(1e9),
            ..battery_friendly_params()
        };
        let plan = size_battery(&surplus(), &params, 365.0 / 3.0, ChargeModel::Exact);
        assert_eq!(plan.accepted_days, 0);
        assert_abs_diff_eq!(plan.capacity.0, 0.0);
        assert_abs_diff_eq!(plan.charged_energy.0, 0.0);
        assert_abs_diff_eq!(plan.charging.unwrap().total().0, 0.0);
    }

    #[test]
    fn test_zero_surplus_accepts_zero_caps() {
        let flat = Profile::zeros(3, 4);
        let plan = size_battery(&flat, &test_params(), 365.0 / 3.0, ChargeModel::Exact);
        // Zero-valued trials carry zero benefit and are accepted, sizing nothing.
        assert_eq!(plan.accepted_days, 3);
        assert_abs_diff_eq!(plan.capacity.0, 0.0);
        assert_abs_diff_eq!(plan.charged_energy.0, 0.0);
    }

    #[test]
    fn test_search_stops_at_the_first_rejected_trial() {
        // Calibrated so the smallest cap pays off and the larger ones do not:
        // each extra unit of capacity costs more than the value it shifts.
        let params = Params {
            purchase_rate: KilowattHourRate::from(10.0),
            feed_in_rate: KilowattHourRate::from(0.0),
            battery_annual_cost: KilowattHourRate::from(1500.0),
            charging_efficiency: 1.0,
            discharging_efficiency: 1.0,
            ..test_params()
        };
        let annualization = 365.0 / 3.0;
        // Trial 0, cap 2: charged 6, benefit 6·W·10 − 2·1500 = 4300 ≥ 0.
        // Trial 1, cap 4: Δcharged 4, Δcapacity 2, benefit 4·W·10 − 2·1500 ≈ 1867 ≥ 0.
        // Trial 2, cap 6: Δcharged 2, Δcapacity 2, benefit 2·W·10 − 2·1500 ≈ −567 < 0.
        let plan = size_battery(&surplus(), &params, annualization, ChargeModel::Exact);
        assert_eq!(plan.accepted_days, 2);
        assert_abs_diff_eq!(plan.capacity.0, 4.0);
        assert_abs_diff_eq!(plan.charged_energy.0, 10.0);
    }

    #[test]
    fn test_accepted_caps_are_non_decreasing() {
        let daily = surplus().daily_totals();
        let sorted: Vec<f64> =
            daily.iter().map(|total| total.0).sorted_by_key(|&x| OrderedFloat(x)).collect();
        assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
