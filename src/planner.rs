use crate::{
    carbon,
    finance::{Investment, Roi},
    fleet::CarbonFactors,
    quantity::{
        carbon::Kilograms,
        energy::KilowattHours,
        money::Money,
        power::Kilowatts,
        rate::KilowattHourRate,
    },
};

pub const SUN_HOURS_PER_DAY: f64 = 4.5;
pub const PERFORMANCE_RATIO: f64 = 0.74;

/// Rooftop-solar estimate per installed kilowatt.
pub const CAPEX_PER_KILOWATT: Money = Money(52_000.0);

/// First-year generation from installed capacity under the demo irradiance
/// assumptions. Non-positive capacity models nothing.
pub fn annual_energy(capacity: Kilowatts) -> KilowattHours {
    if capacity.0 <= 0.0 {
        return KilowattHours::ZERO;
    }
    KilowattHours(capacity.0 * SUN_HOURS_PER_DAY * 365.0 * PERFORMANCE_RATIO)
}

pub fn capex_estimate(capacity: Kilowatts) -> Money {
    Money((capacity.0 * CAPEX_PER_KILOWATT.0).max(0.0))
}

/// One modelled rollout scenario for the deployment plan.
#[derive(Clone, Debug)]
pub struct Deployment {
    pub district: String,
    pub capacity: Kilowatts,
    pub subsidy_pct: f64,
    pub annual_energy: KilowattHours,
    pub co2_avoided: Kilograms,
    pub roi: Roi,
}

impl Deployment {
    pub fn model(
        district: &str,
        capacity: Kilowatts,
        subsidy_pct: f64,
        tariff: KilowattHourRate,
        opex_pct: f64,
        factors: &CarbonFactors,
    ) -> Self {
        let annual_energy = annual_energy(capacity);
        let roi = Investment::builder()
            .capex(capex_estimate(capacity))
            .subsidy_pct(subsidy_pct)
            .annual_energy(annual_energy)
            .tariff(tariff)
            .opex_pct(opex_pct)
            .build()
            .roi();
        Self {
            district: district.to_string(),
            capacity,
            subsidy_pct,
            annual_energy,
            co2_avoided: carbon::avoided(annual_energy, factors.grid_average),
            roi,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::carbon::EmissionFactor;

    #[test]
    fn annual_energy_at_the_demo_assumptions() {
        assert_abs_diff_eq!(annual_energy(Kilowatts(5.0)).0, 6077.25, epsilon = 1e-9);
        assert_eq!(annual_energy(Kilowatts(0.0)), KilowattHours::ZERO);
        assert_eq!(annual_energy(Kilowatts(-3.0)), KilowattHours::ZERO);
    }

    #[test]
    fn capex_never_negative() {
        assert_eq!(capex_estimate(Kilowatts(5.0)), Money(260_000.0));
        assert_eq!(capex_estimate(Kilowatts(-5.0)), Money::ZERO);
    }

    #[test]
    fn modelled_deployment() {
        let factors = CarbonFactors {
            grid_average: EmissionFactor(0.82),
            solar: EmissionFactor(0.79),
            wind: EmissionFactor(0.74),
        };
        let deployment = Deployment::model(
            "Tumakuru",
            Kilowatts(5.0),
            20.0,
            KilowattHourRate(0.07),
            0.02,
            &factors,
        );
        assert_eq!(deployment.roi.net_capex, Money(208_000.0));
        assert_abs_diff_eq!(deployment.co2_avoided.0, 4983.345, epsilon = 1e-6);
        assert_eq!(deployment.roi.payback_years, None);
    }
}
