use crate::quantity::{energy::KilowattHours, money::Money, rate::KilowattHourRate};

/// Investment assumptions for one deployment.
#[derive(Copy, Clone, bon::Builder)]
pub struct Investment {
    pub capex: Money,

    /// Capital subsidy, per cent of CAPEX.
    #[builder(default = 0.0)]
    pub subsidy_pct: f64,

    pub annual_energy: KilowattHours,

    #[builder(default = KilowattHourRate(0.07))]
    pub tariff: KilowattHourRate,

    /// Annual operating expenditure as a share of net CAPEX.
    #[builder(default = 0.02)]
    pub opex_pct: f64,
}

impl Investment {
    /// Derive the return-on-investment figures. Pure, total over numeric inputs.
    #[must_use]
    pub fn roi(self) -> Roi {
        let net_capex = self.capex * (1.0 - self.subsidy_pct / 100.0);
        let annual_saving = self.annual_energy * self.tariff;
        let annual_opex = net_capex * self.opex_pct;
        let net_annual_benefit = annual_saving - annual_opex;
        Roi {
            net_capex: net_capex.rounded(),
            annual_saving: annual_saving.rounded(),
            annual_opex: annual_opex.rounded(),
            net_annual_benefit: net_annual_benefit.rounded(),
            // A non-positive benefit never pays the investment back, so there is
            // no finite period to report.
            payback_years: (net_annual_benefit.0 > 0.0)
                .then(|| ((net_capex.0 / net_annual_benefit.0) * 100.0).round() / 100.0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Roi {
    pub net_capex: Money,
    pub annual_saving: Money,
    pub annual_opex: Money,
    pub net_annual_benefit: Money,

    /// `None` when the net annual benefit is non-positive.
    pub payback_years: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsidised_but_unprofitable() {
        let roi = Investment::builder()
            .capex(Money(100_000.0))
            .subsidy_pct(20.0)
            .annual_energy(KilowattHours(7000.0))
            .build()
            .roi();
        assert_eq!(roi.net_capex, Money(80_000.0));
        assert_eq!(roi.annual_saving, Money(490.0));
        assert_eq!(roi.annual_opex, Money(1600.0));
        assert_eq!(roi.net_annual_benefit, Money(-1110.0));
        assert_eq!(roi.payback_years, None);
    }

    #[test]
    fn low_tariff_never_pays_back() {
        let roi = Investment::builder()
            .capex(Money(50_000.0))
            .annual_energy(KilowattHours(8000.0))
            .build()
            .roi();
        assert_eq!(roi.annual_saving, Money(560.0));
        assert_eq!(roi.annual_opex, Money(1000.0));
        assert_eq!(roi.net_annual_benefit, Money(-440.0));
        assert_eq!(roi.payback_years, None);
    }

    #[test]
    fn profitable_deployment() {
        let roi = Investment::builder()
            .capex(Money(100_000.0))
            .subsidy_pct(20.0)
            .annual_energy(KilowattHours(120_000.0))
            .build()
            .roi();
        assert_eq!(roi.net_capex, Money(80_000.0));
        assert_eq!(roi.annual_saving, Money(8400.0));
        assert_eq!(roi.annual_opex, Money(1600.0));
        assert_eq!(roi.net_annual_benefit, Money(6800.0));
        assert_eq!(roi.payback_years, Some(11.76));
    }

    #[test]
    fn idempotent() {
        let investment = Investment::builder()
            .capex(Money(100_000.0))
            .annual_energy(KilowattHours(120_000.0))
            .build();
        assert_eq!(investment.roi(), investment.roi());
    }
}
