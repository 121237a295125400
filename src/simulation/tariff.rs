//! Two-tier time-of-use tariff.

use serde::{Deserialize, Serialize};

/// Which rate applies for a given hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TariffBand {
    Peak,
    OffPeak,
}

/// Peak/off-peak rate schedule.
///
/// Rates are stored in pence per kWh and converted to pounds at the point of
/// use. Peak windows are 07:00-17:00 and 19:00-23:00; everything else is
/// off-peak.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TariffSchedule {
    pub peak_pence_per_kwh: f64,
    pub off_peak_pence_per_kwh: f64,
}

impl Default for TariffSchedule {
    fn default() -> Self {
        Self {
            peak_pence_per_kwh: 24.50,
            off_peak_pence_per_kwh: 22.36,
        }
    }
}

impl TariffSchedule {
    pub fn band_for_hour(&self, hour: u32) -> TariffBand {
        if (7..17).contains(&hour) || (19..23).contains(&hour) {
            TariffBand::Peak
        } else {
            TariffBand::OffPeak
        }
    }

    /// Rate in pounds per kWh for the given band.
    pub fn rate_pounds(&self, band: TariffBand) -> f64 {
        match band {
            TariffBand::Peak => self.peak_pence_per_kwh / 100.0,
            TariffBand::OffPeak => self.off_peak_pence_per_kwh / 100.0,
        }
    }

    /// Rate in pounds per kWh applicable at the given hour.
    pub fn rate_pounds_for_hour(&self, hour: u32) -> f64 {
        self.rate_pounds(self.band_for_hour(hour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, TariffBand::OffPeak)]
    #[case(6, TariffBand::OffPeak)]
    #[case(7, TariffBand::Peak)]
    #[case(16, TariffBand::Peak)]
    #[case(17, TariffBand::OffPeak)]
    #[case(18, TariffBand::OffPeak)]
    #[case(19, TariffBand::Peak)]
    #[case(22, TariffBand::Peak)]
    #[case(23, TariffBand::OffPeak)]
    fn test_band_boundaries(#[case] hour: u32, #[case] expected: TariffBand) {
        let tariff = TariffSchedule::default();
        assert_eq!(tariff.band_for_hour(hour), expected);
    }

    #[test]
    fn test_pence_to_pounds_conversion() {
        let tariff = TariffSchedule::default();
        assert!((tariff.rate_pounds(TariffBand::Peak) - 0.2450).abs() < 1e-12);
        assert!((tariff.rate_pounds(TariffBand::OffPeak) - 0.2236).abs() < 1e-12);
    }

    #[test]
    fn test_rate_for_hour_uses_band() {
        let tariff = TariffSchedule::default();
        assert_eq!(
            tariff.rate_pounds_for_hour(12),
            tariff.rate_pounds(TariffBand::Peak)
        );
        assert_eq!(
            tariff.rate_pounds_for_hour(3),
            tariff.rate_pounds(TariffBand::OffPeak)
        );
    }
}
