use cs_core::Error;

/// Parameters of the per-column stripe detector.
#[derive(Debug, Clone, PartialEq)]
pub struct StripeConfig {
    /// Adjacent streak ratios must lie strictly inside `(ratio_low, ratio_high)`.
    pub ratio_low: f32,
    pub ratio_high: f32,
    /// Minimum fraction of background-mask pixels among the non-target
    /// streaks of a candidate region.
    pub density_threshold: f32,
    /// Look-ahead used to bridge background gaps inside target streaks.
    /// Zero disables bridging.
    pub gap_tolerance: usize,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            ratio_low: 0.5,
            ratio_high: 2.0,
            density_threshold: 0.3,
            gap_tolerance: 0,
        }
    }
}

impl StripeConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.ratio_low.is_finite() && self.ratio_high.is_finite())
            || self.ratio_low <= 0.0
            || self.ratio_low >= self.ratio_high
        {
            return Err(Error::InvalidRatioRange);
        }

        if !(self.density_threshold > 0.0 && self.density_threshold < 1.0) {
            return Err(Error::InvalidDensityThreshold);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cs_core::Error;

    use crate::StripeConfig;

    #[test]
    fn default_is_valid() {
        assert_eq!(StripeConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_ratio_range() {
        for (low, high) in [(0.0, 2.0), (2.0, 0.5), (1.0, 1.0), (0.5, f32::INFINITY)] {
            let cfg = StripeConfig {
                ratio_low: low,
                ratio_high: high,
                ..StripeConfig::default()
            };
            assert_eq!(cfg.validate(), Err(Error::InvalidRatioRange), "{low}..{high}");
        }
    }

    #[test]
    fn rejects_bad_density_threshold() {
        for t in [0.0, 1.0, -0.2, f32::NAN] {
            let cfg = StripeConfig {
                density_threshold: t,
                ..StripeConfig::default()
            };
            assert_eq!(cfg.validate(), Err(Error::InvalidDensityThreshold));
        }
    }
}
