//! Potentiometer scaling
//!
//! The pot sits across the full ADC input range; its wiper position maps
//! linearly onto the element's total resistance. The raw sample is also
//! mirrored to the DAC unmodified, so only the display value needs scaling.

/// Potentiometer element resistance, wiper at full scale
pub const POT_FULL_SCALE_OHMS: u32 = 5_000;

/// Maximum 12-bit ADC reading
pub const ADC_FULL_SCALE: u16 = 0xFFF;

/// Linear raw-sample-to-ohms scaling
#[derive(Debug, Clone, Copy)]
pub struct PotScale {
    full_scale_ohms: u32,
    adc_max: u16,
}

impl Default for PotScale {
    fn default() -> Self {
        Self::new(POT_FULL_SCALE_OHMS, ADC_FULL_SCALE)
    }
}

impl PotScale {
    /// Create a scale for the given pot and ADC resolution
    pub const fn new(full_scale_ohms: u32, adc_max: u16) -> Self {
        Self {
            full_scale_ohms,
            adc_max,
        }
    }

    /// Convert a raw conversion result into ohms
    ///
    /// Samples above the nominal maximum clamp to full scale.
    pub fn ohms_from_raw(&self, raw: u16) -> u32 {
        let raw = raw.min(self.adc_max) as u32;
        raw * self.full_scale_ohms / self.adc_max as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let scale = PotScale::default();
        assert_eq!(scale.ohms_from_raw(0), 0);
        assert_eq!(scale.ohms_from_raw(ADC_FULL_SCALE), POT_FULL_SCALE_OHMS);
    }

    #[test]
    fn midpoint() {
        let scale = PotScale::default();
        // 2048 / 4095 * 5000, truncating
        assert_eq!(scale.ohms_from_raw(0x800), 2_500);
    }

    #[test]
    fn out_of_range_sample_clamps() {
        let scale = PotScale::default();
        assert_eq!(scale.ohms_from_raw(u16::MAX), POT_FULL_SCALE_OHMS);
    }

    #[test]
    fn monotonic() {
        let scale = PotScale::default();
        let mut last = 0;
        for raw in (0..=ADC_FULL_SCALE).step_by(7) {
            let ohms = scale.ohms_from_raw(raw);
            assert!(ohms >= last);
            last = ohms;
        }
    }
}
