use crate::config::SignalThresholds;
use crate::models::IndicatorSet;

/// Outcome of the volume check: an additive confidence boost and an optional
/// comment for the reasons list.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeAssessment {
    pub boost: f64,
    pub note: Option<String>,
}

/// Confirms (or questions) a call from relative volume. It never votes a
/// direction.
pub struct VolumeConfirmation {
    high_ratio: f64,
    low_ratio: f64,
    boost: f64,
}

impl VolumeConfirmation {
    pub fn new(thresholds: &SignalThresholds) -> Self {
        Self {
            high_ratio: thresholds.high_volume_ratio,
            low_ratio: thresholds.low_volume_ratio,
            boost: thresholds.volume_boost,
        }
    }

    pub fn assess(&self, indicators: &IndicatorSet) -> VolumeAssessment {
        let ratio = indicators.volume_ratio;
        if ratio > self.high_ratio {
            VolumeAssessment {
                boost: self.boost,
                note: Some(format!(
                    "Volume is {:.1}x its average: strong participation confirms the move",
                    ratio
                )),
            }
        } else if ratio < self.low_ratio {
            VolumeAssessment {
                boost: 0.0,
                note: Some(format!(
                    "Volume is only {:.1}x its average: thin participation, treat the signal with caution",
                    ratio
                )),
            }
        } else {
            VolumeAssessment {
                boost: 0.0,
                note: None,
            }
        }
    }
}

impl Default for VolumeConfirmation {
    fn default() -> Self {
        Self::new(&SignalThresholds::default())
    }
}
