//! Worker quality and the strategies that derive it.
//!
//! A strategy turns either raw result counts or a [0, 1] score into a
//! [`WorkerQuality`]. Exponential formulas follow "An Incremental Truth
//! Inference to Aggregate Contributions in GWAPs".

mod influence;

pub use influence::{Exponential, Linear, QualityInfluence, QualityInfluenceKind, Uniform};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{JurorResult, QualityError};

/// Quality of a worker in [0.0, 1.0].
///
/// Unlike a clamped score, construction fails on out-of-range input
/// (including NaN) so a broken formula surfaces instead of being hidden.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct WorkerQuality(f64);

impl WorkerQuality {
    pub const BEST: WorkerQuality = WorkerQuality(1.0);

    pub fn new(value: f64) -> JurorResult<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(QualityError::OutOfRange { value }.into())
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for WorkerQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl TryFrom<f64> for WorkerQuality {
    type Error = crate::errors::JurorError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WorkerQuality> for f64 {
    fn from(q: WorkerQuality) -> Self {
        q.0
    }
}
