use serde::{Deserialize, Serialize};

use super::WorkerQuality;
use crate::errors::JurorResult;

/// How a worker's track record influences their quality.
pub trait QualityInfluence: Send + Sync {
    /// Quality from the number of results and how many of them were false.
    fn estimate(
        &self,
        nr_results: f64,
        false_results: f64,
        alpha: f64,
    ) -> JurorResult<WorkerQuality>;

    /// Quality from an already normalized [0, 1] score.
    fn from_score(&self, score: f64, alpha: f64) -> JurorResult<WorkerQuality>;
}

/// Share of correct results.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl QualityInfluence for Linear {
    fn estimate(
        &self,
        nr_results: f64,
        false_results: f64,
        _alpha: f64,
    ) -> JurorResult<WorkerQuality> {
        WorkerQuality::new((nr_results - false_results) / nr_results)
    }

    fn from_score(&self, score: f64, _alpha: f64) -> JurorResult<WorkerQuality> {
        WorkerQuality::new(score)
    }
}

/// `exp(-alpha * false_results)`; punishes every mistake by a constant factor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exponential;

impl QualityInfluence for Exponential {
    fn estimate(
        &self,
        _nr_results: f64,
        false_results: f64,
        alpha: f64,
    ) -> JurorResult<WorkerQuality> {
        WorkerQuality::new((-alpha * false_results).exp())
    }

    fn from_score(&self, score: f64, alpha: f64) -> JurorResult<WorkerQuality> {
        WorkerQuality::new((-alpha * (1.0 - score)).exp())
    }
}

/// Every worker counts the same.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl QualityInfluence for Uniform {
    fn estimate(
        &self,
        _nr_results: f64,
        _false_results: f64,
        _alpha: f64,
    ) -> JurorResult<WorkerQuality> {
        Ok(WorkerQuality::BEST)
    }

    fn from_score(&self, _score: f64, _alpha: f64) -> JurorResult<WorkerQuality> {
        Ok(WorkerQuality::BEST)
    }
}

/// Config-selectable strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityInfluenceKind {
    #[default]
    Linear,
    Exponential,
    Uniform,
}

impl QualityInfluenceKind {
    fn strategy(self) -> &'static dyn QualityInfluence {
        match self {
            Self::Linear => &Linear,
            Self::Exponential => &Exponential,
            Self::Uniform => &Uniform,
        }
    }
}

impl QualityInfluence for QualityInfluenceKind {
    fn estimate(
        &self,
        nr_results: f64,
        false_results: f64,
        alpha: f64,
    ) -> JurorResult<WorkerQuality> {
        self.strategy().estimate(nr_results, false_results, alpha)
    }

    fn from_score(&self, score: f64, alpha: f64) -> JurorResult<WorkerQuality> {
        self.strategy().from_score(score, alpha)
    }
}
