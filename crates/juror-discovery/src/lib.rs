//! # juror-discovery
//!
//! Truth discovery over an [`AnswerCorpus`] by reliability-weighted voting,
//! the lighter siblings of the Dawid–Skene engine in `juror-em`.
//!
//! [`crh`] and [`catd`] alternate between source weights and a weighted
//! vote, starting from the majority vote. [`zencrowd`] keeps a soft
//! posterior per question and a single reliability per participant.
//! Every engine implements [`ITruthInference`], so callers can swap one in
//! wherever a `juror_em::EmEngine` runs.
//!
//! [`AnswerCorpus`]: juror_core::AnswerCorpus

pub mod catd;
pub mod convergence;
pub mod crh;
pub mod output;
pub mod vote;
pub mod zencrowd;

mod fixed_point;

use std::sync::Arc;

use juror_core::config::{DiscoveryAlgorithm, DiscoveryConfig};
use juror_core::errors::{InputError, JurorResult};
use juror_core::traits::ITruthInference;
use juror_core::AnswerCorpus;

pub use catd::CatdEngine;
pub use convergence::WeightConvergence;
pub use crh::CrhEngine;
pub use output::{DiscoveryOutcome, DiscoveryOutput};
pub use vote::{Truths, Weights};
pub use zencrowd::ZenCrowdEngine;

/// Engine for the algorithm selected in `config`.
pub fn engine(
    corpus: Arc<AnswerCorpus>,
    config: DiscoveryConfig,
) -> JurorResult<Box<dyn ITruthInference>> {
    let engine: Box<dyn ITruthInference> = match config.algorithm {
        DiscoveryAlgorithm::Crh => Box::new(CrhEngine::new(corpus, config)?),
        DiscoveryAlgorithm::Catd => Box::new(CatdEngine::new(corpus, config)?),
        DiscoveryAlgorithm::ZenCrowd => Box::new(ZenCrowdEngine::new(corpus, config)?),
    };
    Ok(engine)
}

fn ensure_not_empty(corpus: &AnswerCorpus) -> JurorResult<()> {
    if corpus.is_empty() {
        return Err(InputError::EmptyCorpus.into());
    }
    Ok(())
}
