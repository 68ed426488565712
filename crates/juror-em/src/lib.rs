//! # juror-em
//!
//! Dawid–Skene expectation-maximization over an [`AnswerCorpus`], in the
//! hybrid form of Sinha et al. (2018): soft EM until the class priors settle,
//! then hard classification after every E-step.
//!
//! Each step lives in its own module so it can be tested in isolation:
//! [`initial`] seeds the run, [`class_priors`] and [`error_rates`] form the
//! M-step, [`estimation`] the E-step and C-step, [`likelihood`] monitors the
//! fit, and [`convergence`] decides when to switch and when to stop.
//!
//! [`AnswerCorpus`]: juror_core::AnswerCorpus

pub mod class_priors;
pub mod convergence;
pub mod engine;
pub mod error_rates;
pub mod estimation;
pub mod initial;
pub mod likelihood;
pub mod reliability;
pub mod resolution;

mod lookup;

pub use convergence::{ConvergenceController, Decision};
pub use engine::EmEngine;
pub use reliability::{assess_reliability, assess_reliability_with};
pub use resolution::resolve_verdicts;
