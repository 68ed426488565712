use std::sync::Arc;

use juror_core::config::{EmConfig, EmVariant};
use juror_core::errors::{InputError, JurorResult};
use juror_core::models::{InferenceOutcome, Output, RunReport};
use juror_core::traits::ITruthInference;
use juror_core::{Answer, AnswerCorpus};
use juror_observability::em_run_span;

use crate::convergence::{ConvergenceController, Decision};
use crate::{class_priors, error_rates, estimation, initial, likelihood};

/// Dawid–Skene EM engine, hybrid or classic depending on its [`EmConfig`].
///
/// A run is a pure function of the corpus and the config: single-threaded,
/// no I/O, and bit-for-bit reproducible.
pub struct EmEngine {
    corpus: Arc<AnswerCorpus>,
    config: EmConfig,
}

impl EmEngine {
    /// Create an engine, rejecting inputs the EM loop cannot handle.
    pub fn new(corpus: Arc<AnswerCorpus>, config: EmConfig) -> JurorResult<Self> {
        if corpus.is_empty() {
            return Err(InputError::EmptyCorpus.into());
        }
        if !(0.0..=1.0).contains(&config.switch_threshold) {
            return Err(InputError::SwitchThresholdOutOfRange {
                value: config.switch_threshold,
            }
            .into());
        }
        Ok(Self { corpus, config })
    }

    /// Hybrid engine over `answers` switching below `switch_threshold`.
    pub fn hybrid(
        answers: impl IntoIterator<Item = Answer>,
        switch_threshold: f64,
    ) -> JurorResult<Self> {
        Self::new(
            Arc::new(AnswerCorpus::new(answers)),
            EmConfig::hybrid(switch_threshold),
        )
    }

    /// Classic engine over `answers`.
    pub fn classic(answers: impl IntoIterator<Item = Answer>) -> JurorResult<Self> {
        Self::new(Arc::new(AnswerCorpus::new(answers)), EmConfig::classic())
    }

    pub fn config(&self) -> &EmConfig {
        &self.config
    }

    /// Run and return the last accepted output.
    pub fn run(&self) -> Output {
        self.run_with_report().output
    }

    /// Run and return the last accepted output with the run's trace.
    pub fn run_with_report(&self) -> InferenceOutcome {
        let corpus = self.corpus.as_ref();
        let span = em_run_span!(
            self.name(),
            corpus.question_count(),
            corpus.participant_count()
        );
        let _guard = span.enter();

        let mut controller = ConvergenceController::new(&self.config);
        let seed = initial::estimate(corpus);
        let mut accepted: Option<Output> = None;
        let mut log_likelihoods = Vec::new();
        let mut iteration = 0;

        let (output, stop_reason) = loop {
            iteration += 1;
            let estimates = accepted
                .as_ref()
                .map_or(&seed, |output| output.class_estimations());

            // M-step
            let priors = class_priors::estimate(corpus, estimates);
            let rates = error_rates::estimate(corpus, estimates);

            // E-step (+ C-step in fast mode)
            let next = estimation::recompute(corpus, &rates, &priors, controller.mode());

            let log_likelihood = likelihood::log_likelihood(corpus, &priors, &rates);
            log_likelihoods.push(log_likelihood);
            tracing::debug!(iteration, log_likelihood, mode = ?controller.mode(), "iteration done");

            let current = Output::new(priors, rates, next);
            match controller.observe(iteration, accepted.as_ref(), &current) {
                Decision::Continue => accepted = Some(current),
                Decision::Stop(reason) => break (accepted.unwrap_or(current), reason),
            }
        };

        tracing::info!(
            iterations = iteration,
            stop_reason = ?stop_reason,
            switched_at = ?controller.switched_at(),
            "em run finished"
        );

        InferenceOutcome {
            output,
            report: RunReport {
                iterations: iteration,
                stop_reason,
                switched_at: controller.switched_at(),
                log_likelihoods,
            },
        }
    }
}

impl ITruthInference for EmEngine {
    fn name(&self) -> &'static str {
        match self.config.variant {
            EmVariant::Hybrid => "hybrid-dawid-skene",
            EmVariant::Classic => "dawid-skene",
        }
    }

    fn corpus(&self) -> &AnswerCorpus {
        &self.corpus
    }

    fn infer(&self) -> InferenceOutcome {
        self.run_with_report()
    }
}
