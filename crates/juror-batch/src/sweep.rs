//! Parameter sweeps.

use juror_core::config::{EmConfig, EmVariant};
use juror_core::traits::DatasetKey;

use crate::request::RunRequest;

/// Hybrid run requests for every dataset × threshold pair, datasets outermost.
///
/// Convergence threshold and iteration cap are taken from `base`.
pub fn threshold_sweep(
    datasets: &[DatasetKey],
    thresholds: &[f64],
    base: &EmConfig,
) -> Vec<RunRequest> {
    datasets
        .iter()
        .flat_map(|dataset| {
            thresholds.iter().map(move |&switch_threshold| {
                RunRequest::new(
                    dataset.clone(),
                    EmConfig {
                        variant: EmVariant::Hybrid,
                        switch_threshold,
                        ..base.clone()
                    },
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_is_cross_product_in_dataset_order() {
        let datasets = [DatasetKey::from("ws2016"), DatasetKey::from("ws2017")];
        let base = EmConfig {
            max_iterations: 20,
            ..EmConfig::classic()
        };
        let requests = threshold_sweep(&datasets, &[0.01, 0.05, 0.1], &base);

        assert_eq!(requests.len(), 6);
        assert_eq!(requests[0].dataset, datasets[0]);
        assert_eq!(requests[3].dataset, datasets[1]);
        assert_eq!(requests[4].config.switch_threshold, 0.05);
        assert!(requests
            .iter()
            .all(|r| r.config.variant == EmVariant::Hybrid && r.config.max_iterations == 20));
    }
}
