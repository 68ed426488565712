/// Worker quality errors.
#[derive(Debug, thiserror::Error)]
pub enum QualityError {
    #[error("worker quality must lie in [0, 1], got {value}")]
    OutOfRange { value: f64 },
}
