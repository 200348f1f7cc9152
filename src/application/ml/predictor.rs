/// Interface for claim cost models.
pub trait ClaimPredictor: Send + Sync {
    /// Predict the expected annual claim cost in INR for one applicant.
    ///
    /// `features` must follow the registry order in
    /// [`crate::domain::features::QUOTE_FIELDS`].
    fn predict(&self, features: &[f64]) -> Result<f64, String>;

    /// Get model name/type
    fn name(&self) -> &str;
}
