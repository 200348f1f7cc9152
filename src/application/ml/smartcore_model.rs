use super::predictor::ClaimPredictor;
use anyhow::Context;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Random forest claim model deserialized from a JSON artifact.
#[derive(Debug)]
pub struct SmartcoreClaimModel {
    model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl SmartcoreClaimModel {
    /// Loads the model artifact from disk. Any failure is reported to the
    /// caller so the service can start in degraded mode instead of crashing.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open model file {}", path.display()))?;

        let model = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to deserialize model file {}", path.display()))?;

        Ok(Self { model })
    }
}

impl ClaimPredictor for SmartcoreClaimModel {
    fn predict(&self, features: &[f64]) -> Result<f64, String> {
        let input_matrix = DenseMatrix::from_2d_vec(&vec![features.to_vec()])
            .map_err(|e| format!("Matrix creation failed: {}", e))?;

        let predictions = self.model.predict(&input_matrix).map_err(|e| e.to_string())?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| "No prediction returned".to_string())
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }
}
