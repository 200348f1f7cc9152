pub mod predictor;
pub mod smartcore_model;
