// Claim model loading and inference
pub mod ml;

// Quote orchestration
pub mod quote_service;
