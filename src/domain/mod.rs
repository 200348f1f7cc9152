// Domain-specific error types
pub mod errors;

// Quote field registry (names, kinds, ranges, defaults)
pub mod features;

// Premium and coverage arithmetic
pub mod pricing;

// Raw payload decoding and the validated quote request
pub mod quote;
