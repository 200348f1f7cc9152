use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::errors::{FieldErrorKind, QuoteError};
use crate::domain::features::{self, FieldKind, FieldSpec};

/// Quote payload exactly as it arrived on the wire.
///
/// Every field is kept as raw JSON so that decoding can distinguish an
/// absent field (use the default) from an explicit `null` (reject).
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuote {
    #[serde(rename = "Age", default, deserialize_with = "explicit_value")]
    pub age: Option<Value>,

    #[serde(rename = "Diabetes", default, deserialize_with = "explicit_value")]
    pub diabetes: Option<Value>,

    #[serde(rename = "BloodPressureProblems", default, deserialize_with = "explicit_value")]
    pub blood_pressure_problems: Option<Value>,

    #[serde(rename = "AnyTransplants", default, deserialize_with = "explicit_value")]
    pub any_transplants: Option<Value>,

    #[serde(rename = "AnyChronicDiseases", default, deserialize_with = "explicit_value")]
    pub any_chronic_diseases: Option<Value>,

    #[serde(rename = "Height", default, deserialize_with = "explicit_value")]
    pub height: Option<Value>,

    #[serde(rename = "Weight", default, deserialize_with = "explicit_value")]
    pub weight: Option<Value>,

    #[serde(rename = "KnownAllergies", default, deserialize_with = "explicit_value")]
    pub known_allergies: Option<Value>,

    #[serde(rename = "HistoryOfCancerInFamily", default, deserialize_with = "explicit_value")]
    pub history_of_cancer_in_family: Option<Value>,

    #[serde(rename = "NumberOfMajorSurgeries", default, deserialize_with = "explicit_value")]
    pub number_of_major_surgeries: Option<Value>,
}

// For `Option` fields serde folds a JSON null into `None`, the same as an
// absent key. Wrapping the raw value keeps null as `Some(Value::Null)` so
// the decoder can reject it.
fn explicit_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Fully validated quote request with every field coerced and range-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub age: u32,
    pub diabetes: u8,
    pub blood_pressure_problems: u8,
    pub any_transplants: u8,
    pub any_chronic_diseases: u8,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub known_allergies: u8,
    pub history_of_cancer_in_family: u8,
    pub number_of_major_surgeries: u32,
}

impl Default for QuoteRequest {
    fn default() -> Self {
        Self {
            age: 45,
            diabetes: 0,
            blood_pressure_problems: 0,
            any_transplants: 0,
            any_chronic_diseases: 0,
            height_cm: 170.0,
            weight_kg: 70.0,
            known_allergies: 0,
            history_of_cancer_in_family: 0,
            number_of_major_surgeries: 0,
        }
    }
}

impl QuoteRequest {
    /// Validates a raw payload field by field, in registry order, so the
    /// error always names the first offending field.
    pub fn decode(raw: &RawQuote) -> Result<Self, QuoteError> {
        Ok(Self {
            age: decode_field(&features::AGE, raw.age.as_ref())? as u32,
            diabetes: decode_field(&features::DIABETES, raw.diabetes.as_ref())? as u8,
            blood_pressure_problems: decode_field(
                &features::BLOOD_PRESSURE_PROBLEMS,
                raw.blood_pressure_problems.as_ref(),
            )? as u8,
            any_transplants: decode_field(&features::ANY_TRANSPLANTS, raw.any_transplants.as_ref())?
                as u8,
            any_chronic_diseases: decode_field(
                &features::ANY_CHRONIC_DISEASES,
                raw.any_chronic_diseases.as_ref(),
            )? as u8,
            height_cm: decode_field(&features::HEIGHT, raw.height.as_ref())?,
            weight_kg: decode_field(&features::WEIGHT, raw.weight.as_ref())?,
            known_allergies: decode_field(&features::KNOWN_ALLERGIES, raw.known_allergies.as_ref())?
                as u8,
            history_of_cancer_in_family: decode_field(
                &features::HISTORY_OF_CANCER_IN_FAMILY,
                raw.history_of_cancer_in_family.as_ref(),
            )? as u8,
            number_of_major_surgeries: decode_field(
                &features::NUMBER_OF_MAJOR_SURGERIES,
                raw.number_of_major_surgeries.as_ref(),
            )? as u32,
        })
    }

    /// Flattens the request to the column order the claim model was trained
    /// on. Must stay in lockstep with [`features::QUOTE_FIELDS`].
    pub fn to_feature_vector(&self) -> Vec<f64> {
        vec![
            f64::from(self.age),
            f64::from(self.diabetes),
            f64::from(self.blood_pressure_problems),
            f64::from(self.any_transplants),
            f64::from(self.any_chronic_diseases),
            self.height_cm,
            self.weight_kg,
            f64::from(self.known_allergies),
            f64::from(self.history_of_cancer_in_family),
            f64::from(self.number_of_major_surgeries),
        ]
    }
}

/// Coerces one raw field to a number, then checks it against the field spec.
///
/// Accepted shapes: absent (falls back to the default), booleans (0/1),
/// JSON numbers, and strings holding a plain non-negative number. Anything
/// else, including explicit `null`, is rejected.
fn decode_field(spec: &FieldSpec, value: Option<&Value>) -> Result<f64, QuoteError> {
    let invalid = |kind: FieldErrorKind| QuoteError::InvalidField {
        field: spec.name,
        kind,
    };

    let number = match value {
        None => return Ok(spec.default),
        Some(Value::Bool(flag)) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| invalid(FieldErrorKind::UnsupportedType))?,
        Some(Value::String(text)) => {
            parse_numeric_text(text).ok_or_else(|| invalid(FieldErrorKind::NonNumericText))?
        }
        Some(_) => return Err(invalid(FieldErrorKind::UnsupportedType)),
    };

    if spec.kind == FieldKind::Integer && number.fract() != 0.0 {
        return Err(invalid(FieldErrorKind::NotAnInteger));
    }

    if number < spec.min || number > spec.max {
        return Err(invalid(FieldErrorKind::OutOfRange {
            value: number,
            min: spec.min,
            max: spec.max,
        }));
    }

    Ok(number)
}

/// Parses text that consists of ASCII digits with at most one decimal point,
/// ignoring surrounding whitespace. Signs, exponents, and anything else make
/// the text non-numeric.
fn parse_numeric_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let digits = trimmed.replacen('.', "", 1);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
