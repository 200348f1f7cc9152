/// Whether a quote field accepts only whole numbers or any real value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
}

/// Declarative description of one quote field: its wire name, accepted kind,
/// inclusive range, and the value substituted when the field is absent.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

pub const AGE: FieldSpec = FieldSpec {
    name: "Age",
    kind: FieldKind::Integer,
    min: 0.0,
    max: 100.0,
    default: 45.0,
};

pub const DIABETES: FieldSpec = FieldSpec {
    name: "Diabetes",
    kind: FieldKind::Integer,
    min: 0.0,
    max: 1.0,
    default: 0.0,
};

pub const BLOOD_PRESSURE_PROBLEMS: FieldSpec = FieldSpec {
    name: "BloodPressureProblems",
    kind: FieldKind::Integer,
    min: 0.0,
    max: 1.0,
    default: 0.0,
};

pub const ANY_TRANSPLANTS: FieldSpec = FieldSpec {
    name: "AnyTransplants",
    kind: FieldKind::Integer,
    min: 0.0,
    max: 1.0,
    default: 0.0,
};

pub const ANY_CHRONIC_DISEASES: FieldSpec = FieldSpec {
    name: "AnyChronicDiseases",
    kind: FieldKind::Integer,
    min: 0.0,
    max: 1.0,
    default: 0.0,
};

pub const HEIGHT: FieldSpec = FieldSpec {
    name: "Height",
    kind: FieldKind::Float,
    min: 50.0,
    max: 250.0,
    default: 170.0,
};

pub const WEIGHT: FieldSpec = FieldSpec {
    name: "Weight",
    kind: FieldKind::Float,
    min: 10.0,
    max: 300.0,
    default: 70.0,
};

pub const KNOWN_ALLERGIES: FieldSpec = FieldSpec {
    name: "KnownAllergies",
    kind: FieldKind::Integer,
    min: 0.0,
    max: 1.0,
    default: 0.0,
};

pub const HISTORY_OF_CANCER_IN_FAMILY: FieldSpec = FieldSpec {
    name: "HistoryOfCancerInFamily",
    kind: FieldKind::Integer,
    min: 0.0,
    max: 1.0,
    default: 0.0,
};

pub const NUMBER_OF_MAJOR_SURGERIES: FieldSpec = FieldSpec {
    name: "NumberOfMajorSurgeries",
    kind: FieldKind::Integer,
    min: 0.0,
    max: 10.0,
    default: 0.0,
};

/// Ordered list of quote fields.
/// This order MUST match exactly the column order the claim model was
/// trained on. Any change here is a breaking change for deployed artifacts.
pub const QUOTE_FIELDS: [FieldSpec; 10] = [
    AGE,
    DIABETES,
    BLOOD_PRESSURE_PROBLEMS,
    ANY_TRANSPLANTS,
    ANY_CHRONIC_DISEASES,
    HEIGHT,
    WEIGHT,
    KNOWN_ALLERGIES,
    HISTORY_OF_CANCER_IN_FAMILY,
    NUMBER_OF_MAJOR_SURGERIES,
];

/// Wire names in training order, as reported by the health endpoint.
pub fn feature_names() -> Vec<&'static str> {
    QUOTE_FIELDS.iter().map(|f| f.name).collect()
}
