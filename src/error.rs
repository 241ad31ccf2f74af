/// Reasons a weight list is rejected at construction time.
///
/// Every variant is an invalid-argument error: it is returned synchronously
/// by the constructors and can never surface from a draw.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WeightError {
    #[error("weight list is empty")]
    Empty,
    #[error("weight at index {index} is negative: {value}")]
    Negative { index: usize, value: f64 },
    #[error("weight at index {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },
    #[error("{len} outcomes exceed the u32 column range")]
    TooManyOutcomes { len: usize },
    #[error("cannot read {token:?} as a weight")]
    Parse { token: String },
}
