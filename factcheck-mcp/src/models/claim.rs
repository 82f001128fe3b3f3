use serde::{Deserialize, Serialize};

/// One claim as received, ephemeral for the duration of a request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claim {
    pub raw_text: String,
}

impl Claim {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }
}

/// The (country, asserted capital) pair pulled out of a claim by the
/// extractor templates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedAssertion {
    pub country: String,
    pub asserted_capital: String,
}
