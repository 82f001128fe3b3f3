use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    Correct,
    Incorrect,
    UnknownCountry,
    Unparseable,
}

/// Outcome of checking one claim against the reference table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Verdict {
    pub claim: String,
    pub kind: VerdictKind,
    pub explanation: String,
    pub confidence: f32,
}
