use crate::models::{ExtractedAssertion, VerdictKind};

/// What a verifier concluded about one extracted assertion. The pipeline
/// attaches the original claim text to produce the full `Verdict`.
#[derive(Clone, Debug)]
pub struct VerificationResult {
    pub kind: VerdictKind,
    pub confidence: f32,
    pub explanation: String,
}

pub trait ClaimExtractor: Send + Sync {
    /// Apply the claim templates in order; `None` means no template matched.
    fn extract(&self, text: &str) -> Option<ExtractedAssertion>;
}

pub trait ClaimVerifier: Send + Sync {
    fn verify(&self, assertion: &ExtractedAssertion) -> VerificationResult;
}
