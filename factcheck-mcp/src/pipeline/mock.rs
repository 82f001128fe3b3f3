use crate::models::{ExtractedAssertion, VerdictKind};
use crate::pipeline::traits::{ClaimExtractor, ClaimVerifier, VerificationResult};

/// Extractor stub returning a fixed assertion (or nothing), for exercising
/// the pipeline without regex templates.
pub struct DummyExtractor {
    assertion: Option<ExtractedAssertion>,
}

impl DummyExtractor {
    pub fn hit(country: &str, capital: &str) -> Self {
        Self {
            assertion: Some(ExtractedAssertion {
                country: country.to_string(),
                asserted_capital: capital.to_string(),
            }),
        }
    }

    pub fn miss() -> Self {
        Self { assertion: None }
    }
}

impl ClaimExtractor for DummyExtractor {
    fn extract(&self, _text: &str) -> Option<ExtractedAssertion> {
        self.assertion.clone()
    }
}

pub struct DummyVerifier;

impl ClaimVerifier for DummyVerifier {
    fn verify(&self, assertion: &ExtractedAssertion) -> VerificationResult {
        VerificationResult {
            kind: VerdictKind::Correct,
            confidence: 0.8,
            explanation: format!("dummy verifier: {}", assertion.country),
        }
    }
}
