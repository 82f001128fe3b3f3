use crate::models::{Claim, Verdict, VerdictKind};
use crate::pipeline::traits::{ClaimExtractor, ClaimVerifier, VerificationResult};
use tracing::debug;

/// Extractor + verifier glued together: one claim in, one verdict out.
pub struct FactCheckPipeline<E, V>
where
    E: ClaimExtractor,
    V: ClaimVerifier,
{
    pub extractor: E,
    pub verifier: V,
}

impl<E, V> FactCheckPipeline<E, V>
where
    E: ClaimExtractor,
    V: ClaimVerifier,
{
    pub fn check(&self, claim: &Claim) -> Verdict {
        let Some(assertion) = self.extractor.extract(&claim.raw_text) else {
            debug!(claim = %claim.raw_text, "no claim template matched");
            return Verdict {
                claim: claim.raw_text.clone(),
                kind: VerdictKind::Unparseable,
                explanation: "Unable to verify this claim".to_string(),
                confidence: 0.0,
            };
        };

        let VerificationResult {
            kind,
            confidence,
            explanation,
        } = self.verifier.verify(&assertion);
        debug!(
            country = %assertion.country,
            asserted = %assertion.asserted_capital,
            ?kind,
            "claim verified"
        );
        Verdict {
            claim: claim.raw_text.clone(),
            kind,
            explanation,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::mock::{DummyExtractor, DummyVerifier};

    #[test]
    fn pipeline_threads_the_verifier_result_through() {
        let pipeline = FactCheckPipeline {
            extractor: DummyExtractor::hit("France", "Paris"),
            verifier: DummyVerifier,
        };
        let verdict = pipeline.check(&Claim::new("whatever the extractor says"));
        assert_eq!(verdict.kind, VerdictKind::Correct);
        assert_eq!(verdict.claim, "whatever the extractor says");
        assert_eq!(verdict.confidence, 0.8);
    }

    #[test]
    fn no_extraction_means_unparseable_with_zero_confidence() {
        let pipeline = FactCheckPipeline {
            extractor: DummyExtractor::miss(),
            verifier: DummyVerifier,
        };
        let verdict = pipeline.check(&Claim::new("Bananas are yellow"));
        assert_eq!(verdict.kind, VerdictKind::Unparseable);
        assert_eq!(verdict.confidence, 0.0);
        assert_eq!(verdict.explanation, "Unable to verify this claim");
    }
}
