use crate::models::{capital_alias, country_alias, CapitalTable, ExtractedAssertion, VerdictKind};
use crate::pipeline::traits::{ClaimVerifier, VerificationResult};
use tracing::debug;

/// Verifier backed by the reference capital table. Pure lookup, no I/O.
pub struct TableVerifier {
    table: CapitalTable,
}

impl TableVerifier {
    pub fn new(table: CapitalTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CapitalTable {
        &self.table
    }

    fn lookup(&self, country: &str) -> Option<&str> {
        // Alias spelling first, then the raw spelling as given.
        country_alias(country)
            .and_then(|canonical| self.table.capital_of(canonical))
            .or_else(|| self.table.capital_of(country))
    }

    fn capitals_match(asserted: &str, reference: &str) -> bool {
        let reference = reference.to_lowercase();
        if asserted.to_lowercase() == reference {
            return true;
        }
        capital_alias(asserted)
            .map(|canonical| canonical.to_lowercase() == reference)
            .unwrap_or(false)
    }
}

impl ClaimVerifier for TableVerifier {
    fn verify(&self, assertion: &ExtractedAssertion) -> VerificationResult {
        let Some(reference) = self.lookup(&assertion.country) else {
            debug!(country = %assertion.country, "country not in reference table");
            return VerificationResult {
                kind: VerdictKind::UnknownCountry,
                confidence: 0.5,
                explanation: format!(
                    "Could not find capital information for {}",
                    assertion.country
                ),
            };
        };

        if Self::capitals_match(&assertion.asserted_capital, reference) {
            VerificationResult {
                kind: VerdictKind::Correct,
                confidence: 0.95,
                explanation: format!(
                    "Correct. The capital of {} is {}.",
                    assertion.country, reference
                ),
            }
        } else {
            VerificationResult {
                kind: VerdictKind::Incorrect,
                confidence: 0.95,
                explanation: format!(
                    "Incorrect. The capital of {} is {}, not {}.",
                    assertion.country, reference, assertion.asserted_capital
                ),
            }
        }
    }
}
