pub mod check;
pub mod extract;
pub mod mock;
pub mod traits;
pub mod verify;

pub use check::FactCheckPipeline;
pub use extract::{find_claims, PatternExtractor};
pub use mock::{DummyExtractor, DummyVerifier};
pub use traits::{ClaimExtractor, ClaimVerifier, VerificationResult};
pub use verify::TableVerifier;
