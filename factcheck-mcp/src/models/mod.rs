pub mod claim;
pub mod envelope;
pub mod fact;
pub mod verdict;

pub use claim::{Claim, ExtractedAssertion};
pub use envelope::{McpContext, McpEnvelope, MCP_VERSION};
pub use fact::{capital_alias, country_alias, parse_fact_pairs, CapitalTable};
pub use verdict::{Verdict, VerdictKind};
