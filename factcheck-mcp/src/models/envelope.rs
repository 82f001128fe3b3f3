use crate::models::verdict::Verdict;
use serde::{Deserialize, Serialize};

pub const MCP_VERSION: &str = "1.0";

const CONTEXT_TYPE: &str = "fact_check";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct McpContext {
    #[serde(rename = "type")]
    pub context_type: String,
    pub claim: String,
    pub correct_answer: String,
    pub confidence: f32,
}

/// The fixed response shape carried over the wire.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct McpEnvelope {
    pub version: String,
    pub context: McpContext,
}

impl McpEnvelope {
    pub fn from_verdict(verdict: &Verdict) -> Self {
        Self {
            version: MCP_VERSION.to_string(),
            context: McpContext {
                context_type: CONTEXT_TYPE.to_string(),
                claim: verdict.claim.clone(),
                correct_answer: verdict.explanation.clone(),
                confidence: verdict.confidence,
            },
        }
    }
}
