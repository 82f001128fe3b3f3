use crate::models::ExtractedAssertion;
use crate::pipeline::traits::ClaimExtractor;
use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered claim templates. The first matching template wins, so the more
/// specific phrasings come first.
static CLAIM_TEMPLATES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^[^\p{L}]*i\s+(?:think|believe)\s+(?:that\s+)?the\s+capital\s+(?:city\s+)?of\s+(\p{L}[\p{L}\s]*?)\s+is\s+(\p{L}[\p{L}\s,\.]*)",
        r"(?i)^[^\p{L}]*the\s+capital\s+(?:city\s+)?of\s+(\p{L}[\p{L}\s]*?)\s+is\s+(\p{L}[\p{L}\s,\.]*)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("claim template"))
    .collect()
});

/// Looser, unanchored variant used to spot capital claims inside free-form
/// prompt/response text.
static SCAN_TEMPLATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:the\s+capital\s+of|capital\s+city\s+of)\s+(\p{L}[\p{L}\s]*?)\s+is\s+(\p{L}[\p{L}\s,\.]*)")
        .expect("scan template")
});

fn clean_country(raw: &str) -> String {
    raw.trim().to_string()
}

fn clean_capital(raw: &str) -> String {
    let mut t = raw.trim().to_string();
    while t.ends_with(['.', ',']) {
        t.pop();
    }
    t.trim_end().to_string()
}

/// Regex-template claim extractor.
pub struct PatternExtractor;

impl ClaimExtractor for PatternExtractor {
    fn extract(&self, text: &str) -> Option<ExtractedAssertion> {
        for template in CLAIM_TEMPLATES.iter() {
            if let Some(caps) = template.captures(text) {
                let country = clean_country(caps.get(1)?.as_str());
                let asserted_capital = clean_capital(caps.get(2)?.as_str());
                if country.is_empty() || asserted_capital.is_empty() {
                    continue;
                }
                return Some(ExtractedAssertion {
                    country,
                    asserted_capital,
                });
            }
        }
        None
    }
}

/// Scan free-form text for capital claims, rebuilding each hit as a
/// canonical claim sentence the service understands.
pub fn find_claims(text: &str) -> Vec<String> {
    SCAN_TEMPLATE
        .captures_iter(text)
        .filter_map(|caps| {
            let country = clean_country(caps.get(1)?.as_str());
            let city = clean_capital(caps.get(2)?.as_str());
            if country.is_empty() || city.is_empty() {
                return None;
            }
            Some(format!("The capital of {} is {}", country, city))
        })
        .collect()
}
