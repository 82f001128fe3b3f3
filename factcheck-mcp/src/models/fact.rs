use std::collections::HashMap;

/// Builtin reference facts. Keys are stored lowercased; some countries appear
/// under more than one accepted name.
const BUILTIN_FACTS: &[(&str, &str)] = &[
    ("france", "Paris"),
    ("germany", "Berlin"),
    ("japan", "Tokyo"),
    ("united states", "Washington, D.C."),
    ("united states of america", "Washington, D.C."),
    ("australia", "Canberra"),
    ("brazil", "Brasília"),
    ("canada", "Ottawa"),
    ("italy", "Rome"),
    ("spain", "Madrid"),
    ("united kingdom", "London"),
    ("china", "Beijing"),
    ("russia", "Moscow"),
    ("india", "New Delhi"),
    ("south korea", "Seoul"),
    ("republic of korea", "Seoul"),
];

/// Immutable country -> capital mapping, built once at process start.
#[derive(Clone, Debug)]
pub struct CapitalTable {
    map: HashMap<String, String>,
}

impl CapitalTable {
    pub fn builtin() -> Self {
        let map = BUILTIN_FACTS
            .iter()
            .map(|(country, capital)| (country.to_string(), capital.to_string()))
            .collect();
        Self { map }
    }

    /// Fold extra `(country, capital)` pairs into the table. Later pairs win
    /// over builtin entries with the same key.
    pub fn merge_pairs(&mut self, pairs: impl IntoIterator<Item = (String, String)>) {
        for (country, capital) in pairs {
            let key = country.trim().to_lowercase();
            if !key.is_empty() && !capital.trim().is_empty() {
                self.map.insert(key, capital.trim().to_string());
            }
        }
    }

    /// Case-insensitive exact lookup.
    pub fn capital_of(&self, country: &str) -> Option<&str> {
        self.map
            .get(&country.trim().to_lowercase())
            .map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse `country=capital;country=capital` pairs, as given in the
/// `FACTCHECK_EXTRA_FACTS` environment variable.
pub fn parse_fact_pairs(raw: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for item in raw.split(';') {
        let mut parts = item.splitn(2, '=');
        if let (Some(country), Some(capital)) = (parts.next(), parts.next()) {
            if !country.trim().is_empty() && !capital.trim().is_empty() {
                pairs.push((country.trim().to_string(), capital.trim().to_string()));
            }
        }
    }
    pairs
}

/// Canonical country name for common aliases and short forms.
pub fn country_alias(raw: &str) -> Option<&'static str> {
    match raw.trim().to_lowercase().as_str() {
        "united states" | "us" | "usa" => Some("United States of America"),
        "uk" | "great britain" => Some("United Kingdom"),
        "south korea" => Some("Republic of Korea"),
        "north korea" => Some("Democratic People's Republic of Korea"),
        _ => None,
    }
}

/// Canonical capital name for common alternative spellings.
pub fn capital_alias(raw: &str) -> Option<&'static str> {
    match raw.trim().to_lowercase().as_str() {
        "washington" | "washington dc" | "washington d.c." | "washington d.c"
        | "washington, d.c." | "washington, d.c" => Some("Washington, D.C."),
        "new york" => Some("New York City"),
        _ => None,
    }
}
