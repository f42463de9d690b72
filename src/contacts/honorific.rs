// src/contacts/honorific.rs - Honorifics and salutations for primary contacts
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum probability at which an inferred gender is turned into an
/// honorific.
pub const INFERENCE_PROBABILITY_THRESHOLD: f64 = 0.85;

static DOCTOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bdr\b|doctor").expect("valid regex"));
static REGIONAL_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(sheikh|shaikh|his excellency|her excellency)\b|\bh\.e\.").expect("valid regex")
});
static MR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bmr\b").expect("valid regex"));
static MS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bms\b|\bmrs\b|\bmadam\b|\bmiss\b").expect("valid regex"));
static TRAILING_CLAUSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r",.*$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Honorific {
    Dr,
    Mr,
    Ms,
}

impl Honorific {
    pub fn as_str(&self) -> &'static str {
        match self {
            Honorific::Dr => "Dr.",
            Honorific::Mr => "Mr.",
            Honorific::Ms => "Ms.",
        }
    }
}

impl fmt::Display for Honorific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One answer from the external name-inference service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameInference {
    pub gender: Option<String>,
    #[serde(default)]
    pub probability: f64,
}

/// Splits a contact's full name into first name and the rest. Anything after
/// the first comma (credentials, titles) is dropped.
pub fn split_name(full_name: &str) -> (String, String) {
    let name = TRAILING_CLAUSE_RE.replace(full_name, "");
    let mut parts = name.split_whitespace();
    match parts.next() {
        Some(first) => (first.to_string(), parts.collect::<Vec<_>>().join(" ")),
        None => (String::new(), String::new()),
    }
}

/// Honorific implied by a job or courtesy title. Regional titles are left
/// empty so they go to manual review.
pub fn honorific_from_title(title: &str) -> Option<Honorific> {
    let t = title.to_lowercase();
    if DOCTOR_RE.is_match(&t) {
        return Some(Honorific::Dr);
    }
    if REGIONAL_TITLE_RE.is_match(&t) {
        return None;
    }
    if MR_RE.is_match(&t) {
        return Some(Honorific::Mr);
    }
    if MS_RE.is_match(&t) {
        return Some(Honorific::Ms);
    }
    None
}

/// Turns an inferred (gender label, probability) pair into an honorific when
/// the probability clears [`INFERENCE_PROBABILITY_THRESHOLD`].
pub fn honorific_from_inference(label: &str, probability: f64) -> Option<Honorific> {
    let label = label.trim();
    if label.is_empty() || probability < INFERENCE_PROBABILITY_THRESHOLD {
        return None;
    }
    if label.eq_ignore_ascii_case("female") {
        Some(Honorific::Ms)
    } else {
        Some(Honorific::Mr)
    }
}

pub fn build_salutation(
    honorific: Option<Honorific>,
    _first_name: &str,
    last_name: &str,
    full_name: &str,
) -> String {
    match (honorific, last_name.is_empty()) {
        (Some(h), false) => format!("Dear {} {},", h, last_name),
        (None, false) => format!("Dear {},", last_name),
        _ if !full_name.trim().is_empty() => format!("Dear {},", full_name.trim()),
        _ => "Dear Sir or Madam,".to_string(),
    }
}
