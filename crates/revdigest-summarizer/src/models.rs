//! Model catalog entries and flash-model selection.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Used when discovery fails or finds no candidate.
pub const DEFAULT_MODEL: &str = "models/gemini-1.5-flash";

const REQUIRED_METHOD: &str = "generateContent";

/// Variants that are flash-tier by name but unsuitable for plain text.
const EXCLUDED_VARIANTS: &[&str] = &["lite", "live", "image", "native", "speech", "tts"];

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"gemini-(\d+(?:\.\d+)*)").expect("valid version regex"));

/// One entry of `GET /models`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Resource name, e.g. `models/gemini-2.5-flash`.
    pub name: String,

    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    #[must_use]
    pub fn new(name: &str, methods: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            supported_generation_methods: methods.iter().map(|m| (*m).to_owned()).collect(),
        }
    }

    fn is_candidate(&self) -> bool {
        let name = self.name.to_lowercase();
        name.contains("flash")
            && self
                .supported_generation_methods
                .iter()
                .any(|m| m == REQUIRED_METHOD)
            && !EXCLUDED_VARIANTS.iter().any(|v| name.contains(v))
    }

    fn is_preview(&self) -> bool {
        let name = self.name.to_lowercase();
        name.contains("preview") || name.contains("exp")
    }

    /// Numeric version tuple, e.g. `[2, 5]` for `gemini-2.5-flash`. Empty
    /// when the name carries no version.
    fn version(&self) -> Vec<u32> {
        VERSION_RE
            .captures(&self.name)
            .and_then(|caps| caps.get(1))
            .map(|m| {
                m.as_str()
                    .split('.')
                    .filter_map(|part| part.parse().ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn rank(a: &ModelInfo, b: &ModelInfo) -> Ordering {
    a.version()
        .cmp(&b.version())
        .then_with(|| b.is_preview().cmp(&a.is_preview()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Picks the best text-generation flash model from a catalog listing.
///
/// Highest version wins; within a version a stable build beats a preview, and
/// remaining ties go to the lexically greatest name.
#[must_use]
pub fn select_model(models: &[ModelInfo]) -> Option<&ModelInfo> {
    models
        .iter()
        .filter(|m| m.is_candidate())
        .max_by(|a, b| rank(a, b))
}
