//! Structured extraction of JSON objects embedded in model output.
//!
//! Models are asked to answer with JSON but routinely wrap it in prose or
//! code fences. The extractor cuts out the object span, deserializes it, and
//! substitutes a caller-supplied default whenever that fails. It never
//! returns an error.

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Outcome of an extraction: either the model's answer or the caller's default.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted<T> {
    /// The model output contained a usable object.
    Parsed(T),
    /// No output, no object span, or the span did not deserialize.
    Defaulted(T),
}

impl<T> Extracted<T> {
    pub fn is_parsed(&self) -> bool {
        matches!(self, Extracted::Parsed(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Extracted::Parsed(value) | Extracted::Defaulted(value) => value,
        }
    }
}

/// How the object span is located inside the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanStrategy {
    /// First `{` to last `}`. Two separate objects in one reply get merged into
    /// one invalid span, which then falls back to the default.
    #[default]
    Greedy,
    /// First `{` to its matching `}`, skipping braces inside string literals.
    Balanced,
}

/// Returns the candidate JSON object span, if any.
pub fn locate_json_span(text: &str, strategy: SpanStrategy) -> Option<&str> {
    let start = text.find('{')?;
    match strategy {
        SpanStrategy::Greedy => {
            let end = text.rfind('}')?;
            (end > start).then(|| &text[start..=end])
        }
        SpanStrategy::Balanced => balanced_end(&text[start..]).map(|len| &text[start..start + len]),
    }
}

/// Byte length of the balanced object at the start of `text`.
fn balanced_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(idx + ch.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

/// Parses typed results out of raw model text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredExtractor {
    strategy: SpanStrategy,
}

impl StructuredExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: SpanStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Extracts a `T` from `raw`, or returns `default()` wrapped as `Defaulted`.
    ///
    /// `raw` is `None` when no provider produced any text.
    pub fn extract<T, F>(&self, raw: Option<&str>, default: F) -> Extracted<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let Some(text) = raw else {
            return Extracted::Defaulted(default());
        };

        let Some(span) = locate_json_span(text, self.strategy) else {
            tracing::debug!(strategy = ?self.strategy, "no JSON object in model output");
            return Extracted::Defaulted(default());
        };

        match serde_json::from_str::<T>(span) {
            Ok(value) => Extracted::Parsed(value),
            Err(e) => {
                tracing::debug!(error = %e, "model output did not match expected shape");
                Extracted::Defaulted(default())
            }
        }
    }
}
