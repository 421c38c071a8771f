//! Best-effort JSON repair for free-text provider responses.
//!
//! Generative providers sometimes wrap their JSON in prose ("Sure! Here is
//! your playlist: {...}"). This step extracts the substring between the
//! first `{` and the last `}` and reparses it. It is deliberately isolated
//! so a parse failure folds into the normal failure path instead of
//! crashing a request.

use serde_json::Value;

/// Extract and parse the first-`{`-to-last-`}` substring of `text`.
/// Returns None when no such substring exists or it is not valid JSON.
pub fn extract_json(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
