use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Decode JSON out of free-form model output.
///
/// Tries, in order: the text as-is, the slice from the first `{` to the last
/// `}`, and the text with Markdown code fences stripped. A payload that still
/// fails (including one missing required fields) is an error.
pub fn parse_model_json<T: DeserializeOwned>(text: &str) -> AppResult<T> {
    let direct = serde_json::from_str::<T>(text.trim());
    if let Ok(value) = direct {
        return Ok(value);
    }

    if let Some(slice) = brace_slice(text) {
        if let Ok(value) = serde_json::from_str::<T>(slice) {
            return Ok(value);
        }
    }

    serde_json::from_str::<T>(strip_code_fences(text).trim())
        .map_err(|e| AppError::MalformedResponse(e.to_string()))
}

fn brace_slice(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}
