//! WebAssembly bindings for the web front end.
//!
//! # Feature Flag
//!
//! This module is only available with the `tsify` feature enabled:
//!
//! ```toml
//! [dependencies]
//! devflow-kit = { version = "0.1", features = ["tsify"] }
//! ```
//!
//! # Example (TypeScript)
//!
//! ```javascript
//! import init, { getDeviconClassName, getRelativeTime } from 'devflow-kit';
//!
//! await init();
//!
//! getDeviconClassName("js");          // "devicon-javascript-plain colored"
//! getDeviconClassName("react", false) // "devicon-react-original"
//! getRelativeTime(Date.parse("2025-12-14T12:00:00Z"));
//! ```

use chrono::{DateTime, Utc};
use wasm_bindgen::prelude::*;

use crate::data::{self, DEFAULT_LIMIT};
use crate::nav;
use crate::resolver::TagIconResolver;
use crate::time;

/// Returns the devicon class for a tag, or `undefined` if there is none.
///
/// `colored` defaults to `true`.
#[wasm_bindgen(js_name = "getDeviconClassName")]
pub fn get_devicon_class_name(name: &str, colored: Option<bool>) -> Option<String> {
    TagIconResolver::shared().class_name(name, colored.unwrap_or(true))
}

/// Formats a timestamp (milliseconds since the epoch) relative to now.
#[wasm_bindgen(js_name = "getRelativeTime")]
pub fn get_relative_time(epoch_millis: f64) -> Result<String, JsError> {
    let date = millis_to_utc(epoch_millis)
        .ok_or_else(|| JsError::new(&format!("Timestamp out of range: {epoch_millis}")))?;
    Ok(time::relative_time_from_now(date))
}

/// Converts JS epoch milliseconds to a UTC timestamp. `NaN` and infinities
/// have no timestamp.
fn millis_to_utc(epoch_millis: f64) -> Option<DateTime<Utc>> {
    if !epoch_millis.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(epoch_millis as i64)
}

/// Returns true if `pathname` is `route` or nested under it.
#[wasm_bindgen(js_name = "isRouteActive")]
pub fn is_route_active(pathname: &str, route: &str) -> bool {
    nav::is_route_active(pathname, route)
}

/// Returns the highest-voted questions as an array of `Question`.
#[wasm_bindgen(js_name = "getTopQuestions")]
pub fn get_top_questions(limit: Option<usize>) -> Result<JsValue, JsError> {
    let questions = data::top_questions(limit.unwrap_or(DEFAULT_LIMIT));
    serde_wasm_bindgen::to_value(&questions)
        .map_err(|e| JsError::new(&format!("Failed to serialize questions: {}", e)))
}

/// Returns the most used tags as an array of `Tag`.
#[wasm_bindgen(js_name = "getPopularTags")]
pub fn get_popular_tags(limit: Option<usize>) -> Result<JsValue, JsError> {
    let tags = data::popular_tags(limit.unwrap_or(DEFAULT_LIMIT));
    serde_wasm_bindgen::to_value(&tags)
        .map_err(|e| JsError::new(&format!("Failed to serialize tags: {}", e)))
}
