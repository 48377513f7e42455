//! Housework Commands
//!
//! Frontend bindings for housework-related backend commands.

use wasm_bindgen::prelude::*;
use housework_form::{DoneHouseworkRequest, Housework};
use super::{invoke, try_invoke};

pub async fn list_houseworks() -> Result<Vec<Housework>, String> {
    let result = invoke("list_houseworks", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Record completion; `member_ids` are appended to the housework's members
pub async fn done_housework(request: &DoneHouseworkRequest) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(request).map_err(|e| e.to_string())?;
    try_invoke("done_housework", js_args)
        .await
        .map(|_| ())
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}
