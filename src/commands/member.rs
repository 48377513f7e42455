use wasm_bindgen::prelude::*;
use housework_form::FamilyMember;
use super::invoke;

pub async fn list_family_members() -> Result<Vec<FamilyMember>, String> {
    let result = invoke("list_family_members", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
