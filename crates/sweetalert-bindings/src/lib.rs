//! SweetAlert2 Bindings
//!
//! Typed wrapper around the `Swal` global that the host page loads.
//! Options go through `serde-wasm-bindgen`, so only the keys that are set
//! reach the JS side.

use std::future::Future;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Swal, js_name = fire)]
    fn swal_fire(options: JsValue) -> js_sys::Promise;
}

/// Popup icon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
    Question,
}

/// Options passed to `Swal.fire`
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwalOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    pub title: String,
    pub text: String,
    /// Auto-close delay in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub show_cancel_button: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_button_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_button_color: Option<String>,
}

impl SwalOptions {
    pub fn new(icon: Icon, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon: Some(icon),
            title: title.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn timer(mut self, millis: u32) -> Self {
        self.timer = Some(millis);
        self
    }

    /// Show a cancel button next to the confirm button
    pub fn with_cancel(mut self, cancel_color: impl Into<String>) -> Self {
        self.show_cancel_button = true;
        self.cancel_button_color = Some(cancel_color.into());
        self
    }

    pub fn confirm_button(mut self, text: impl Into<String>, color: impl Into<String>) -> Self {
        self.confirm_button_text = Some(text.into());
        self.confirm_button_color = Some(color.into());
        self
    }
}

/// Resolved value of the `Swal.fire` promise
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwalResult {
    #[serde(default)]
    pub is_confirmed: bool,
    #[serde(default)]
    pub is_denied: bool,
    #[serde(default)]
    pub is_dismissed: bool,
}

/// Show a popup.
///
/// The popup is on screen as soon as this returns; the future resolves once
/// the user (or the timer) closes it. Dropping the future does not close it.
pub fn fire(
    options: &SwalOptions,
) -> Result<impl Future<Output = Result<SwalResult, JsValue>>, JsValue> {
    let js_options = serde_wasm_bindgen::to_value(options)?;
    let promise = swal_fire(js_options);
    Ok(async move {
        let value = JsFuture::from(promise).await?;
        serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_options_are_omitted() {
        let options = SwalOptions::new(Icon::Error, "Oops...", "boom");
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value, json!({ "icon": "error", "title": "Oops...", "text": "boom" }));
    }

    #[test]
    fn test_confirm_dialog_keys_are_camel_case() {
        let options = SwalOptions::new(Icon::Warning, "Are you sure?", "")
            .with_cancel("#d33")
            .confirm_button("Yes", "#3c2e2e");
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["showCancelButton"], json!(true));
        assert_eq!(value["cancelButtonColor"], json!("#d33"));
        assert_eq!(value["confirmButtonText"], json!("Yes"));
        assert_eq!(value["confirmButtonColor"], json!("#3c2e2e"));
    }

    #[test]
    fn test_result_tolerates_missing_flags() {
        let result: SwalResult = serde_json::from_value(json!({ "isConfirmed": true })).unwrap();
        assert!(result.is_confirmed);
        assert!(!result.is_dismissed);
    }
}
