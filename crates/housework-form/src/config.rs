//! Dialog Configuration
//!
//! Labels and submit behavior, loadable from a JSON bundle.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What happens to the dialog when the completion callback fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosePolicy {
    /// Close once the callback settles, whatever the outcome
    #[default]
    Always,
    /// Close only after a successful callback; failures keep the dialog open
    OnSuccess,
}

/// User-facing strings of the dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    pub status: String,
    pub members: String,
    pub members_required: String,
    pub cancel: String,
    pub confirm: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "家事を完了".to_string(),
            status: "ステータス".to_string(),
            members: "家事をした人".to_string(),
            members_required: "メンバーを選択してください。".to_string(),
            cancel: "キャンセル".to_string(),
            confirm: "完了！".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub close_policy: ClosePolicy,
    pub labels: Labels,
}

impl FormConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
