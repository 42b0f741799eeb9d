use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Only `results` is read; every entry is passed on verbatim.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Value>,
}
