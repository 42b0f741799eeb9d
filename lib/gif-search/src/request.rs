use derivative::Derivative;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct APIConfig {
    #[derivative(Default(value = "\"https://tenor.googleapis.com/v2\".to_string()"))]
    pub api_base_url: String,

    pub api_key: String,

    // Sent as `client_key`; must match the integration registered upstream
    #[derivative(Default(value = "\"my_test_app\".to_string()"))]
    pub client_key: String,

    #[derivative(Default(value = "15"))]
    pub timeout_secs: u64,
}
