use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A webhook registration at the payment provider.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub events: Vec<String>,
}
