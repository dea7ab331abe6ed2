use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Resolved place for a coordinate pair; fields are empty strings when the
/// provider is unavailable or returned nothing usable.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, ToSchema)]
pub struct GeoLocationDto {
    pub city: String,
    pub country: String,
}

impl GeoLocationDto {
    pub fn empty() -> Self {
        Self {
            city: String::new(),
            country: String::new(),
        }
    }
}
