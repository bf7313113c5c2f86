use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetInfo {
    pub code: String,
    pub name: String,
    pub release_date: Option<String>,
    #[serde(rename = "type")]
    pub set_type: Option<String>,
    #[serde(default)]
    pub card_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistInfo {
    pub name: String,
    #[serde(default)]
    pub card_count: i64,
}
