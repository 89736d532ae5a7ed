use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct PackingListRequest {
    pub destination: Option<String>,
    pub duration: Option<Value>,
    pub activities: Option<Value>,
    pub season: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingItem {
    pub text: String,
    #[serde(default)]
    pub packed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<PackingItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingList {
    #[serde(rename = "packingList")]
    pub packing_list: Vec<PackingCategory>,
}
