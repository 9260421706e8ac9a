use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChangeBatchResource {
    #[serde(rename = "Records", default)]
    pub records: Vec<ChangeRecordResource>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChangeRecordResource {
    #[serde(rename = "eventName", default)]
    pub event_name: String,

    #[serde(default)]
    pub dynamodb: ChangeImagesResource,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChangeImagesResource {
    #[serde(rename = "NewImage", default)]
    pub new_image: Option<Map<String, Value>>,

    #[serde(rename = "OldImage", default)]
    pub old_image: Option<Map<String, Value>>,
}
