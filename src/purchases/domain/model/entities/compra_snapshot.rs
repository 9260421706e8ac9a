use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompraSnapshot {
    pub tenant_id: String,
    pub order_id: String,
    pub user_id: String,
    pub curso_id: String,
    pub quantity: i64,
    pub price: f64,
    pub timestamp: String,
}

impl CompraSnapshot {
    pub fn from_attributes(attributes: &Map<String, Value>) -> Result<Self, String> {
        Ok(Self {
            tenant_id: text(attributes, "tenant_id")?,
            order_id: text(attributes, "order_id")?,
            user_id: text(attributes, "user_id")?,
            curso_id: text(attributes, "curso_id")?,
            quantity: attributes
                .get("quantity")
                .and_then(Value::as_i64)
                .ok_or_else(|| "quantity is missing or not an integer".to_string())?,
            price: attributes
                .get("price")
                .and_then(Value::as_f64)
                .ok_or_else(|| "price is missing or not a number".to_string())?,
            timestamp: text(attributes, "timestamp")?,
        })
    }

    pub fn archive_segments(&self, day: NaiveDate) -> [String; 4] {
        [
            "compras".to_string(),
            day.format("%Y-%m-%d").to_string(),
            format!("tenant_{}", self.tenant_id),
            format!("order_{}.json", self.order_id),
        ]
    }
}

fn text(attributes: &Map<String, Value>, name: &str) -> Result<String, String> {
    attributes
        .get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| format!("{name} is missing"))
}
