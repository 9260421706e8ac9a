use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseDocument {
    pub tenant_id: String,
    pub curso_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duracion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagen_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nivel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estudiantes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl CourseDocument {
    pub fn document_id(tenant_id: &str, curso_id: &str) -> String {
        format!("{tenant_id}:{curso_id}")
    }

    pub fn id(&self) -> String {
        Self::document_id(&self.tenant_id, &self.curso_id)
    }

    pub fn from_attributes(attributes: &Map<String, Value>) -> Result<Self, String> {
        let tenant_id = required_key(attributes, "tenant_id")?;
        let curso_id = required_key(attributes, "curso_id")?;

        let text = |name: &str| attributes.get(name).and_then(Value::as_str).map(str::to_string);
        let number = |name: &str| attributes.get(name).and_then(Value::as_f64);

        let categories = match attributes.get("categories") {
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            ),
            Some(other) => {
                tracing::warn!(%curso_id, value = %other, "categories is not a list; ignored");
                None
            }
            None => None,
        };

        Ok(Self {
            nombre: text("nombre"),
            descripcion: text("descripcion"),
            duracion: text("duracion"),
            precio: number("precio"),
            rating: number("rating"),
            imagen_url: text("imagen_url"),
            instructor: text("instructor"),
            nivel: text("nivel"),
            estudiantes: attributes.get("estudiantes").and_then(|value| {
                value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
            }),
            categories,
            tenant_id,
            curso_id,
        })
    }
}

pub(crate) fn required_key(attributes: &Map<String, Value>, name: &str) -> Result<String, String> {
    attributes
        .get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| format!("{name} is missing"))
}
