use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct SearchHit {
    pub document_id: String,
    pub score: Option<f64>,
    pub source: Value,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResults {
    pub total: u64,
    pub hits: Vec<SearchHit>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Suggestion {
    pub text: String,
    pub score: Option<f64>,
    pub document_id: String,
    pub source: Value,
}
