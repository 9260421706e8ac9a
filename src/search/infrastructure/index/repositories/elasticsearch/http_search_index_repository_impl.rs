use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};
use serde_json::{Value, json};

use crate::{
    iam::domain::model::value_objects::tenant_id::TenantId,
    search::{
        domain::model::{
            entities::{
                course_document::CourseDocument,
                search_hit::{SearchHit, SearchResults, Suggestion},
            },
            enums::search_domain_error::SearchDomainError,
        },
        infrastructure::index::repositories::search_index_repository::SearchIndexRepository,
    },
};

const NAME_MATCH_FIELD: &str = "nombre.autocomplete";
const COMPLETION_FIELD: &str = "nombre.completion_suggester";
const SUGGESTION_NAME: &str = "my_suggestions";

pub struct HttpSearchIndexRepositoryImpl {
    client: reqwest::Client,
    base_url: Url,
    index: String,
}

impl HttpSearchIndexRepositoryImpl {
    pub fn new(base_url: &str, index: String, timeout: Duration) -> Result<Self, String> {
        let base_url = Url::parse(base_url).map_err(|e| format!("invalid search url: {e}"))?;
        if base_url.cannot_be_a_base() {
            return Err(format!("invalid search url: {base_url}"));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self {
            client,
            base_url,
            index,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SearchDomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SearchDomainError::IndexUnavailable("search url has no path".to_string()))?
            .pop_if_empty()
            .push(&self.index)
            .extend(segments);
        Ok(url)
    }

    async fn search(&self, body: Value) -> Result<Value, SearchDomainError> {
        let url = self.endpoint(&["_search"])?;
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchDomainError::IndexUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(SearchDomainError::IndexUnavailable(format!(
                "index answered {status}: {detail}"
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SearchDomainError::UnexpectedIndexResponse(e.to_string()))
    }

    async fn write(
        &self,
        method: Method,
        document_id: &str,
        body: Option<&CourseDocument>,
    ) -> Result<StatusCode, SearchDomainError> {
        let mut url = self.endpoint(&["_doc", document_id])?;
        url.query_pairs_mut().append_pair("refresh", "true");

        let mut request = self.client.request(method, url);
        if let Some(document) = body {
            request = request.json(document);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SearchDomainError::IndexUnavailable(e.to_string()))?;
        Ok(response.status())
    }
}

pub(crate) fn match_by_name_body(tenant_id: &str, term: &str) -> Value {
    json!({
        "query": {
            "bool": {
                "must": [
                    { "match": { NAME_MATCH_FIELD: { "query": term } } }
                ],
                "filter": [
                    { "term": { "tenant_id": tenant_id } }
                ]
            }
        }
    })
}

pub(crate) fn suggest_body(tenant_id: &str, prefix: &str, size: u32) -> Value {
    json!({
        "suggest": {
            SUGGESTION_NAME: {
                "prefix": prefix,
                "completion": {
                    "field": COMPLETION_FIELD,
                    "size": size,
                    "contexts": { "tenant_id": [tenant_id] }
                }
            }
        }
    })
}

/// Only documents that name the caller's tenant are returned, whatever the
/// index mapping does. A document without an owner is treated as foreign.
fn belongs_to(source: &Value, tenant_id: &str) -> bool {
    source.get("tenant_id").and_then(Value::as_str) == Some(tenant_id)
}

pub(crate) fn parse_hits(response: &Value, tenant_id: &str) -> Result<SearchResults, SearchDomainError> {
    let hits = response
        .pointer("/hits/hits")
        .and_then(Value::as_array)
        .ok_or_else(|| SearchDomainError::UnexpectedIndexResponse("missing hits".to_string()))?;

    let hits: Vec<SearchHit> = hits
        .iter()
        .map(|hit| SearchHit {
            document_id: hit.get("_id").and_then(Value::as_str).unwrap_or_default().to_string(),
            score: hit.get("_score").and_then(Value::as_f64),
            source: hit.get("_source").cloned().unwrap_or(Value::Null),
        })
        .filter(|hit| belongs_to(&hit.source, tenant_id))
        .collect();

    Ok(SearchResults {
        total: hits.len() as u64,
        hits,
    })
}

pub(crate) fn parse_suggestions(response: &Value, tenant_id: &str) -> Vec<Suggestion> {
    response
        .pointer(&format!("/suggest/{SUGGESTION_NAME}/0/options"))
        .and_then(Value::as_array)
        .map(|options| {
            options
                .iter()
                .map(|option| Suggestion {
                    text: option.get("text").and_then(Value::as_str).unwrap_or_default().to_string(),
                    score: option.get("_score").and_then(Value::as_f64),
                    document_id: option.get("_id").and_then(Value::as_str).unwrap_or_default().to_string(),
                    source: option.get("_source").cloned().unwrap_or(Value::Null),
                })
                .filter(|suggestion| belongs_to(&suggestion.source, tenant_id))
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl SearchIndexRepository for HttpSearchIndexRepositoryImpl {
    async fn match_by_name(
        &self,
        tenant_id: &TenantId,
        term: &str,
    ) -> Result<SearchResults, SearchDomainError> {
        let response = self.search(match_by_name_body(tenant_id.as_str(), term)).await?;
        parse_hits(&response, tenant_id.as_str())
    }

    async fn suggest_by_prefix(
        &self,
        tenant_id: &TenantId,
        prefix: &str,
        size: u32,
    ) -> Result<Vec<Suggestion>, SearchDomainError> {
        let response = self
            .search(suggest_body(tenant_id.as_str(), prefix, size))
            .await?;
        Ok(parse_suggestions(&response, tenant_id.as_str()))
    }

    async fn upsert_document(&self, document: &CourseDocument) -> Result<(), SearchDomainError> {
        let status = self
            .write(Method::PUT, &document.id(), Some(document))
            .await?;

        if status.is_success() {
            Ok(())
        } else {
            Err(SearchDomainError::IndexUnavailable(format!(
                "index rejected document {} with {status}",
                document.id()
            )))
        }
    }

    async fn delete_document(&self, document_id: &str) -> Result<(), SearchDomainError> {
        let status = self.write(Method::DELETE, document_id, None).await?;

        // Already gone is as good as deleted.
        if status.is_success() || status == StatusCode::NOT_FOUND {
            Ok(())
        } else {
            Err(SearchDomainError::IndexUnavailable(format!(
                "index refused to delete {document_id} with {status}"
            )))
        }
    }
}
