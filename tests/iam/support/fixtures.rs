use chrono::{DateTime, Utc};
use cursos_api::iam::domain::model::entities::token_record::TokenRecord;

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

pub fn record(
    token: &str,
    tenant_id: Option<&str>,
    user_id: Option<&str>,
    expires: Option<&str>,
) -> TokenRecord {
    TokenRecord::restore(
        token.to_string(),
        tenant_id.map(str::to_string),
        user_id.map(str::to_string),
        expires.map(str::to_string),
    )
}

pub fn valid_record(token: &str) -> TokenRecord {
    record(token, Some("t1"), Some("u1"), Some("2999-01-01T00:00:00Z"))
}
