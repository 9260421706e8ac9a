use crate::search::domain::model::entities::course_document::CourseDocument;

#[derive(Clone, Debug, PartialEq)]
pub enum CourseChange {
    Upsert(CourseDocument),
    Remove { tenant_id: String, curso_id: String },
    Unusable(String),
}
