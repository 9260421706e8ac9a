use crate::{
    search::domain::model::entities::{
        course_change::CourseChange,
        course_document::{CourseDocument, required_key},
    },
    shared::interfaces::stream::{
        assemblers::attribute_image_assembler::unmarshall_image,
        resources::change_batch_resource::{ChangeBatchResource, ChangeRecordResource},
    },
};

pub fn to_changes(batch: ChangeBatchResource) -> Vec<CourseChange> {
    batch.records.into_iter().map(to_change).collect()
}

pub fn to_change(record: ChangeRecordResource) -> CourseChange {
    match record.event_name.as_str() {
        "INSERT" | "MODIFY" => {
            let Some(image) = record.dynamodb.new_image else {
                return CourseChange::Unusable(format!("{} without NewImage", record.event_name));
            };
            match CourseDocument::from_attributes(&unmarshall_image(image)) {
                Ok(document) => CourseChange::Upsert(document),
                Err(reason) => CourseChange::Unusable(reason),
            }
        }
        "REMOVE" => {
            let Some(image) = record.dynamodb.old_image else {
                return CourseChange::Unusable("REMOVE without OldImage".to_string());
            };
            let image = unmarshall_image(image);
            match (required_key(&image, "tenant_id"), required_key(&image, "curso_id")) {
                (Ok(tenant_id), Ok(curso_id)) => CourseChange::Remove {
                    tenant_id,
                    curso_id,
                },
                (Err(reason), _) | (_, Err(reason)) => CourseChange::Unusable(reason),
            }
        }
        other => CourseChange::Unusable(format!("unknown event {other:?}")),
    }
}
