use crate::{
    purchases::domain::model::entities::{
        compra_change::CompraChange, compra_snapshot::CompraSnapshot,
    },
    shared::interfaces::stream::{
        assemblers::attribute_image_assembler::unmarshall_image,
        resources::change_batch_resource::{ChangeBatchResource, ChangeRecordResource},
    },
};

pub fn to_changes(batch: ChangeBatchResource) -> Vec<CompraChange> {
    batch.records.into_iter().map(to_change).collect()
}

pub fn to_change(record: ChangeRecordResource) -> CompraChange {
    match record.event_name.as_str() {
        "INSERT" | "MODIFY" => {
            let Some(image) = record.dynamodb.new_image else {
                return CompraChange::Unusable(format!("{} without NewImage", record.event_name));
            };
            match CompraSnapshot::from_attributes(&unmarshall_image(image)) {
                Ok(snapshot) => CompraChange::Archive(snapshot),
                Err(reason) => CompraChange::Unusable(reason),
            }
        }
        "REMOVE" => CompraChange::Ignored(record.event_name),
        other => CompraChange::Unusable(format!("unknown event {other:?}")),
    }
}
