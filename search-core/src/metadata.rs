//! Single-document metadata projection.

use es_client::response::GetResponse;
use serde_json::{Map, Value};

/// Flat metadata record for one document: the stored source plus the
/// engine-assigned version and type.
pub type MetadataRecord = Map<String, Value>;

/// Projects a fetched document into a [`MetadataRecord`].
///
/// `version` and `type` always come from the engine-assigned fields and
/// overwrite any same-named keys stored in the source.
pub fn project(document: &GetResponse) -> MetadataRecord {
    let mut record = document.source.clone();
    record.insert("version".to_owned(), Value::from(document.version));
    record.insert(
        "type".to_owned(),
        match &document.doc_type {
            Some(doc_type) => Value::from(doc_type.as_str()),
            None => Value::Null,
        },
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: serde_json::Value) -> GetResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn version_and_type_are_injected() {
        let doc = document(json!({
            "_id": "Qmfoo",
            "_version": 7,
            "_type": "file",
            "_source": {"metadata": {"title": ["t"]}}
        }));
        let record = project(&doc);
        assert_eq!(record["version"], json!(7));
        assert_eq!(record["type"], json!("file"));
        assert_eq!(record["metadata"]["title"], json!(["t"]));
    }

    #[test]
    fn stored_version_is_overwritten_by_the_engine_one() {
        let doc = document(json!({
            "_id": "Qmfoo",
            "_version": 3,
            "_type": "file",
            "_source": {"version": "1.0-from-extractor", "type": "stored"}
        }));
        let record = project(&doc);
        assert_eq!(record["version"], json!(3));
        assert_eq!(record["type"], json!("file"));
    }

    #[test]
    fn missing_engine_type_projects_as_null() {
        let doc = document(json!({
            "_id": "Qmfoo",
            "_version": 1,
            "_source": {}
        }));
        assert_eq!(project(&doc)["type"], Value::Null);
    }
}
