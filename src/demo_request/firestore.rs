use async_trait::async_trait;
use gloo_net::http::Request;
use log::info;
use serde_json::{json, Value};

use super::fields::LeadRecord;
use super::store::{LeadStore, StoreError};

const AUTO_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const AUTO_ID_LEN: usize = 20;

/// Lead store backed by Cloud Firestore's REST API. Each lead becomes one
/// document whose `submittedAt` is stamped by the server.
#[derive(Clone, Debug, PartialEq)]
pub struct FirestoreLeadStore {
    pub project_id: String,
    pub api_key: String,
    pub collection: String,
}

impl FirestoreLeadStore {
    pub fn new(project_id: &str, api_key: &str, collection: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            api_key: api_key.to_string(),
            collection: collection.to_string(),
        }
    }

    fn database_path(&self) -> String {
        format!("projects/{}/databases/(default)", self.project_id)
    }

    pub fn commit_url(&self) -> String {
        format!(
            "https://firestore.googleapis.com/v1/{}/documents:commit?key={}",
            self.database_path(),
            self.api_key
        )
    }

    /// Body of a `documents:commit` call creating `doc_id` with the record's
    /// fields plus a `REQUEST_TIME` transform on `submittedAt`.
    pub fn commit_body(&self, record: &LeadRecord, doc_id: &str) -> Result<Value, StoreError> {
        let fields = match serde_json::to_value(record).map_err(|e| StoreError::Encode(e.to_string()))? {
            Value::Object(map) => map
                .into_iter()
                .map(|(key, value)| (key, string_value(value)))
                .collect::<serde_json::Map<_, _>>(),
            other => return Err(StoreError::Encode(format!("expected an object, got {}", other))),
        };

        Ok(json!({
            "writes": [{
                "update": {
                    "name": format!("{}/documents/{}/{}", self.database_path(), self.collection, doc_id),
                    "fields": fields,
                },
                "updateTransforms": [{
                    "fieldPath": "submittedAt",
                    "setToServerValue": "REQUEST_TIME",
                }],
                "currentDocument": { "exists": false },
            }]
        }))
    }
}

fn string_value(value: Value) -> Value {
    match value {
        Value::String(s) => json!({ "stringValue": s }),
        other => json!({ "stringValue": other.to_string() }),
    }
}

/// Same shape as the ids the Firebase SDKs generate client side.
fn auto_id() -> String {
    (0..AUTO_ID_LEN)
        .map(|_| {
            let idx = (js_sys::Math::random() * AUTO_ID_ALPHABET.len() as f64) as usize;
            AUTO_ID_ALPHABET[idx.min(AUTO_ID_ALPHABET.len() - 1)] as char
        })
        .collect()
}

#[async_trait(?Send)]
impl LeadStore for FirestoreLeadStore {
    async fn add_lead(&self, record: &LeadRecord) -> Result<(), StoreError> {
        let doc_id = auto_id();
        let body = self.commit_body(record, &doc_id)?;

        let response = Request::post(&self.commit_url())
            .json(&body)
            .map_err(|e| StoreError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if response.ok() {
            info!("Created {}/{}", self.collection, doc_id);
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(StoreError::Rejected { status, body })
        }
    }
}
