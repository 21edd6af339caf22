use std::rc::Rc;

use log::warn;

use crate::demo_request::firestore::FirestoreLeadStore;
use crate::demo_request::store::LeadStore;

/// Element the app mounts into; falls back to `<body>` when missing.
pub const MOUNT_ID: &str = "demo-app";

pub const DEFAULT_COLLECTION: &str = "demo_requests";

fn collection_or_default(collection: Option<&'static str>) -> &'static str {
    non_empty(collection).unwrap_or(DEFAULT_COLLECTION)
}

pub fn get_lead_collection() -> &'static str {
    collection_or_default(option_env!("LEAD_STORE_COLLECTION"))
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn lead_store_from(
    project_id: Option<&'static str>,
    api_key: Option<&'static str>,
    collection: &str,
) -> Option<Rc<dyn LeadStore>> {
    match (non_empty(project_id), non_empty(api_key)) {
        (Some(project_id), Some(api_key)) => {
            Some(Rc::new(FirestoreLeadStore::new(project_id, api_key, collection)))
        }
        _ => {
            warn!("Lead store not configured, demo requests will not be saved");
            None
        }
    }
}

/// Store picked at build time from `FIRESTORE_PROJECT_ID` and
/// `FIRESTORE_API_KEY`.
pub fn get_lead_store() -> Option<Rc<dyn LeadStore>> {
    lead_store_from(
        option_env!("FIRESTORE_PROJECT_ID"),
        option_env!("FIRESTORE_API_KEY"),
        get_lead_collection(),
    )
}
