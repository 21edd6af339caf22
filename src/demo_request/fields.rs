use serde::Serialize;

/// Named inputs of the demo request form. The string ids double as the
/// `name`/`id` attributes in the markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    StoreType,
    Phone,
    Company,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::StoreType,
        FieldId::Phone,
        FieldId::Company,
        FieldId::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::StoreType => "store-type",
            FieldId::Phone => "phone",
            FieldId::Company => "company",
            FieldId::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreType {
    Boutique,
    Department,
    Grocery,
    Specialty,
    Chain,
    Other,
}

impl StoreType {
    pub const ALL: [StoreType; 6] = [
        StoreType::Boutique,
        StoreType::Department,
        StoreType::Grocery,
        StoreType::Specialty,
        StoreType::Chain,
        StoreType::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            StoreType::Boutique => "boutique",
            StoreType::Department => "department",
            StoreType::Grocery => "grocery",
            StoreType::Specialty => "specialty",
            StoreType::Chain => "chain",
            StoreType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StoreType::Boutique => "Boutique / Independent",
            StoreType::Department => "Department Store",
            StoreType::Grocery => "Grocery / Supermarket",
            StoreType::Specialty => "Specialty Retail",
            StoreType::Chain => "Multi-location Chain",
            StoreType::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

/// Current input values of the form, as typed. Nothing here is trimmed or
/// checked; see `validation` for the rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    pub store_type: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl DemoRequest {
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::StoreType => &self.store_type,
            FieldId::Phone => &self.phone,
            FieldId::Company => &self.company,
            FieldId::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldId, value: String) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::StoreType => &mut self.store_type,
            FieldId::Phone => &mut self.phone,
            FieldId::Company => &mut self.company,
            FieldId::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
}

/// What gets written to the lead store. `submittedAt` is not part of the
/// record: the store asks the server to stamp it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub name: String,
    pub email: String,
    pub store_type: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    pub status: LeadStatus,
}

impl LeadRecord {
    pub fn from_request(request: &DemoRequest) -> Self {
        let store_type = StoreType::parse(request.store_type.trim())
            .map(|kind| kind.value().to_string())
            .unwrap_or_else(|| request.store_type.clone());

        Self {
            name: request.name.clone(),
            email: request.email.clone(),
            store_type,
            phone: request.phone.clone(),
            company: request.company.clone(),
            message: request.message.clone(),
            status: LeadStatus::New,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_ids_match_markup_names() {
        let names: Vec<_> = FieldId::ALL.iter().map(|field| field.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "store-type", "phone", "company", "message"]);
    }

    #[test]
    fn store_type_parses_only_known_values() {
        assert_eq!(StoreType::parse("boutique"), Some(StoreType::Boutique));
        assert_eq!(StoreType::parse("chain"), Some(StoreType::Chain));
        assert_eq!(StoreType::parse(""), None);
        assert_eq!(StoreType::parse("Boutique"), None);
    }

    #[test]
    fn record_serializes_with_new_status_and_camel_case_keys() {
        let request = DemoRequest {
            name: "Jo Lee".into(),
            email: "jo@example.com".into(),
            store_type: "boutique".into(),
            company: "Lee Co".into(),
            ..Default::default()
        };

        let json = serde_json::to_value(LeadRecord::from_request(&request)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jo Lee",
                "email": "jo@example.com",
                "storeType": "boutique",
                "phone": "",
                "company": "Lee Co",
                "message": "",
                "status": "new",
            })
        );
    }
}
