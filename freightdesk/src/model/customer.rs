//! Customer entity

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use gridform::form::{FieldKind, FieldSpec, RuleSet};
use gridform::model::{Record, Value};
use gridform::table::ColumnSpec;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::client::EntityRow;
use crate::error::ServiceError;

use super::{Entity, FormEntity, TableEntity, id_value, require_str, timestamp_value};

/// A sender or receiver of shipments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Full name used in select options and details headers.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    /// The customer form's field set.
    pub fn form_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", "First Name", FieldKind::Text)
                .rules(RuleSet::new().required().min_length(2).max_length(50)),
            FieldSpec::new("surname", "Last Name", FieldKind::Text)
                .rules(RuleSet::new().required().min_length(2).max_length(50)),
            FieldSpec::new("email", "Email", FieldKind::Email)
                .rules(RuleSet::new().required().email()),
            FieldSpec::new("phone", "Phone Number", FieldKind::Text)
                .rules(RuleSet::new().required().min_length(10).max_length(20)),
            FieldSpec::new("address", "Address", FieldKind::Textarea)
                .rules(RuleSet::new().required().min_length(10).max_length(500)),
        ]
    }
}

impl EntityRow for Customer {
    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}

impl Entity for Customer {
    const NAME: &'static str = "Customer";
    const COLLECTION: &'static str = "customers";
}

impl TableEntity for Customer {
    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("name", "Name").sortable(),
            ColumnSpec::new("surname", "Surname").sortable(),
            ColumnSpec::new("email", "Email").sortable(),
            ColumnSpec::new("phone", "Phone").sortable(),
            ColumnSpec::new("address", "Address").sortable(),
        ]
    }

    fn to_record(&self) -> Record {
        Record::new()
            .set("id", id_value(self.id))
            .set("name", self.name.as_str())
            .set("surname", self.surname.as_str())
            .set("email", self.email.as_str())
            .set("phone", self.phone.as_str())
            .set("address", self.address.as_str())
            .set("createdAt", timestamp_value(self.created_at))
    }
}

impl FormEntity for Customer {
    fn form_values(&self) -> HashMap<String, Value> {
        HashMap::from([
            ("name".to_string(), Value::from(self.name.as_str())),
            ("surname".to_string(), Value::from(self.surname.as_str())),
            ("email".to_string(), Value::from(self.email.as_str())),
            ("phone".to_string(), Value::from(self.phone.as_str())),
            ("address".to_string(), Value::from(self.address.as_str())),
        ])
    }

    fn from_values(
        values: &HashMap<String, Value>,
        existing: Option<&Self>,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            id: existing.and_then(|c| c.id),
            name: require_str(values, "name")?.to_string(),
            surname: require_str(values, "surname")?.to_string(),
            email: require_str(values, "email")?.to_string(),
            phone: require_str(values, "phone")?.to_string(),
            address: require_str(values, "address")?.to_string(),
            created_at: existing.and_then(|c| c.created_at),
            updated_at: existing.and_then(|c| c.updated_at),
        })
    }
}
