//! Branch entity

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

/// A physical office shipments route through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Branch {
    /// The branch form's field set.
    pub fn form_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", "Branch Name", FieldKind::Text)
                .rules(RuleSet::new().required().min_length(3).max_length(100)),
            FieldSpec::new("address", "Address", FieldKind::Textarea)
                .rules(RuleSet::new().required().min_length(10).max_length(500)),
            FieldSpec::new("phone", "Phone Number", FieldKind::Text)
                .rules(RuleSet::new().required().min_length(10).max_length(20)),
            FieldSpec::new("email", "Email", FieldKind::Email)
                .rules(RuleSet::new().required().email()),
        ]
    }
}

impl EntityRow for Branch {
    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}

impl Entity for Branch {
    const NAME: &'static str = "Branch";
    const COLLECTION: &'static str = "branches";
}

impl TableEntity for Branch {
    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("name", "Name").sortable(),
            ColumnSpec::new("address", "Address").sortable(),
            ColumnSpec::new("phone", "Phone").sortable(),
            ColumnSpec::new("email", "Email").sortable(),
            ColumnSpec::new("isActive", "Status").sortable().formatter(|v| {
                if matches!(v, Value::Bool(true)) {
                    "Active".to_string()
                } else {
                    "Inactive".to_string()
                }
            }),
        ]
    }

    fn to_record(&self) -> Record {
        Record::new()
            .set("id", id_value(self.id))
            .set("name", self.name.as_str())
            .set("address", self.address.as_str())
            .set("phone", self.phone.as_str())
            .set("email", self.email.as_str())
            .set("isActive", self.is_active)
            .set("createdAt", timestamp_value(self.created_at))
    }
}

impl FormEntity for Branch {
    fn form_values(&self) -> HashMap<String, Value> {
        HashMap::from([
            ("name".to_string(), Value::from(self.name.as_str())),
            ("address".to_string(), Value::from(self.address.as_str())),
            ("phone".to_string(), Value::from(self.phone.as_str())),
            ("email".to_string(), Value::from(self.email.as_str())),
        ])
    }

    fn from_values(
        values: &HashMap<String, Value>,
        existing: Option<&Self>,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            id: existing.and_then(|b| b.id),
            name: require_str(values, "name")?.to_string(),
            address: require_str(values, "address")?.to_string(),
            phone: require_str(values, "phone")?.to_string(),
            email: require_str(values, "email")?.to_string(),
            // The form does not edit activation; new branches open active.
            is_active: existing.is_none_or(|b| b.is_active),
            created_at: existing.and_then(|b| b.created_at),
            updated_at: existing.and_then(|b| b.updated_at),
        })
    }
}
