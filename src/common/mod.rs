pub mod errors;
pub mod utils;

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};

use crate::common::errors::{ConfigError, StoreError};

pub const TABLE_NAME_VAR: &str = "TABLE_NAME";

pub const ID_ATTRIBUTE: &str = "id";
pub const TIMESTAMP_ATTRIBUTE: &str = "timestamp";
pub const MESSAGE_ATTRIBUTE: &str = "message";

pub const DATA_SAVED_MESSAGE: &str = "Data saved";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed";

/// A single stored record. `id` is the only key, the other attributes are
/// opaque strings supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub timestamp: String,
    pub message: String,
}

impl From<Record> for HashMap<String, AttributeValue> {
    fn from(value: Record) -> Self {
        HashMap::from([
            (ID_ATTRIBUTE.to_string(), AttributeValue::S(value.id)),
            (
                TIMESTAMP_ATTRIBUTE.to_string(),
                AttributeValue::S(value.timestamp),
            ),
            (
                MESSAGE_ATTRIBUTE.to_string(),
                AttributeValue::S(value.message),
            ),
        ])
    }
}

impl TryFrom<HashMap<String, AttributeValue>> for Record {
    type Error = StoreError;

    fn try_from(mut item: HashMap<String, AttributeValue>) -> Result<Self, Self::Error> {
        let mut take = |name: &'static str| match item.remove(name) {
            Some(AttributeValue::S(value)) => Ok(value),
            _ => Err(StoreError::MalformedItem(name)),
        };

        Ok(Self {
            id: take(ID_ATTRIBUTE)?,
            timestamp: take(TIMESTAMP_ATTRIBUTE)?,
            message: take(MESSAGE_ATTRIBUTE)?,
        })
    }
}

/// Process-wide settings, read once before the runtime loop starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub table_name: String,
}

impl HandlerConfig {
    pub fn new(table_name: impl Into<String>) -> Result<Self, ConfigError> {
        let table_name = table_name.into();
        if table_name.trim().is_empty() {
            return Err(ConfigError::MissingTableName);
        }

        Ok(Self { table_name })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let table_name =
            std::env::var(TABLE_NAME_VAR).map_err(|_| ConfigError::MissingTableName)?;
        Self::new(table_name)
    }
}
