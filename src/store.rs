use std::future::Future;

use aws_sdk_dynamodb::types::AttributeValue;
use tracing::info;

use crate::common::errors::StoreError;
use crate::common::{HandlerConfig, Record, ID_ATTRIBUTE};

/// Point access to persisted records keyed by `id`.
pub trait RecordStore {
    /// Writes `record`, replacing any record with the same `id`.
    fn put(&self, record: Record) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn get(&self, id: &str) -> impl Future<Output = Result<Option<Record>, StoreError>> + Send;
}

#[derive(Debug, Clone)]
pub struct DynamoRecordStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoRecordStore {
    pub fn new(client: aws_sdk_dynamodb::Client, config: &HandlerConfig) -> Self {
        Self {
            client,
            table_name: config.table_name.clone(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl RecordStore for DynamoRecordStore {
    async fn put(&self, record: Record) -> Result<(), StoreError> {
        info!("Putting item with id: {}", record.id);
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record.into()))
            .send()
            .await
            .map_err(Box::new)?;

        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Record>, StoreError> {
        info!("Getting item with id: {}", id);
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(Box::new)?;

        output.item.map(Record::try_from).transpose()
    }
}
