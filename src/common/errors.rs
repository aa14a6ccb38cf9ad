use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Request payload is empty")]
    EmptyBody,
    #[error("Invalid record payload: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("Missing `id` query parameter")]
    MissingId,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("put_item failed: {0}")]
    Put(#[from] Box<SdkError<PutItemError, HttpResponse>>),
    #[error("get_item failed: {0}")]
    Get(#[from] Box<SdkError<GetItemError, HttpResponse>>),
    #[error("Stored item has no string attribute `{0}`")]
    MalformedItem(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TABLE_NAME not set")]
    MissingTableName,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] lambda_http::http::Error),
}
