use lambda_http::http::{Method, StatusCode};
use lambda_http::{Request, Response};
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::common::errors::{Error, RequestError};
use crate::common::utils::{extract_payload, extract_query_param, json_response, text_response};
use crate::common::{Record, DATA_SAVED_MESSAGE, ID_ATTRIBUTE, METHOD_NOT_ALLOWED_MESSAGE};
use crate::store::RecordStore;

/// An invocation decoded by method. Only `POST` and `GET` reach the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRequest {
    Put(Record),
    Get { id: String },
    Unsupported(Method),
}

impl TryFrom<&Request> for RecordRequest {
    type Error = RequestError;

    fn try_from(request: &Request) -> Result<Self, Self::Error> {
        match request.method() {
            &Method::POST => Ok(Self::Put(extract_payload(request)?)),
            &Method::GET => {
                let id =
                    extract_query_param(request, ID_ATTRIBUTE).ok_or(RequestError::MissingId)?;
                Ok(Self::Get { id })
            }
            method => Ok(Self::Unsupported(method.clone())),
        }
    }
}

pub struct RecordHandler<S> {
    store: S,
}

impl<S: RecordStore> RecordHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Serves one invocation. Anything other than `POST` and `GET` is answered
    /// with 405; input and store failures are returned as errors.
    #[tracing::instrument(skip_all, fields(method = %request.method()))]
    pub async fn handle(&self, request: Request) -> Result<Response<String>, Error> {
        let result = match RecordRequest::try_from(&request) {
            Ok(request) => self.process(request).await,
            Err(err) => Err(err.into()),
        };
        if let Err(err) = &result {
            error!("Request failed: {}", err);
        }

        result
    }

    async fn process(&self, request: RecordRequest) -> Result<Response<String>, Error> {
        match request {
            RecordRequest::Put(record) => {
                self.store.put(record).await?;
                info!("Record saved");
                json_response(StatusCode::OK, DATA_SAVED_MESSAGE)
            }
            RecordRequest::Get { id } => match self.store.get(&id).await? {
                Some(record) => json_response(StatusCode::OK, &record),
                None => {
                    info!("No record with id: {}", id);
                    json_response(StatusCode::OK, &Map::<String, Value>::new())
                }
            },
            RecordRequest::Unsupported(method) => {
                info!("Rejecting method: {}", method);
                text_response(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
            }
        }
    }
}
