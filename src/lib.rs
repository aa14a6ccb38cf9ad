//! Lambda handler that stores and fetches `id`/`timestamp`/`message` records
//! in a DynamoDB table.

pub mod common;
pub mod handler;
pub mod store;
