//! Networking for the prediction endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single `POST /predict` round trip. The wire contract
//! itself (field names, response parsing) lives in `intake::predict`.

pub mod api;
