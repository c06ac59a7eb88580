// src/extract.rs

//! Extractors whose rejections render through [`AppError`], so malformed
//! bodies and paths get the same JSON error shape as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` with a JSON error body on rejection (400).
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` that answers 404 when a segment does not parse.
/// Ids are extracted as `u64` so that negative numbers do not match a route.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

/// Narrows an unsigned path id to the `i64` the store uses; ids past `i64::MAX` cannot exist.
pub fn path_id(id: u64) -> Result<i64, AppError> {
    i64::try_from(id).map_err(|_| AppError::route_not_found())
}

/// `axum::extract::Query` with a JSON error body on rejection (400).
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
