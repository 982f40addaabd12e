//! Request extractors that report rejections through the response envelope

use axum::extract::{FromRequest, FromRequestParts};

use crate::utils::errors::CampusError;

/// JSON body; malformed bodies become a 400 envelope
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(CampusError))]
pub struct ApiJson<T>(pub T);

/// Path parameters; non-numeric ids become a 400 envelope
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(CampusError))]
pub struct ApiPath<T>(pub T);

/// Query string parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(CampusError))]
pub struct ApiQuery<T>(pub T);
