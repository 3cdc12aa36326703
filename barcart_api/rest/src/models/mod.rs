use std::collections::BTreeMap;

use serde::Serialize;

pub mod contact;

#[derive(Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}

#[derive(Serialize)]
pub struct ApiValidationError {
    pub detail: &'static str,
    /// Field name to inline error message.
    pub errors: BTreeMap<&'static str, &'static str>,
}
