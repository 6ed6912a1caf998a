//! The contract shared by every resource list
//!
//! Each list knows the path it is fetched from, how to serialize its
//! elements, and how to replace its elements from a response body. The
//! client's [`fetch`](super::PantheonClient::fetch) is written once against
//! [`Resource`] and drives any of them.

use std::collections::HashMap;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use serde_path_to_error::{Path, Segment};

use super::models::flex;
use super::session::AuthSession;
use crate::error::ResourceError;

/// A collection that can be fetched from the Pantheon API.
pub trait Resource: Send {
    /// API-relative path for this collection.
    ///
    /// `method` is accepted for future write support; every current list is
    /// read-only. User-scoped lists resolve the user through `session`;
    /// explicitly scoped lists never touch it.
    fn path(&self, method: &Method, session: &dyn AuthSession) -> Result<String, ResourceError>;

    /// Serialize the element sequence, excluding scope parameters.
    fn json(&self) -> Result<Vec<u8>, ResourceError>;

    /// Replace the element sequence with the JSON array in `data`.
    fn unmarshal(&mut self, data: &[u8]) -> Result<(), ResourceError>;
}

/// Resolve the current user for a user-scoped path.
pub(crate) fn resolve_user(session: &dyn AuthSession) -> Result<String, ResourceError> {
    session
        .get_user()
        .map_err(|e| ResourceError::SessionResolution(e.to_string()))
}

pub(crate) fn encode_records<T: Serialize>(records: &[T]) -> Result<Vec<u8>, ResourceError> {
    serde_json::to_vec(records).map_err(ResourceError::Encode)
}

/// Decode a JSON array element by element so failures carry their index.
pub(crate) fn decode_records<T: DeserializeOwned>(data: &[u8]) -> Result<Vec<T>, ResourceError> {
    let elements: Vec<Box<RawValue>> =
        serde_json::from_slice(data).map_err(|e| ResourceError::Decode {
            index: None,
            field: None,
            source: Box::new(e),
        })?;

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| decode_element(index, element))
        .collect()
}

/// Decode one element, naming the field that failed.
fn decode_element<T: DeserializeOwned>(
    index: usize,
    element: &RawValue,
) -> Result<T, ResourceError> {
    let mut de = serde_json::Deserializer::from_str(element.get());

    serde_path_to_error::deserialize(&mut de).map_err(|err| {
        let field = err.path().iter().next().is_some().then(|| err.path().to_string());
        let numeric = match &field {
            Some(name) if err.inner().to_string().contains(flex::EXPECTING) => {
                Some(ResourceError::MalformedNumericField {
                    field: name.clone(),
                    raw: raw_at(element, err.path()).unwrap_or_default(),
                })
            }
            _ => None,
        };

        let source: Box<dyn std::error::Error + Send + Sync> = match numeric {
            Some(numeric) => Box::new(numeric),
            None => Box::new(err.into_inner()),
        };

        ResourceError::Decode {
            index: Some(index),
            field,
            source,
        }
    })
}

/// The original text of the value at `path` inside `element`.
fn raw_at(element: &RawValue, path: &Path) -> Option<String> {
    let mut current: Box<RawValue> = element.to_owned();

    for segment in path.iter() {
        current = match segment {
            Segment::Map { key } => {
                let mut fields: HashMap<String, Box<RawValue>> =
                    serde_json::from_str(current.get()).ok()?;
                fields.remove(key)?
            }
            Segment::Seq { index } => {
                let items: Vec<Box<RawValue>> = serde_json::from_str(current.get()).ok()?;
                items.into_iter().nth(*index)?
            }
            _ => return None,
        };
    }

    Some(current.get().to_string())
}
