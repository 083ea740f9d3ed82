pub mod product;
pub mod supplier;

use serde::Serialize;

/// `{"status": "ok", "data": ...}` wrapper returned by every resource endpoint.
/// `data` is left out for deletes.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self { status: "ok", data: Some(data) }
    }
}

impl Envelope<()> {
    pub fn ok_empty() -> Self {
        Self { status: "ok", data: None }
    }
}
