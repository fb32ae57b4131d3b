use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures surfaced by the component.
///
/// Bad geometry in an otherwise well-formed dendrogram is not an error; it is
/// logged and drawn as well as possible.
#[derive(Clone, Debug, Error)]
pub enum Error {
	/// The payload does not have the shape of a render event.
	#[error("could not decode render event: {0}")]
	Decode(String),
	/// A browser or host call was rejected.
	#[error("host call failed: {0}")]
	Host(String),
	/// Running outside a browser window.
	#[error("no browser window available")]
	NoWindow,
	/// Not embedded in a parent frame.
	#[error("no parent frame to talk to")]
	NoParent,
	#[error("document has no body to measure")]
	NoDocumentBody,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Error::Decode(err.to_string())
	}
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		Error::Host(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
