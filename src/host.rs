//! Messages exchanged with the embedding dashboard (Streamlit component protocol).
//!
//! Outbound messages are posted to `window.parent`; inbound render events
//! arrive as `message` events on our own window.

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::{Value, json};
use wasm_bindgen::prelude::*;
use web_sys::MessageEvent;

use crate::components::dendrogram::{ClusterNode, RenderArgs};
use crate::error::{Error, Result};

const API_VERSION: u32 = 1;

const COMPONENT_READY: &str = "streamlit:componentReady";
const SET_FRAME_HEIGHT: &str = "streamlit:setFrameHeight";
const SET_COMPONENT_VALUE: &str = "streamlit:setComponentValue";
const RENDER: &str = "streamlit:render";

/// What the component can ask of its host.
pub trait ComponentHost {
	/// Tells the host the component is listening for render events.
	fn component_ready(&self) -> Result<()>;

	/// Resizes the embedding frame; `None` measures the document.
	fn set_frame_height(&self, height: Option<f64>) -> Result<()>;

	/// Makes `node` the component's current value on the host side.
	fn set_component_value(&self, node: &ClusterNode) -> Result<()>;
}

/// Builds the JSON body of an outbound message.
pub fn message(kind: &str, data: Value) -> Value {
	let mut body = json!({
		"isStreamlitMessage": true,
		"type": kind,
	});
	if let (Some(body), Value::Object(data)) = (body.as_object_mut(), data) {
		body.extend(data);
	}
	body
}

pub fn component_ready_message() -> Value {
	message(COMPONENT_READY, json!({ "apiVersion": API_VERSION }))
}

pub fn frame_height_message(height: f64) -> Value {
	message(SET_FRAME_HEIGHT, json!({ "height": height }))
}

pub fn component_value_message<T: Serialize>(value: &T) -> Result<Value> {
	let value = serde_json::to_value(value)?;
	Ok(message(
		SET_COMPONENT_VALUE,
		json!({ "value": value, "dataType": "json" }),
	))
}

/// Extracts the render arguments from an inbound message body.
///
/// Returns `Ok(None)` for messages that are not render events.
pub fn decode_render_event(body: &Value) -> Result<Option<RenderArgs>> {
	if body.get("type").and_then(Value::as_str) != Some(RENDER) {
		return Ok(None);
	}
	let args = body.get("args").cloned().unwrap_or(Value::Null);
	Ok(Some(serde_json::from_value(args)?))
}

/// Posts messages to the parent frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct StreamlitHost;

impl StreamlitHost {
	fn post(&self, body: &Value) -> Result<()> {
		let window = web_sys::window().ok_or(Error::NoWindow)?;
		let parent = window
			.parent()
			.map_err(Error::from)?
			.ok_or(Error::NoParent)?;
		let text = serde_json::to_string(body)?;
		let payload = js_sys::JSON::parse(&text).map_err(Error::from)?;
		parent.post_message(&payload, "*").map_err(Error::from)
	}

	fn document_height() -> Result<f64> {
		let window = web_sys::window().ok_or(Error::NoWindow)?;
		let body = window
			.document()
			.and_then(|d| d.body())
			.ok_or(Error::NoDocumentBody)?;
		Ok(body.scroll_height() as f64)
	}

	/// Announces readiness and syncs the frame height once.
	pub fn start(&self) -> Result<()> {
		self.component_ready()?;
		self.set_frame_height(None)
	}

	/// Calls `on_render` for every render event; other messages are ignored.
	pub fn listen<F>(&self, mut on_render: F) -> Result<()>
	where
		F: FnMut(Result<RenderArgs>) + 'static,
	{
		let window = web_sys::window().ok_or(Error::NoWindow)?;
		let closure = Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
			match decode_message_event(&ev) {
				Ok(Some(args)) => on_render(Ok(args)),
				Ok(None) => {}
				Err(err) => on_render(Err(err)),
			}
		});
		window
			.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
			.map_err(Error::from)?;
		// the listener lives as long as the page
		closure.forget();
		info!("listening for render events");
		Ok(())
	}
}

fn decode_message_event(ev: &MessageEvent) -> Result<Option<RenderArgs>> {
	let data = ev.data();
	if !data.is_object() {
		return Ok(None);
	}
	let text: String = js_sys::JSON::stringify(&data)
		.map_err(Error::from)?
		.into();
	let body: Value = serde_json::from_str(&text)?;
	decode_render_event(&body)
}

impl ComponentHost for StreamlitHost {
	fn component_ready(&self) -> Result<()> {
		self.post(&component_ready_message())
	}

	fn set_frame_height(&self, height: Option<f64>) -> Result<()> {
		let height = match height {
			Some(h) => h,
			None => Self::document_height()?,
		};
		debug!("frame height {height}");
		self.post(&frame_height_message(height))
	}

	fn set_component_value(&self, node: &ClusterNode) -> Result<()> {
		info!("node {} clicked", node.id);
		self.post(&component_value_message(node)?)
	}
}

/// Logs host failures; the chart keeps working without the host.
pub fn report(result: Result<()>) {
	if let Err(err) = result {
		warn!("host call failed: {err}");
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::dendrogram::RenderContext;
	use std::cell::RefCell;

	#[derive(Default)]
	struct RecordingHost {
		sent: RefCell<Vec<Value>>,
	}

	impl ComponentHost for RecordingHost {
		fn component_ready(&self) -> Result<()> {
			self.sent.borrow_mut().push(component_ready_message());
			Ok(())
		}

		fn set_frame_height(&self, height: Option<f64>) -> Result<()> {
			self.sent
				.borrow_mut()
				.push(frame_height_message(height.unwrap_or(0.0)));
			Ok(())
		}

		fn set_component_value(&self, node: &ClusterNode) -> Result<()> {
			self.sent.borrow_mut().push(component_value_message(node)?);
			Ok(())
		}
	}

	fn node(id: i64) -> ClusterNode {
		serde_json::from_value(json!({
			"x": 2.5, "y": 3.0, "type": "cluster", "id": id, "cluster_id": id,
			"edgecolor": "#111", "hovertext": {"size": 3}, "_default_leaf_radius": 4.0
		}))
		.unwrap()
	}

	#[test]
	fn ready_message_shape() {
		assert_eq!(
			component_ready_message(),
			json!({"isStreamlitMessage": true, "type": "streamlit:componentReady", "apiVersion": 1})
		);
	}

	#[test]
	fn frame_height_message_shape() {
		assert_eq!(
			frame_height_message(420.0),
			json!({"isStreamlitMessage": true, "type": "streamlit:setFrameHeight", "height": 420.0})
		);
	}

	#[test]
	fn click_sends_exactly_that_node() {
		let host = RecordingHost::default();
		let nodes = [node(1), node(2), node(3)];
		host.set_component_value(&nodes[1]).unwrap();

		let sent = host.sent.borrow();
		assert_eq!(sent.len(), 1);
		assert_eq!(sent[0]["type"], json!("streamlit:setComponentValue"));
		assert_eq!(sent[0]["dataType"], json!("json"));
		let value: ClusterNode = serde_json::from_value(sent[0]["value"].clone()).unwrap();
		assert_eq!(value, nodes[1]);
		assert_eq!(sent[0]["value"]["_default_leaf_radius"], json!(4.0));
		assert_eq!(sent[0]["value"]["hovertext"], json!({"size": 3}));
	}

	#[test]
	fn render_event_is_decoded() {
		let body = json!({
			"type": "streamlit:render",
			"args": {
				"dendrogram": {"axis_labels": [], "links": [], "nodes": [], "x_domain": [0, 1], "y_domain": [0, 2]},
				"orientation": "left",
				"scale": "symlog",
				"show_nodes": false,
				"height": 300,
				"width": 500
			},
			"disabled": false
		});
		let args = decode_render_event(&body).unwrap().unwrap();
		assert_eq!(args.width, 500.0);
		assert!(!args.show_nodes);
		assert_eq!(args.dendrogram.y_domain, (0.0, 2.0));
	}

	#[test]
	fn other_messages_are_ignored() {
		let body = json!({"type": "something-else", "args": {}});
		assert!(decode_render_event(&body).unwrap().is_none());
		assert!(decode_render_event(&json!([1, 2])).unwrap().is_none());
	}

	#[test]
	fn render_event_without_dendrogram_is_an_error() {
		let body = json!({"type": "streamlit:render", "args": {"orientation": "up"}});
		let err = decode_render_event(&body).unwrap_err();
		assert!(matches!(err, Error::Decode(_)));
	}

	#[test]
	fn one_bad_link_still_draws_the_rest() {
		let body = json!({
			"type": "streamlit:render",
			"args": {
				"dendrogram": {
					"axis_labels": [{"x": 0, "label": "a"}, {"x": 1, "label": "b"}],
					"links": [
						{"x": [0, 0, 1, 1], "y": [0, 1, 1, 0], "fillcolor": "#f00"},
						{"x": [0, 0], "y": [0, 1], "fillcolor": 12},
						{"x": [0, 0, 1, 1], "y": [1, 2, 2, 1]}
					],
					"nodes": [
						{"x": 0, "y": null, "type": "leaf", "id": 0},
						{"x": 1, "y": 2, "type": "cluster", "id": 1}
					],
					"x_domain": [0, 1],
					"y_domain": [0, 2]
				}
			}
		});
		let args = decode_render_event(&body).unwrap().unwrap();
		let ctx = RenderContext::new(args);
		let links = ctx.link_shapes();
		assert_eq!(links.len(), 2);
		assert_eq!(links[0].stroke, "#f00");
		assert_eq!(links[1].stroke, "#000");
		let nodes = ctx.node_shapes();
		assert_eq!(nodes.len(), 2);
		assert!(nodes[0].cy.is_nan());
		assert!(nodes[1].cy.is_finite());
	}
}
