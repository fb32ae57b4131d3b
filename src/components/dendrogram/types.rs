use std::fmt;

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A position along the label axis together with its display text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
	#[serde(default = "nan", deserialize_with = "number_or_nan")]
	pub x: f64,
	#[serde(default)]
	pub label: String,
	/// Rotation of the tick text in degrees.
	#[serde(rename = "labelAngle", default)]
	pub label_angle: f64,
}

/// One merge edge of the dendrogram, drawn as a polyline through `x`/`y`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterLink {
	#[serde(default, deserialize_with = "numbers_or_nan")]
	pub x: Vec<f64>,
	#[serde(default, deserialize_with = "numbers_or_nan")]
	pub y: Vec<f64>,
	/// Stroke color of the link.
	#[serde(default = "default_link_color")]
	pub fillcolor: String,
	#[serde(default)]
	pub id: Option<i64>,
	#[serde(default)]
	pub children_id: Option<(i64, i64)>,
	#[serde(default)]
	pub cluster_id: Option<i64>,
	#[serde(default = "default_stroke_width")]
	pub strokewidth: f64,
	#[serde(default = "default_stroke_dash")]
	pub strokedash: Vec<f64>,
	#[serde(default = "default_opacity")]
	pub strokeopacity: f64,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Tooltip payload of a node: preformatted text or ordered `key: value` pairs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HoverText {
	Text(String),
	Fields(Map<String, Value>),
}

impl Default for HoverText {
	fn default() -> Self {
		HoverText::Fields(Map::new())
	}
}

impl HoverText {
	/// Lines shown in the tooltip, in the order the host sent them.
	pub fn lines(&self) -> Vec<String> {
		match self {
			HoverText::Text(text) => vec![text.clone()],
			HoverText::Fields(fields) => fields
				.iter()
				.map(|(key, value)| format!("{}: {}", key, display_value(value)))
				.collect(),
		}
	}
}

fn display_value(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

/// A leaf or cluster point of the dendrogram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterNode {
	#[serde(default = "nan", deserialize_with = "number_or_nan")]
	pub x: f64,
	#[serde(default = "nan", deserialize_with = "number_or_nan")]
	pub y: f64,
	/// One of `leaf`, `subcluster`, `cluster`, `supercluster`.
	#[serde(rename = "type", default)]
	pub node_type: String,
	#[serde(default)]
	pub id: i64,
	/// Flat cluster id; `None` for nodes that do not represent a cluster.
	#[serde(default)]
	pub cluster_id: Option<i64>,
	#[serde(default)]
	pub edgecolor: String,
	#[serde(default)]
	pub label: String,
	#[serde(default)]
	pub hovertext: HoverText,
	#[serde(default = "default_node_color")]
	pub fillcolor: String,
	#[serde(default = "default_radius")]
	pub radius: f64,
	#[serde(default = "default_opacity")]
	pub opacity: f64,
	#[serde(default = "default_label_size")]
	pub labelsize: f64,
	#[serde(default = "default_node_color")]
	pub labelcolor: String,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// A fully laid out dendrogram as produced by the Python side.
///
/// Entries that fail to decode are dropped with a warning; the rest is drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dendrogram {
	#[serde(default, deserialize_with = "each_or_skip")]
	pub axis_labels: Vec<AxisLabel>,
	#[serde(default, deserialize_with = "each_or_skip")]
	pub links: Vec<ClusterLink>,
	#[serde(default, deserialize_with = "each_or_skip")]
	pub nodes: Vec<ClusterNode>,
	#[serde(default = "default_true")]
	pub computed_nodes: bool,
	/// Domain of the label axis.
	#[serde(default, deserialize_with = "pair_or_nan")]
	pub x_domain: (f64, f64),
	/// Domain of the value axis.
	#[serde(default, deserialize_with = "pair_or_nan")]
	pub y_domain: (f64, f64),
}

/// Edge of the plot where the dendrogram root sits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
	#[default]
	Top,
	Bottom,
	Left,
	Right,
}

impl Orientation {
	/// Top and bottom put the labels on the horizontal screen axis.
	pub fn is_vertical(self) -> bool {
		matches!(self, Orientation::Top | Orientation::Bottom)
	}
}

impl fmt::Display for Orientation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Orientation::Top => "top",
			Orientation::Bottom => "bottom",
			Orientation::Left => "left",
			Orientation::Right => "right",
		};
		f.write_str(name)
	}
}

/// Scale used for the value axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
	#[default]
	Linear,
	Log,
	Symlog,
}

/// Arguments of one render event sent by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderArgs {
	pub dendrogram: Dendrogram,
	#[serde(default, deserialize_with = "known_or_default")]
	pub scale: ScaleKind,
	#[serde(default = "default_true")]
	pub show_nodes: bool,
	#[serde(default = "default_extent")]
	pub height: f64,
	#[serde(default = "default_extent")]
	pub width: f64,
	#[serde(default, deserialize_with = "known_or_default")]
	pub orientation: Orientation,
	/// Room reserved for the label axis tick texts.
	#[serde(default = "default_label_margin")]
	pub label_margin: f64,
}

fn each_or_skip<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
	let total = raw.len();
	let items: Vec<T> = raw
		.into_iter()
		.enumerate()
		.filter_map(|(i, value)| match serde_json::from_value(value) {
			Ok(item) => Some(item),
			Err(err) => {
				warn!("skipping entry {i}: {err}");
				None
			}
		})
		.collect();
	if items.len() < total {
		warn!("kept {} of {} entries", items.len(), total);
	}
	Ok(items)
}

fn known_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned + Default,
{
	let value = Value::deserialize(deserializer)?;
	if value.is_null() {
		return Ok(T::default());
	}
	Ok(serde_json::from_value(value.clone()).unwrap_or_else(|err| {
		warn!("unknown value {value}, using the default: {err}");
		T::default()
	}))
}

/// `null` is what `JSON.stringify` leaves of NaN and the infinities.
fn number_or_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
	Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

fn numbers_or_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
	let raw = Option::<Vec<Option<f64>>>::deserialize(deserializer)?.unwrap_or_default();
	Ok(raw.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

fn pair_or_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<(f64, f64), D::Error> {
	let (lo, hi) = Option::<(Option<f64>, Option<f64>)>::deserialize(deserializer)?
		.unwrap_or((Some(0.0), Some(0.0)));
	Ok((lo.unwrap_or(f64::NAN), hi.unwrap_or(f64::NAN)))
}

fn nan() -> f64 {
	f64::NAN
}

fn default_link_color() -> String {
	"#000".into()
}

fn default_true() -> bool {
	true
}

fn default_stroke_width() -> f64 {
	1.0
}

fn default_stroke_dash() -> Vec<f64> {
	vec![1.0, 0.0]
}

fn default_opacity() -> f64 {
	1.0
}

fn default_node_color() -> String {
	"#fff".into()
}

fn default_radius() -> f64 {
	7.0
}

fn default_label_size() -> f64 {
	10.0
}

fn default_extent() -> f64 {
	400.0
}

fn default_label_margin() -> f64 {
	150.0
}
