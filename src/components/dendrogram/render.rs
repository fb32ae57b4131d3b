use log::{debug, warn};

use super::axis::AxisModel;
use super::layout::Dimensions;
use super::normalize::{NormalizedDendrogram, normalize};
use super::scale::Scales;
use super::types::{ClusterNode, RenderArgs};

/// Geometry of one link path, in plot pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkShape {
	pub d: String,
	pub stroke: String,
	pub stroke_width: f64,
	pub stroke_opacity: f64,
	pub dasharray: String,
}

/// Geometry of one node circle and its label, in plot pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeShape {
	pub index: usize,
	pub cx: f64,
	pub cy: f64,
	pub radius: f64,
	pub fill: String,
	pub stroke: String,
	pub opacity: f64,
	pub label: String,
	pub label_color: String,
	pub label_size: f64,
}

/// Straight segments through every point, in order.
pub fn line_path(points: impl IntoIterator<Item = (f64, f64)>) -> String {
	let mut d = String::new();
	for (i, (x, y)) in points.into_iter().enumerate() {
		d.push(if i == 0 { 'M' } else { 'L' });
		d.push_str(&format!("{x},{y}"));
	}
	d
}

fn dasharray(dash: &[f64]) -> String {
	dash.iter()
		.map(|v| v.to_string())
		.collect::<Vec<_>>()
		.join(",")
}

/// Everything one render needs, rebuilt from scratch for every host event.
#[derive(Clone, Debug)]
pub struct RenderContext {
	pub args: RenderArgs,
	pub dims: Dimensions,
	pub scales: Scales,
	pub normalized: NormalizedDendrogram,
}

impl RenderContext {
	pub fn new(args: RenderArgs) -> Self {
		let dims = Dimensions::from_args(&args);
		Self::with_dimensions(args, dims)
	}

	pub fn with_dimensions(args: RenderArgs, dims: Dimensions) -> Self {
		let d = &args.dendrogram;
		let scales = Scales::build(&dims, d.x_domain, d.y_domain, args.scale);
		let normalized = normalize(d, args.orientation);
		debug!(
			"render context: {} links, {} nodes, {} orientation, {}x{} inner box",
			normalized.links.len(),
			normalized.nodes.len(),
			args.orientation,
			dims.inner_width(),
			dims.inner_height()
		);
		Self {
			args,
			dims,
			scales,
			normalized,
		}
	}

	pub fn link_shapes(&self) -> Vec<LinkShape> {
		self.normalized
			.links
			.iter()
			.map(|path| {
				let link = &self.args.dendrogram.links[path.index];
				LinkShape {
					d: line_path(path.points.iter().map(|p| self.scales.project(p.x, p.y))),
					stroke: link.fillcolor.clone(),
					stroke_width: link.strokewidth,
					stroke_opacity: link.strokeopacity,
					dasharray: dasharray(&link.strokedash),
				}
			})
			.collect()
	}

	/// Nodes are drawn only when requested and actually computed upstream.
	pub fn draws_nodes(&self) -> bool {
		if !self.args.show_nodes {
			return false;
		}
		if !self.args.dendrogram.computed_nodes {
			warn!("nodes requested but the dendrogram was created without them");
			return false;
		}
		true
	}

	pub fn node_shapes(&self) -> Vec<NodeShape> {
		if !self.draws_nodes() {
			return Vec::new();
		}
		self.normalized
			.nodes
			.iter()
			.map(|p| {
				let node = &self.args.dendrogram.nodes[p.index];
				let (cx, cy) = self.scales.project(p.at.x, p.at.y);
				NodeShape {
					index: p.index,
					cx,
					cy,
					radius: node.radius,
					fill: node.fillcolor.clone(),
					stroke: node.edgecolor.clone(),
					opacity: node.opacity,
					label: node.label.clone(),
					label_color: node.labelcolor.clone(),
					label_size: node.labelsize,
				}
			})
			.collect()
	}

	/// The untouched record of node `index`, as sent by the host.
	pub fn node(&self, index: usize) -> Option<&ClusterNode> {
		self.args.dendrogram.nodes.get(index)
	}

	pub fn label_axis(&self) -> AxisModel {
		AxisModel::label_axis(&self.args.dendrogram.axis_labels, &self.scales, &self.dims)
	}

	pub fn value_axis(&self) -> AxisModel {
		AxisModel::value_axis(&self.scales, &self.dims)
	}
}
