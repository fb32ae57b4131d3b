//! Orientation-aware copy of the dendrogram coordinates.
//!
//! Points come out "screen ordered": `x` is whatever lands on the horizontal
//! screen axis. For top/bottom that is the label coordinate, for left/right
//! the label and value coordinates trade places.

use log::warn;

use super::types::{Dendrogram, Orientation};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	fn oriented(label: f64, value: f64, orientation: Orientation) -> Self {
		if orientation.is_vertical() {
			Point { x: label, y: value }
		} else {
			Point { x: value, y: label }
		}
	}
}

/// A link reduced to the ordered points of its polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkPath {
	/// Index into `Dendrogram::links`.
	pub index: usize,
	pub points: Vec<Point>,
}

/// A node position; the record itself stays in the source dendrogram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodePoint {
	/// Index into `Dendrogram::nodes`.
	pub index: usize,
	pub at: Point,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedDendrogram {
	pub links: Vec<LinkPath>,
	pub nodes: Vec<NodePoint>,
}

/// Builds screen-ordered coordinates without touching `dendrogram`.
///
/// Links whose `x` and `y` lengths disagree are skipped.
pub fn normalize(dendrogram: &Dendrogram, orientation: Orientation) -> NormalizedDendrogram {
	let links = dendrogram
		.links
		.iter()
		.enumerate()
		.filter_map(|(index, link)| {
			if link.x.len() != link.y.len() {
				warn!(
					"skipping link {:?}: {} x coordinates but {} y coordinates",
					link.id,
					link.x.len(),
					link.y.len()
				);
				return None;
			}
			let points = link
				.x
				.iter()
				.zip(&link.y)
				.map(|(&x, &y)| Point::oriented(x, y, orientation))
				.collect();
			Some(LinkPath { index, points })
		})
		.collect();

	let nodes = dendrogram
		.nodes
		.iter()
		.enumerate()
		.map(|(index, node)| NodePoint {
			index,
			at: Point::oriented(node.x, node.y, orientation),
		})
		.collect();

	NormalizedDendrogram { links, nodes }
}
