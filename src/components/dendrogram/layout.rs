//! Orientation lookup table and the pixel box derived from a render event.

use super::types::{Orientation, RenderArgs};

/// Margin applied to every side of the plot.
pub const BASE_MARGIN: f64 = 10.0;
/// Extra room on the value axis side for its tick texts.
pub const VALUE_AXIS_MARGIN: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenAxis {
	X,
	Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
	Top,
	Bottom,
	Left,
	Right,
}

impl Side {
	/// Unit direction in which tick marks point, away from the plot.
	pub fn outward(self) -> (f64, f64) {
		match self {
			Side::Top => (0.0, -1.0),
			Side::Bottom => (0.0, 1.0),
			Side::Left => (-1.0, 0.0),
			Side::Right => (1.0, 0.0),
		}
	}

	pub fn is_horizontal(self) -> bool {
		matches!(self, Side::Top | Side::Bottom)
	}
}

/// Direction of a pixel range over its extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span {
	/// `[0, extent]`
	Forward,
	/// `[extent, 0]`
	Reverse,
}

impl Span {
	pub fn resolve(self, extent: f64) -> (f64, f64) {
		match self {
			Span::Forward => (0.0, extent),
			Span::Reverse => (extent, 0.0),
		}
	}
}

/// Where the label and value axes go for one orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
	pub label_axis: ScreenAxis,
	pub label_span: Span,
	pub value_span: Span,
	pub label_side: Side,
	pub value_side: Side,
}

const TOP: Layout = Layout {
	label_axis: ScreenAxis::X,
	label_span: Span::Forward,
	value_span: Span::Reverse,
	label_side: Side::Bottom,
	value_side: Side::Left,
};

const BOTTOM: Layout = Layout {
	label_axis: ScreenAxis::X,
	label_span: Span::Forward,
	value_span: Span::Forward,
	label_side: Side::Top,
	value_side: Side::Left,
};

const LEFT: Layout = Layout {
	label_axis: ScreenAxis::Y,
	label_span: Span::Reverse,
	value_span: Span::Reverse,
	label_side: Side::Right,
	value_side: Side::Bottom,
};

const RIGHT: Layout = Layout {
	label_axis: ScreenAxis::Y,
	label_span: Span::Reverse,
	value_span: Span::Forward,
	label_side: Side::Left,
	value_side: Side::Bottom,
};

impl Orientation {
	pub fn layout(self) -> &'static Layout {
		match self {
			Orientation::Top => &TOP,
			Orientation::Bottom => &BOTTOM,
			Orientation::Left => &LEFT,
			Orientation::Right => &RIGHT,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margin {
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
	pub left: f64,
}

impl Margin {
	fn side_mut(&mut self, side: Side) -> &mut f64 {
		match side {
			Side::Top => &mut self.top,
			Side::Bottom => &mut self.bottom,
			Side::Left => &mut self.left,
			Side::Right => &mut self.right,
		}
	}
}

/// Pixel box of one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
	pub width: f64,
	pub height: f64,
	pub margin: Margin,
	pub orientation: Orientation,
}

impl Dimensions {
	/// The label margin lands on the side facing away from the root.
	pub fn new(width: f64, height: f64, label_margin: f64, orientation: Orientation) -> Self {
		let layout = orientation.layout();
		let mut margin = Margin {
			top: BASE_MARGIN,
			right: BASE_MARGIN,
			bottom: BASE_MARGIN,
			left: BASE_MARGIN,
		};
		*margin.side_mut(layout.value_side) += VALUE_AXIS_MARGIN;
		*margin.side_mut(layout.label_side) += label_margin;
		Self {
			width,
			height,
			margin,
			orientation,
		}
	}

	pub fn from_args(args: &RenderArgs) -> Self {
		Self::new(args.width, args.height, args.label_margin, args.orientation)
	}

	/// Pixel box with no margins, used when the inner extent is given directly.
	pub fn inner(inner_width: f64, inner_height: f64, orientation: Orientation) -> Self {
		Self {
			width: inner_width,
			height: inner_height,
			margin: Margin::default(),
			orientation,
		}
	}

	pub fn inner_width(&self) -> f64 {
		(self.width - self.margin.left - self.margin.right).max(0.0)
	}

	pub fn inner_height(&self) -> f64 {
		(self.height - self.margin.top - self.margin.bottom).max(0.0)
	}

	/// Pixel ranges of the label and value scales.
	pub fn ranges(&self) -> ((f64, f64), (f64, f64)) {
		let layout = self.orientation.layout();
		let (label_extent, value_extent) = match layout.label_axis {
			ScreenAxis::X => (self.inner_width(), self.inner_height()),
			ScreenAxis::Y => (self.inner_height(), self.inner_width()),
		};
		(
			layout.label_span.resolve(label_extent),
			layout.value_span.resolve(value_extent),
		)
	}

	/// Offset of an axis group placed on `side` of the inner box.
	pub fn axis_offset(&self, side: Side) -> (f64, f64) {
		match side {
			Side::Bottom => (0.0, self.inner_height()),
			Side::Right => (self.inner_width(), 0.0),
			Side::Top | Side::Left => (0.0, 0.0),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn label_ranges_per_orientation() {
		let expected = [
			(Orientation::Top, (0.0, 100.0), (50.0, 0.0)),
			(Orientation::Bottom, (0.0, 100.0), (0.0, 50.0)),
			(Orientation::Left, (50.0, 0.0), (100.0, 0.0)),
			(Orientation::Right, (50.0, 0.0), (0.0, 100.0)),
		];
		for (orientation, label, value) in expected {
			let dims = Dimensions::inner(100.0, 50.0, orientation);
			assert_eq!(dims.ranges(), (label, value), "{orientation}");
		}
	}

	#[test]
	fn label_margin_goes_outward() {
		let top = Dimensions::new(400.0, 400.0, 100.0, Orientation::Top);
		assert_eq!(top.margin.bottom, BASE_MARGIN + 100.0);
		assert_eq!(top.margin.left, BASE_MARGIN + VALUE_AXIS_MARGIN);
		assert_eq!(top.margin.top, BASE_MARGIN);

		let bottom = Dimensions::new(400.0, 400.0, 100.0, Orientation::Bottom);
		assert_eq!(bottom.margin.top, BASE_MARGIN + 100.0);
		assert_eq!(bottom.margin.bottom, BASE_MARGIN);

		let left = Dimensions::new(400.0, 400.0, 100.0, Orientation::Left);
		assert_eq!(left.margin.right, BASE_MARGIN + 100.0);
		assert_eq!(left.margin.bottom, BASE_MARGIN + VALUE_AXIS_MARGIN);

		let right = Dimensions::new(400.0, 400.0, 100.0, Orientation::Right);
		assert_eq!(right.margin.left, BASE_MARGIN + 100.0);
		assert_eq!(right.inner_width(), 400.0 - 2.0 * BASE_MARGIN - 100.0);
	}

	#[test]
	fn inner_box_never_negative() {
		let dims = Dimensions::new(50.0, 20.0, 100.0, Orientation::Top);
		assert_eq!(dims.inner_height(), 0.0);
		assert_eq!(dims.inner_width(), 0.0);
	}

	#[test]
	fn axis_offsets() {
		let dims = Dimensions::inner(120.0, 80.0, Orientation::Top);
		assert_eq!(dims.axis_offset(Side::Bottom), (0.0, 80.0));
		assert_eq!(dims.axis_offset(Side::Right), (120.0, 0.0));
		assert_eq!(dims.axis_offset(Side::Left), (0.0, 0.0));
	}
}
