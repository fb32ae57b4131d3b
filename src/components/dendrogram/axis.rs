use leptos::prelude::*;

use super::layout::{Dimensions, Side};
use super::scale::{Scales, VALUE_TICK_COUNT};
use super::types::AxisLabel;

pub const LABEL_AXIS_ID: &str = "label-axis";
pub const VALUE_AXIS_ID: &str = "value-axis";

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
	/// Pixel offset along the axis.
	pub offset: f64,
	pub text: String,
}

/// Everything needed to draw one axis group.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisModel {
	pub id: &'static str,
	pub side: Side,
	pub translate: (f64, f64),
	pub range: (f64, f64),
	pub ticks: Vec<Tick>,
	/// Shared rotation of every tick text, label axis only.
	pub rotation: Option<f64>,
}

impl AxisModel {
	/// Ticks at each label's position, text taken from the same index.
	pub fn label_axis(labels: &[AxisLabel], scales: &Scales, dims: &Dimensions) -> Self {
		let side = dims.orientation.layout().label_side;
		let ticks = labels
			.iter()
			.map(|label| Tick {
				offset: scales.label.map(label.x),
				text: label.label.clone(),
			})
			.collect();
		Self {
			id: LABEL_AXIS_ID,
			side,
			translate: dims.axis_offset(side),
			range: scales.label.range,
			ticks,
			rotation: Some(labels.first().map_or(0.0, |l| l.label_angle)),
		}
	}

	pub fn value_axis(scales: &Scales, dims: &Dimensions) -> Self {
		let side = dims.orientation.layout().value_side;
		let ticks = scales
			.value
			.labelled_ticks(VALUE_TICK_COUNT)
			.into_iter()
			.map(|(value, text)| Tick {
				offset: scales.value.map(value),
				text,
			})
			.filter(|t| t.offset.is_finite())
			.collect();
		Self {
			id: VALUE_AXIS_ID,
			side,
			translate: dims.axis_offset(side),
			range: scales.value.range(),
			ticks,
			rotation: None,
		}
	}

	pub fn text_anchor(&self) -> &'static str {
		match self.rotation {
			Some(angle) if angle < 0.0 => "end",
			Some(angle) if angle > 0.0 => "start",
			// unrotated text hangs away from the plot
			_ => match self.side {
				Side::Top | Side::Bottom => "middle",
				Side::Left => "end",
				Side::Right => "start",
			},
		}
	}

	pub fn tick_transform(&self, tick: &Tick) -> String {
		if self.side.is_horizontal() {
			format!("translate({},0)", tick.offset)
		} else {
			format!("translate(0,{})", tick.offset)
		}
	}

	/// End of the tick mark, relative to the tick origin.
	pub fn tick_end(&self) -> (f64, f64) {
		let (dx, dy) = self.side.outward();
		(dx * TICK_SIZE, dy * TICK_SIZE)
	}

	pub fn text_position(&self) -> (f64, f64) {
		let (dx, dy) = self.side.outward();
		let d = TICK_SIZE + TICK_PADDING;
		(dx * d, dy * d)
	}

	pub fn text_dy(&self) -> &'static str {
		match self.side {
			Side::Bottom => "0.71em",
			Side::Top => "0em",
			Side::Left | Side::Right => "0.32em",
		}
	}

	pub fn text_transform(&self) -> Option<String> {
		self.rotation
			.filter(|angle| *angle != 0.0)
			.map(|angle| format!("rotate({angle})"))
	}

	pub fn domain_path(&self) -> String {
		let (r0, r1) = self.range;
		if self.side.is_horizontal() {
			format!("M{r0},0H{r1}")
		} else {
			format!("M0,{r0}V{r1}")
		}
	}
}

#[component]
pub fn AxisGroup(model: AxisModel) -> impl IntoView {
	let (tx, ty) = model.translate;
	let (x2, y2) = model.tick_end();
	let (text_x, text_y) = model.text_position();
	let anchor = model.text_anchor();
	let dy = model.text_dy();
	let text_transform = model.text_transform();

	let ticks = model
		.ticks
		.iter()
		.map(|tick| {
			view! {
				<g class="tick" transform=model.tick_transform(tick)>
					<line x2=x2.to_string() y2=y2.to_string() stroke="currentColor" />
					<text
						fill="currentColor"
						x=text_x.to_string()
						y=text_y.to_string()
						dy=dy
						text-anchor=anchor
						transform=text_transform.clone()
					>
						{tick.text.clone()}
					</text>
				</g>
			}
		})
		.collect_view();

	view! {
		<g id=model.id class="axis" transform=format!("translate({tx},{ty})") font-size="10">
			<path class="domain" d=model.domain_path() stroke="currentColor" fill="none" />
			{ticks}
		</g>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::dendrogram::types::{Orientation, ScaleKind};

	fn label(x: f64, text: &str, angle: f64) -> AxisLabel {
		AxisLabel {
			x,
			label: text.into(),
			label_angle: angle,
		}
	}

	fn scales(orientation: Orientation) -> (Scales, Dimensions) {
		let dims = Dimensions::inner(100.0, 100.0, orientation);
		let scales = Scales::build(&dims, (0.0, 10.0), (0.0, 10.0), ScaleKind::Linear);
		(scales, dims)
	}

	#[test]
	fn label_ticks_follow_input_order() {
		let (s, dims) = scales(Orientation::Top);
		let labels = [label(5.0, "A", 0.0), label(1.0, "B", 0.0)];
		let axis = AxisModel::label_axis(&labels, &s, &dims);
		assert_eq!(
			axis.ticks,
			vec![
				Tick {
					offset: 50.0,
					text: "A".into()
				},
				Tick {
					offset: 10.0,
					text: "B".into()
				},
			]
		);
	}

	#[test]
	fn rotation_comes_from_first_label() {
		let (s, dims) = scales(Orientation::Top);
		let labels = [label(1.0, "a", -45.0), label(2.0, "b", 30.0)];
		let axis = AxisModel::label_axis(&labels, &s, &dims);
		assert_eq!(axis.rotation, Some(-45.0));
		assert_eq!(axis.text_anchor(), "end");
		assert_eq!(axis.text_transform().as_deref(), Some("rotate(-45)"));

		let labels = [label(1.0, "a", 90.0)];
		let axis = AxisModel::label_axis(&labels, &s, &dims);
		assert_eq!(axis.text_anchor(), "start");
	}

	#[test]
	fn unrotated_labels_have_no_transform() {
		let (s, dims) = scales(Orientation::Top);
		let axis = AxisModel::label_axis(&[label(1.0, "a", 0.0)], &s, &dims);
		assert_eq!(axis.text_transform(), None);
		assert_eq!(axis.text_anchor(), "middle");
	}

	#[test]
	fn unrotated_side_labels_point_away_from_plot() {
		let (s, dims) = scales(Orientation::Right);
		let axis = AxisModel::label_axis(&[label(1.0, "a", 0.0)], &s, &dims);
		assert_eq!(axis.side, Side::Left);
		assert_eq!(axis.text_anchor(), "end");

		let (s, dims) = scales(Orientation::Left);
		let axis = AxisModel::label_axis(&[label(1.0, "a", 0.0)], &s, &dims);
		assert_eq!(axis.text_anchor(), "start");
	}

	#[test]
	fn axis_sides_follow_orientation() {
		let cases = [
			(Orientation::Top, Side::Bottom, (0.0, 100.0), Side::Left),
			(Orientation::Bottom, Side::Top, (0.0, 0.0), Side::Left),
			(Orientation::Left, Side::Right, (100.0, 0.0), Side::Bottom),
			(Orientation::Right, Side::Left, (0.0, 0.0), Side::Bottom),
		];
		for (orientation, label_side, label_translate, value_side) in cases {
			let (s, dims) = scales(orientation);
			let label_axis = AxisModel::label_axis(&[], &s, &dims);
			let value_axis = AxisModel::value_axis(&s, &dims);
			assert_eq!(label_axis.side, label_side, "{orientation}");
			assert_eq!(label_axis.translate, label_translate, "{orientation}");
			assert_eq!(value_axis.side, value_side, "{orientation}");
		}
	}

	#[test]
	fn value_ticks_are_scaled() {
		let (s, dims) = scales(Orientation::Top);
		let axis = AxisModel::value_axis(&s, &dims);
		assert_eq!(axis.ticks.len(), 11);
		assert_eq!(axis.ticks[0].offset, 100.0);
		assert_eq!(axis.ticks[0].text, "0");
		assert_eq!(axis.ticks[10].offset, 0.0);
		assert_eq!(axis.text_anchor(), "end");
		assert_eq!(axis.tick_end(), (-6.0, 0.0));
		assert_eq!(axis.tick_transform(&axis.ticks[10]), "translate(0,0)");
	}

	#[test]
	fn bottom_axis_geometry() {
		let (s, dims) = scales(Orientation::Top);
		let axis = AxisModel::label_axis(&[label(5.0, "A", 0.0)], &s, &dims);
		assert_eq!(axis.tick_end(), (0.0, 6.0));
		assert_eq!(axis.text_position(), (0.0, 9.0));
		assert_eq!(axis.text_dy(), "0.71em");
		assert_eq!(axis.domain_path(), "M0,0H100");
		assert_eq!(axis.tick_transform(&axis.ticks[0]), "translate(50,0)");
	}
}
