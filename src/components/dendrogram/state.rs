use super::types::ClusterNode;

/// Radius multiplier of the node under the pointer.
pub const HOVER_SCALE: f64 = 1.5;

/// Pixels between the pointer and the tooltip corner.
const TOOLTIP_OFFSET: f64 = 10.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
	pub visible: bool,
	pub left: f64,
	pub top: f64,
	pub lines: Vec<String>,
}

impl TooltipState {
	fn move_to(&mut self, page_x: f64, page_y: f64) {
		self.left = page_x + TOOLTIP_OFFSET;
		self.top = page_y + TOOLTIP_OFFSET;
	}
}

/// Pointer interaction of one mounted render: the hovered node and the single tooltip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverState {
	pub node: Option<usize>,
	pub tooltip: TooltipState,
}

impl HoverState {
	pub fn enter(&mut self, idx: usize, node: &ClusterNode, page_x: f64, page_y: f64) {
		self.node = Some(idx);
		self.tooltip.lines = node.hovertext.lines();
		self.tooltip.visible = true;
		self.tooltip.move_to(page_x, page_y);
	}

	pub fn move_to(&mut self, idx: usize, page_x: f64, page_y: f64) {
		self.node = Some(idx);
		self.tooltip.move_to(page_x, page_y);
	}

	pub fn leave(&mut self) {
		self.node = None;
		self.tooltip.visible = false;
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.node == Some(idx)
	}

	/// Radius to draw node `idx` with, enlarged while hovered.
	pub fn radius(&self, idx: usize, base: f64) -> f64 {
		if self.is_hovered(idx) {
			base * HOVER_SCALE
		} else {
			base
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn node(hovertext: serde_json::Value) -> ClusterNode {
		serde_json::from_value(json!({
			"x": 0, "y": 0, "type": "leaf", "id": 1, "hovertext": hovertext
		}))
		.unwrap()
	}

	#[test]
	fn enter_shows_tooltip_and_enlarges() {
		let mut state = HoverState::default();
		state.enter(2, &node(json!({"id": 4, "size": "12"})), 100.0, 50.0);
		assert!(state.tooltip.visible);
		assert_eq!(state.tooltip.lines, vec!["id: 4", "size: 12"]);
		assert_eq!((state.tooltip.left, state.tooltip.top), (110.0, 60.0));
		assert_eq!(state.radius(2, 4.0), 6.0);
		assert_eq!(state.radius(1, 4.0), 4.0);
	}

	#[test]
	fn move_keeps_enlargement_without_compounding() {
		let mut state = HoverState::default();
		state.enter(0, &node(json!("hello")), 0.0, 0.0);
		state.move_to(0, 20.0, 30.0);
		state.move_to(0, 25.0, 35.0);
		assert_eq!(state.radius(0, 10.0), 15.0);
		assert_eq!((state.tooltip.left, state.tooltip.top), (35.0, 45.0));
		assert_eq!(state.tooltip.lines, vec!["hello"]);
	}

	#[test]
	fn leave_hides_and_restores() {
		let mut state = HoverState::default();
		state.enter(3, &node(json!({})), 5.0, 5.0);
		state.leave();
		assert!(!state.tooltip.visible);
		assert_eq!(state.radius(3, 7.0), 7.0);
	}

	#[test]
	fn tooltip_is_shared_between_nodes() {
		let mut state = HoverState::default();
		state.enter(0, &node(json!("first")), 0.0, 0.0);
		state.leave();
		state.enter(1, &node(json!("second")), 0.0, 0.0);
		assert_eq!(state.tooltip.lines, vec!["second"]);
		assert!(!state.is_hovered(0));
	}
}
