mod axis;
mod component;
pub mod layout;
mod normalize;
mod render;
pub mod scale;
mod state;
mod types;

pub use axis::{LABEL_AXIS_ID, VALUE_AXIS_ID};
pub use component::{
	DendrogramChart, LINKS_CLASS, NODES_CLASS, PLOT_ID, SVG_ID, TOOLTIP_CLASS,
};
pub use normalize::{NormalizedDendrogram, normalize};
pub use render::RenderContext;
pub use types::{
	AxisLabel, ClusterLink, ClusterNode, Dendrogram, HoverText, Orientation, RenderArgs,
	ScaleKind,
};
