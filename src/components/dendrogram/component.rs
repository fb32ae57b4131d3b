use std::sync::Arc;

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::axis::AxisGroup;
use super::render::RenderContext;
use super::state::HoverState;
use super::types::{ClusterNode, RenderArgs};

pub const SVG_ID: &str = "idendrogram-svg";
pub const PLOT_ID: &str = "idendrogram-plot";
pub const LINKS_CLASS: &str = "links";
pub const NODES_CLASS: &str = "nodes";
pub const TOOLTIP_CLASS: &str = "idendrogram-tooltip";

/// One mounted render of a dendrogram.
///
/// The component owns its `RenderContext` and tooltip; re-rendering means
/// dropping this component and mounting a new one.
#[component]
pub fn DendrogramChart(
	args: RenderArgs,
	/// Receives the full record of a clicked node.
	#[prop(into)]
	on_node_click: Callback<ClusterNode>,
	/// Runs once the chart is in the document.
	#[prop(into, optional)]
	on_rendered: Option<Callback<()>>,
) -> impl IntoView {
	let ctx = RenderContext::new(args);
	let hover = RwSignal::new(HoverState::default());
	let (width, height) = (ctx.dims.width, ctx.dims.height);
	let margin = ctx.dims.margin;

	let links = ctx
		.link_shapes()
		.into_iter()
		.map(|link| {
			view! {
				<path
					d=link.d
					fill="none"
					stroke=link.stroke
					stroke-width=link.stroke_width.to_string()
					stroke-opacity=link.stroke_opacity.to_string()
					stroke-dasharray=link.dasharray
				/>
			}
		})
		.collect_view();

	let nodes = ctx
		.node_shapes()
		.into_iter()
		.filter_map(|shape| {
			let record = Arc::new(ctx.node(shape.index)?.clone());
			let idx = shape.index;
			let base_radius = shape.radius;

			let on_enter = {
				let record = record.clone();
				move |ev: MouseEvent| {
					hover.update(|h| h.enter(idx, &record, ev.page_x() as f64, ev.page_y() as f64))
				}
			};
			let on_move = move |ev: MouseEvent| {
				hover.update(|h| h.move_to(idx, ev.page_x() as f64, ev.page_y() as f64))
			};
			let on_leave = move |_: MouseEvent| hover.update(HoverState::leave);
			let on_click = move |_: MouseEvent| on_node_click.run((*record).clone());

			Some(view! {
				<g class="node" style="cursor: pointer;">
					<circle
						cx=shape.cx.to_string()
						cy=shape.cy.to_string()
						r=move || hover.with(|h| h.radius(idx, base_radius)).to_string()
						fill=shape.fill
						stroke=shape.stroke
						opacity=shape.opacity.to_string()
						on:mouseenter=on_enter.clone()
						on:mousemove=on_move
						on:mouseleave=on_leave
						on:click=on_click.clone()
					/>
					<text
						x=shape.cx.to_string()
						y=shape.cy.to_string()
						text-anchor="middle"
						dominant-baseline="central"
						fill=shape.label_color
						font-size=shape.label_size.to_string()
						font-weight="bold"
						opacity=shape.opacity.to_string()
						on:mouseenter=on_enter
						on:mousemove=on_move
						on:mouseleave=on_leave
						on:click=on_click
					>
						{shape.label}
					</text>
				</g>
			})
		})
		.collect_view();

	let label_axis = ctx.label_axis();
	let value_axis = ctx.value_axis();

	Effect::new(move |_| {
		if let Some(cb) = on_rendered {
			cb.run(());
		}
	});

	view! {
		<div class="idendrogram">
			<svg id=SVG_ID width=width.to_string() height=height.to_string()>
				<g id=PLOT_ID transform=format!("translate({},{})", margin.left, margin.top)>
					<AxisGroup model=label_axis />
					<AxisGroup model=value_axis />
					<g class=LINKS_CLASS>{links}</g>
					<g class=NODES_CLASS>{nodes}</g>
				</g>
			</svg>
			<div
				class=TOOLTIP_CLASS
				style:position="absolute"
				style:visibility=move || {
					if hover.with(|h| h.tooltip.visible) { "visible" } else { "hidden" }
				}
				style:left=move || format!("{}px", hover.with(|h| h.tooltip.left))
				style:top=move || format!("{}px", hover.with(|h| h.tooltip.top))
			>
				{move || {
					hover
						.with(|h| h.tooltip.lines.clone())
						.into_iter()
						.map(|line| view! { <div>{line}</div> })
						.collect_view()
				}}
			</div>
		</div>
	}
}
