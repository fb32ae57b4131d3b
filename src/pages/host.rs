use leptos::prelude::*;
use log::error;

use crate::components::dendrogram::{ClusterNode, DendrogramChart, RenderArgs};
use crate::error::Error;
use crate::host::{self, ComponentHost, StreamlitHost};

/// The page the dashboard embeds: waits for render events and redraws on each.
#[component]
pub fn HostedDendrogram() -> impl IntoView {
	let latest: RwSignal<Option<Result<RenderArgs, Error>>> = RwSignal::new(None);
	let bridge = StreamlitHost;

	// listen before announcing readiness so the first render is not missed
	host::report(bridge.listen(move |event| {
		if let Err(err) = &event {
			error!("{err}");
		}
		latest.set(Some(event));
	}));
	host::report(bridge.start());

	let on_node_click =
		Callback::new(move |node: ClusterNode| host::report(bridge.set_component_value(&node)));
	let on_rendered = Callback::new(move |_: ()| host::report(bridge.set_frame_height(None)));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<p class="idendrogram-error">"Could not draw the dendrogram:"</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			{move || {
				latest
					.get()
					.map(|event| {
						event
							.map(|args| {
								view! {
									<DendrogramChart
										args=args
										on_node_click=on_node_click
										on_rendered=on_rendered
									/>
								}
							})
					})
			}}
		</ErrorBoundary>
	}
}
