//! Leptos client-side component drawing idendrogram dendrograms for a dashboard host.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Modules
pub mod components;
pub mod error;
pub mod host;
mod pages;

use crate::pages::host::HostedDendrogram;

pub use crate::error::{Error, Result};

const STYLE: &str = r#"
body { margin: 0; font-family: sans-serif; }
.idendrogram-tooltip {
	background: rgba(255, 255, 255, 0.95);
	border: 1px solid #ccc;
	border-radius: 4px;
	padding: 6px 8px;
	font-size: 12px;
	pointer-events: none;
	white-space: pre;
}
"#;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// The component root: document metadata plus the hosted chart.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />

		<Title text="idendrogram" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Style>{STYLE}</Style>

		<HostedDendrogram />
	}
}
