use leptos::ev;
use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, MouseEvent};

use super::config::GraphStyle;
use super::layout::GraphLayout;
use super::model::RenderModel;
use super::render;
use super::state::{Selection, ViewTransform};
use super::types::{GraphNode, NodeId};

const DEFAULT_WIDTH: f64 = 1000.0;
const DEFAULT_HEIGHT: f64 = 800.0;

/// Canvas showing people and skills on two rings. Clicking a person reveals their skills.
#[component]
pub fn SkillGraphCanvas(
	#[prop(into)] layout: Signal<GraphLayout>,
	#[prop(optional)] style: GraphStyle,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let selection = RwSignal::new(Selection::default());
	let hovered = RwSignal::new(None::<NodeId>);
	let viewport = RwSignal::new((
		width.unwrap_or(DEFAULT_WIDTH),
		height.unwrap_or(DEFAULT_HEIGHT),
	));

	// Size the canvas once it is mounted.
	Effect::new(move |_| {
		if let Some(canvas) = canvas_ref.get() {
			viewport.set(viewport_size(&canvas, width, height));
		}
	});

	let resize = window_event_listener(ev::resize, move |_| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (w, h) = viewport_size(&canvas, width, height);
		debug!("reflow to {}x{}", w, h);
		viewport.set((w, h));
	});
	on_cleanup(move || resize.remove());

	// Every change of layout, selection, hover or size redraws the whole frame.
	let style_draw = style.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (w, h) = viewport.get();
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		let Some(ctx) = context_2d(&canvas) else {
			warn!("canvas has no 2d context");
			return;
		};

		let (selection, hovered) = (selection.get(), hovered.get());
		layout.with(|layout| {
			let model = RenderModel::build(layout, &selection, hovered, &style_draw);
			debug!(
				"drawing {} nodes, {} links ({} derived)",
				model.nodes.len(),
				model.links.len(),
				model.derived_link_count()
			);
			let transform = ViewTransform::fit(layout.bounds(), w, h, style_draw.view_padding);
			render::render(&model, &transform, &style_draw, &ctx, w, h);
		});
	});

	let style_click = style.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let next = layout.with_untracked(|layout| {
			let hit = node_under(layout, &canvas, &ev, viewport.get_untracked(), &style_click);
			if let Some(node) = hit {
				debug!("clicked {} at {:.0} degrees", node.name, node.degree);
			}
			Selection::clicked(layout, hit)
		});
		match &next.active_node {
			Some(name) => info!("selected {} ({} links)", name, next.visible_links.len()),
			None => debug!("selection cleared"),
		}
		selection.set(next);
	};

	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let next = layout.with_untracked(|layout| {
			node_under(layout, &canvas, &ev, viewport.get_untracked(), &style).map(|n| n.id)
		});
		if hovered.get_untracked() != next {
			hovered.set(next);
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		if hovered.get_untracked().is_some() {
			hovered.set(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="skill-graph-canvas"
			on:click=on_click
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style=move || {
				if hovered.get().is_some() {
					"display: block; cursor: pointer;"
				} else {
					"display: block; cursor: default;"
				}
			}
		/>
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Explicit size if given, else the parent's size, else the default container size.
fn viewport_size(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	let parent = canvas.parent_element();
	let measure = |dim: fn(&Element) -> i32, fallback: f64| {
		parent
			.as_ref()
			.map(dim)
			.filter(|&v| v > 0)
			.map_or(fallback, f64::from)
	};
	(
		width.unwrap_or_else(|| measure(Element::client_width, DEFAULT_WIDTH)),
		height.unwrap_or_else(|| measure(Element::client_height, DEFAULT_HEIGHT)),
	)
}

fn node_under<'a>(
	layout: &'a GraphLayout,
	canvas: &HtmlCanvasElement,
	ev: &MouseEvent,
	(w, h): (f64, f64),
	style: &GraphStyle,
) -> Option<&'a GraphNode> {
	let rect = canvas.get_bounding_client_rect();
	let (x, y) = (
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	);
	let transform = ViewTransform::fit(layout.bounds(), w, h, style.view_padding);
	layout.node_at(transform.screen_to_graph(x, y), style.node_radius / transform.k)
}
