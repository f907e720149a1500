use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::GraphStyle;
use super::model::{LinkView, NodeView, RenderModel};
use super::state::ViewTransform;
use super::types::Point;

pub fn render(
	model: &RenderModel,
	transform: &ViewTransform,
	style: &GraphStyle,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
) {
	ctx.set_fill_style_str(style.background);
	ctx.fill_rect(0.0, 0.0, width, height);

	for link in &model.links {
		draw_link(link, transform, style, ctx);
	}
	for node in &model.nodes {
		draw_node(node, transform, style, ctx);
	}
	// labels last so no node covers them
	for node in &model.nodes {
		draw_label(node, transform, style, ctx);
	}
}

/// Quadratic curve bent perpendicular to the chord by `curveness * length`.
fn draw_link(
	link: &LinkView,
	transform: &ViewTransform,
	style: &GraphStyle,
	ctx: &CanvasRenderingContext2d,
) {
	let (from, to) = (
		transform.graph_to_screen(link.from),
		transform.graph_to_screen(link.to),
	);
	if from.distance(to) < 0.001 {
		return;
	}
	let control = Point::new(
		(from.x + to.x) / 2.0 - (from.y - to.y) * link.curveness,
		(from.y + to.y) / 2.0 - (to.x - from.x) * link.curveness,
	);

	ctx.set_stroke_style_str(link.color);
	ctx.set_line_width(style.link_width);
	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	ctx.quadratic_curve_to(control.x, control.y, to.x, to.y);
	ctx.stroke();
}

fn draw_node(
	node: &NodeView,
	transform: &ViewTransform,
	style: &GraphStyle,
	ctx: &CanvasRenderingContext2d,
) {
	let p = transform.graph_to_screen(node.position);

	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, style.node_radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(node.fill);
	ctx.fill();

	if let Some((color, width)) = node.border {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, style.node_radius + width / 2.0, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(width);
		ctx.stroke();
	}
}

fn draw_label(
	node: &NodeView,
	transform: &ViewTransform,
	style: &GraphStyle,
	ctx: &CanvasRenderingContext2d,
) {
	if node.label_lines.is_empty() {
		return;
	}
	let anchor = transform.graph_to_screen(node.position) + node.label_offset;
	let (pad_y, pad_x) = style.label_padding;

	ctx.set_font(style.label_font);
	let text_width = node
		.label_lines
		.iter()
		.filter_map(|line| ctx.measure_text(line).ok())
		.map(|m| m.width())
		.fold(0.0, f64::max);
	let text_height = node.label_lines.len() as f64 * style.label_line_height;
	let (w, h) = (text_width + 2.0 * pad_x, text_height + 2.0 * pad_y);
	let (left, top) = (anchor.x - w / 2.0, anchor.y - h / 2.0);

	ctx.set_global_alpha(node.label_opacity);

	rounded_rect(ctx, left, top, w, h, style.label_corner_radius);
	ctx.set_fill_style_str(style.label_background);
	ctx.fill();
	ctx.set_stroke_style_str(style.label_border_color);
	ctx.set_line_width(1.0);
	ctx.stroke();

	ctx.set_fill_style_str(style.label_color);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	for (i, line) in node.label_lines.iter().enumerate() {
		let y = top + pad_y + (i as f64 + 0.5) * style.label_line_height;
		let _ = ctx.fill_text(line, anchor.x, y);
	}

	ctx.set_global_alpha(1.0);
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	let r = r.min(w / 2.0).min(h / 2.0);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}
