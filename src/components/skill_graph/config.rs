use super::types::Point;

/// Ring geometry in graph coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	pub person_radius: f64,
	pub skill_radius: f64,
	/// Added to the ring radius when placing labels.
	pub person_label_margin: f64,
	pub skill_label_margin: f64,
	pub center: Point,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			person_radius: 100.0,
			skill_radius: 300.0,
			person_label_margin: 65.0,
			skill_label_margin: 50.0,
			center: Point::new(300.0, 300.0),
		}
	}
}

/// Colors and sizes used by the render model and the canvas renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphStyle {
	pub background: &'static str,
	pub person_color: &'static str,
	pub person_active_color: &'static str,
	pub person_hover_color: &'static str,
	pub skill_color: &'static str,
	pub skill_hover_color: &'static str,
	pub linked_color: &'static str,
	pub primary_link_color: &'static str,
	pub secondary_link_color: &'static str,
	pub ring_link_color: &'static str,

	pub node_radius: f64,
	pub active_border_width: f64,
	pub link_width: f64,
	pub person_ring_curveness: f64,
	pub skill_ring_curveness: f64,
	pub derived_curveness: f64,

	pub dimmed_label_opacity: f64,
	pub label_font: &'static str,
	pub label_color: &'static str,
	pub label_line_height: f64,
	pub label_background: &'static str,
	pub label_border_color: &'static str,
	pub label_corner_radius: f64,
	/// Vertical, horizontal.
	pub label_padding: (f64, f64),

	/// Screen margin kept around the fitted graph.
	pub view_padding: f64,
}

impl Default for GraphStyle {
	fn default() -> Self {
		Self {
			background: "#FFFFFF",
			person_color: "#ADADAD",
			person_active_color: "#00A372",
			person_hover_color: "#00A372",
			skill_color: "#FFD4AD",
			skill_hover_color: "#FF7A00",
			linked_color: "#FF7A00",
			primary_link_color: "#8F59B9",
			secondary_link_color: "#FF7A00",
			ring_link_color: "#ADADAD",

			node_radius: 14.0,
			active_border_width: 4.0,
			link_width: 2.0,
			person_ring_curveness: 0.2,
			skill_ring_curveness: 0.1,
			derived_curveness: 0.3,

			dimmed_label_opacity: 0.3,
			label_font: "bold 10px 'ALS Hauss', sans-serif",
			label_color: "#3A3A3A",
			label_line_height: 12.0,
			label_background: "rgba(255, 255, 255, 0.5)",
			label_border_color: "#F4F4F4",
			label_corner_radius: 6.0,
			label_padding: (3.0, 8.0),

			view_padding: 20.0,
		}
	}
}
