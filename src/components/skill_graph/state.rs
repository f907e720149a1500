use super::layout::GraphLayout;
use super::types::{Category, GraphLink, GraphNode, NodeId, Point};

/// Which person is selected, and the derived links shown for them.
///
/// Either both fields are set or both are empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
	pub active_node: Option<String>,
	pub visible_links: Vec<GraphLink>,
}

impl Selection {
	/// Selects the person called `name`, showing every derived link leaving them.
	pub fn person(layout: &GraphLayout, name: &str) -> Self {
		let Some(id) = layout.person_id(name) else {
			return Self::default();
		};
		Self {
			active_node: Some(name.to_string()),
			visible_links: layout
				.derived_links
				.iter()
				.filter(|link| link.source == id)
				.copied()
				.collect(),
		}
	}

	/// Next selection after a click that hit `node`, or empty space when `None`.
	///
	/// Clicking a skill clears the selection just like clicking the background.
	pub fn clicked(layout: &GraphLayout, node: Option<&GraphNode>) -> Self {
		match node {
			Some(node) if node.category == Category::Person => Self::person(layout, &node.name),
			_ => Self::default(),
		}
	}

	pub fn is_active(&self) -> bool {
		self.active_node.is_some()
	}

	pub fn shows(&self, link: &GraphLink) -> bool {
		self.visible_links
			.iter()
			.any(|l| l.source == link.source && l.target == link.target)
	}

	/// Whether a visible link ends at `id`.
	pub fn touches(&self, id: NodeId) -> bool {
		self.visible_links.iter().any(|l| l.touches(id))
	}
}

/// Graph to screen mapping: `screen = graph * k + (x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	/// Scales `bounds` uniformly to fit a `width` x `height` viewport and centers it.
	pub fn fit(bounds: Option<(Point, Point)>, width: f64, height: f64, padding: f64) -> Self {
		let Some((min, max)) = bounds else {
			return Self::default();
		};
		let (bw, bh) = (max.x - min.x, max.y - min.y);
		let (aw, ah) = ((width - 2.0 * padding).max(1.0), (height - 2.0 * padding).max(1.0));
		let k = match (bw > f64::EPSILON, bh > f64::EPSILON) {
			(true, true) => (aw / bw).min(ah / bh),
			(true, false) => aw / bw,
			(false, true) => ah / bh,
			(false, false) => 1.0,
		};
		let center = Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
		Self {
			x: width / 2.0 - center.x * k,
			y: height / 2.0 - center.y * k,
			k,
		}
	}

	pub fn graph_to_screen(&self, p: Point) -> Point {
		Point::new(p.x * self.k + self.x, p.y * self.k + self.y)
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> Point {
		Point::new((sx - self.x) / self.k, (sy - self.y) / self.k)
	}
}
