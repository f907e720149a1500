//! Pure mapping from layout and interaction state to what the canvas draws.

use super::config::GraphStyle;
use super::layout::GraphLayout;
use super::state::Selection;
use super::types::{Category, GraphLink, GraphNode, LinkKind, NodeId, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct NodeView {
	pub position: Point,
	pub label_offset: Point,
	pub label_lines: Vec<String>,
	pub label_opacity: f64,
	pub fill: &'static str,
	/// Color and width of the outline, if any.
	pub border: Option<(&'static str, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkView {
	pub from: Point,
	pub to: Point,
	pub color: &'static str,
	pub curveness: f64,
	pub persistent: bool,
}

/// Everything needed for one frame, in graph coordinates.
///
/// `nodes` follows the layout's node order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderModel {
	pub links: Vec<LinkView>,
	pub nodes: Vec<NodeView>,
}

impl RenderModel {
	pub fn build(
		layout: &GraphLayout,
		selection: &Selection,
		hovered: Option<NodeId>,
		style: &GraphStyle,
	) -> Self {
		// Link ids may come from an older layout; only the name carries over.
		let selection = &selection
			.active_node
			.as_deref()
			.map(|name| Selection::person(layout, name))
			.unwrap_or_default();
		let active = selection
			.active_node
			.as_deref()
			.and_then(|name| layout.person_id(name));

		let links = layout
			.persistent_links
			.iter()
			.chain(layout.derived_links.iter().filter(|l| selection.shows(l)))
			.filter_map(|link| link_view(layout, link, style))
			.collect();

		let nodes = layout
			.nodes
			.iter()
			.map(|node| node_view(layout, node, selection, active, hovered, style))
			.collect();

		Self { links, nodes }
	}

	pub fn derived_link_count(&self) -> usize {
		self.links.iter().filter(|l| !l.persistent).count()
	}
}

fn link_view(layout: &GraphLayout, link: &GraphLink, style: &GraphStyle) -> Option<LinkView> {
	let (from, to) = (layout.node(link.source)?, layout.node(link.target)?);
	let (color, curveness) = match link.kind {
		LinkKind::Primary => (style.primary_link_color, style.derived_curveness),
		LinkKind::Secondary => (style.secondary_link_color, style.derived_curveness),
		LinkKind::PersonRing => (style.ring_link_color, style.person_ring_curveness),
		LinkKind::SkillRing => (style.ring_link_color, style.skill_ring_curveness),
	};
	Some(LinkView {
		from: from.position,
		to: to.position,
		color,
		curveness,
		persistent: link.kind.is_persistent(),
	})
}

fn node_view(
	layout: &GraphLayout,
	node: &GraphNode,
	selection: &Selection,
	active: Option<NodeId>,
	hovered: Option<NodeId>,
	style: &GraphStyle,
) -> NodeView {
	let is_active = active == Some(node.id);
	let is_linked = active.is_some_and(|active| {
		layout.derived_links.iter().any(|l| {
			(l.source == active && l.target == node.id) || (l.target == active && l.source == node.id)
		})
	});

	let base = match node.category {
		Category::Person if is_active => style.person_active_color,
		Category::Person => style.person_color,
		Category::Skill => style.skill_color,
	};
	let fill = if hovered == Some(node.id) {
		match node.category {
			Category::Person => style.person_hover_color,
			Category::Skill => style.skill_hover_color,
		}
	} else if is_linked {
		style.linked_color
	} else {
		base
	};

	let label_opacity = match node.category {
		Category::Skill if selection.is_active() && !selection.touches(node.id) => {
			style.dimmed_label_opacity
		}
		_ => 1.0,
	};

	NodeView {
		position: node.position,
		label_offset: node.label_offset,
		label_lines: label_lines(node),
		label_opacity,
		fill,
		border: is_active.then_some((style.person_active_color, style.active_border_width)),
	}
}

/// Person names break into one word per line.
fn label_lines(node: &GraphNode) -> Vec<String> {
	match node.category {
		Category::Person => node.name.split(' ').map(String::from).collect(),
		Category::Skill => vec![node.name.clone()],
	}
}

#[cfg(test)]
mod tests {
	use super::super::config::LayoutConfig;
	use super::super::types::Person;
	use super::*;

	fn person(name: &str, main: &[&str], other: &[&str]) -> Person {
		Person {
			name: name.into(),
			main_skills: main.iter().map(|s| s.to_string()).collect(),
			other_skills: other.iter().map(|s| s.to_string()).collect(),
		}
	}

	fn layout() -> GraphLayout {
		GraphLayout::build(
			vec![
				person("Data Engineer", &["sql", "python"], &["spark"]),
				person("Backend Developer", &["python", "go"], &[]),
			],
			&LayoutConfig::default(),
		)
		.unwrap()
	}

	fn node<'a>(model: &'a RenderModel, layout: &GraphLayout, name: &str) -> &'a NodeView {
		let id = layout.nodes.iter().find(|n| n.name == name).unwrap().id;
		&model.nodes[id.0]
	}

	#[test]
	fn default_view_shows_only_rings() {
		let (layout, style) = (layout(), GraphStyle::default());
		let model = RenderModel::build(&layout, &Selection::default(), None, &style);
		assert_eq!(model.links.len(), layout.persistent_links.len());
		assert_eq!(model.derived_link_count(), 0);
		assert!(model.nodes.iter().all(|n| n.label_opacity == 1.0));
		assert!(model.nodes.iter().all(|n| n.border.is_none()));
		assert_eq!(node(&model, &layout, "sql").fill, style.skill_color);
		assert_eq!(node(&model, &layout, "Data Engineer").fill, style.person_color);
	}

	#[test]
	fn selection_highlights_person_and_skills() {
		let (layout, style) = (layout(), GraphStyle::default());
		let selection = Selection::person(&layout, "Data Engineer");
		let model = RenderModel::build(&layout, &selection, None, &style);

		assert_eq!(model.derived_link_count(), 3);
		assert_eq!(model.links.len(), layout.persistent_links.len() + 3);

		let engineer = node(&model, &layout, "Data Engineer");
		assert_eq!(engineer.fill, style.person_active_color);
		assert_eq!(engineer.border, Some((style.person_active_color, 4.0)));

		for skill in ["sql", "python", "spark"] {
			let view = node(&model, &layout, skill);
			assert_eq!(view.fill, style.linked_color);
			assert_eq!(view.label_opacity, 1.0);
		}
		let go = node(&model, &layout, "go");
		assert_eq!(go.fill, style.skill_color);
		assert_eq!(go.label_opacity, style.dimmed_label_opacity);

		let other = node(&model, &layout, "Backend Developer");
		assert_eq!(other.fill, style.person_color);
		assert_eq!(other.label_opacity, 1.0);
		assert!(other.border.is_none());
	}

	#[test]
	fn derived_links_are_colored_by_kind() {
		let (layout, style) = (layout(), GraphStyle::default());
		let model = RenderModel::build(
			&layout,
			&Selection::person(&layout, "Data Engineer"),
			None,
			&style,
		);
		let derived: Vec<_> = model.links.iter().filter(|l| !l.persistent).collect();
		let primary = derived
			.iter()
			.filter(|l| l.color == style.primary_link_color)
			.count();
		assert_eq!(primary, 2);
		assert_eq!(derived.len() - primary, 1);
		assert!(derived.iter().all(|l| l.curveness == style.derived_curveness));
	}

	#[test]
	fn hover_uses_emphasis_colors() {
		let (layout, style) = (layout(), GraphStyle::default());
		let skill = layout.skills()[0].id;
		let model = RenderModel::build(&layout, &Selection::default(), Some(skill), &style);
		assert_eq!(model.nodes[skill.0].fill, style.skill_hover_color);

		let person = layout.persons()[1].id;
		let model = RenderModel::build(&layout, &Selection::default(), Some(person), &style);
		assert_eq!(model.nodes[person.0].fill, style.person_hover_color);
	}

	#[test]
	fn person_labels_break_on_spaces() {
		let (layout, style) = (layout(), GraphStyle::default());
		let model = RenderModel::build(&layout, &Selection::default(), None, &style);
		assert_eq!(node(&model, &layout, "Data Engineer").label_lines, ["Data", "Engineer"]);
		assert_eq!(node(&model, &layout, "python").label_lines, ["python"]);
	}

	#[test]
	fn selection_follows_person_across_rebuilds() {
		let style = GraphStyle::default();
		let config = LayoutConfig::default();
		let before = GraphLayout::build(
			vec![person("A", &["x"], &[]), person("B", &["y"], &[])],
			&config,
		)
		.unwrap();
		let selection = Selection::person(&before, "A");

		let after = GraphLayout::build(
			vec![person("B", &["y"], &[]), person("A", &["x"], &[])],
			&config,
		)
		.unwrap();
		let model = RenderModel::build(&after, &selection, None, &style);

		let derived: Vec<_> = model.links.iter().filter(|l| !l.persistent).collect();
		assert_eq!(derived.len(), 1);
		let a = after.persons().iter().find(|n| n.name == "A").unwrap();
		let x = after.skills().iter().find(|n| n.name == "x").unwrap();
		assert_eq!((derived[0].from, derived[0].to), (a.position, x.position));

		assert!(node(&model, &after, "A").border.is_some());
		assert!(node(&model, &after, "B").border.is_none());
		assert_eq!(node(&model, &after, "x").label_opacity, 1.0);
		assert_eq!(node(&model, &after, "y").label_opacity, style.dimmed_label_opacity);
		assert_eq!(node(&model, &after, "x").fill, style.linked_color);
	}

	#[test]
	fn selection_of_removed_person_highlights_nothing() {
		let style = GraphStyle::default();
		let before = layout();
		let selection = Selection::person(&before, "Data Engineer");
		let after = GraphLayout::build(
			vec![person("Backend Developer", &["python", "go"], &[])],
			&LayoutConfig::default(),
		)
		.unwrap();
		let model = RenderModel::build(&after, &selection, None, &style);
		assert_eq!(model.derived_link_count(), 0);
		assert!(model.nodes.iter().all(|n| n.border.is_none() && n.label_opacity == 1.0));
	}

	#[test]
	fn ring_links_keep_their_curvature() {
		let (layout, style) = (layout(), GraphStyle::default());
		let model = RenderModel::build(&layout, &Selection::default(), None, &style);
		let persons = layout.persons().len();
		assert!(model.links[..persons]
			.iter()
			.all(|l| l.curveness == style.person_ring_curveness && l.persistent));
		assert!(model.links[persons..]
			.iter()
			.all(|l| l.curveness == style.skill_ring_curveness && l.color == style.ring_link_color));
	}
}
