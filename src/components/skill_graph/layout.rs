use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use log::debug;

use super::config::LayoutConfig;
use super::error::GraphError;
use super::similarity::sort_by_similar_skills;
use super::types::{Category, GraphLink, GraphNode, LinkKind, NodeId, Person, Point};

/// People and skills placed on two concentric rings, plus every link between them.
///
/// Built from scratch whenever the dataset changes; nothing here is mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLayout {
	pub nodes: Vec<GraphNode>,
	/// Person to skill edges, shown only for the selected person.
	pub derived_links: Vec<GraphLink>,
	/// Ring edges, always shown.
	pub persistent_links: Vec<GraphLink>,
	person_count: usize,
}

impl GraphLayout {
	pub fn build(people: Vec<Person>, config: &LayoutConfig) -> Result<Self, GraphError> {
		validate(&people)?;
		let people = sort_by_similar_skills(people);
		let skills = unique_skills(&people);
		let (person_count, skill_count) = (people.len(), skills.len());

		let mut nodes = Vec::with_capacity(person_count + skill_count);
		for (i, person) in people.iter().enumerate() {
			nodes.push(place(
				NodeId(i),
				&person.name,
				Category::Person,
				ring_angle(i, person_count),
				config.person_radius,
				config.person_label_margin,
				config.center,
			));
		}
		for (j, skill) in skills.iter().enumerate() {
			nodes.push(place(
				NodeId(person_count + j),
				skill,
				Category::Skill,
				ring_angle(j, skill_count),
				config.skill_radius,
				config.skill_label_margin,
				config.center,
			));
		}

		let skill_ids: HashMap<&str, NodeId> = skills
			.iter()
			.enumerate()
			.map(|(j, skill)| (*skill, NodeId(person_count + j)))
			.collect();

		let mut derived_links = Vec::new();
		for (i, person) in people.iter().enumerate() {
			let kinds = person
				.main_skills
				.iter()
				.map(|s| (s, LinkKind::Primary))
				.chain(person.other_skills.iter().map(|s| (s, LinkKind::Secondary)));
			for (skill, kind) in kinds {
				// Defensive: `skill_ids` comes from the same lists, so this never fails today.
				let Some(&target) = skill_ids.get(skill.as_str()) else {
					return Err(GraphError::UnknownSkill {
						person: person.name.clone(),
						skill: skill.clone(),
					});
				};
				derived_links.push(GraphLink {
					source: NodeId(i),
					target,
					kind,
				});
			}
		}

		let mut persistent_links = ring_links(0, person_count, LinkKind::PersonRing);
		persistent_links.extend(ring_links(person_count, skill_count, LinkKind::SkillRing));

		debug!(
			"laid out {} people, {} skills, {} derived links",
			person_count,
			skill_count,
			derived_links.len()
		);

		Ok(Self {
			nodes,
			derived_links,
			persistent_links,
			person_count,
		})
	}

	pub fn persons(&self) -> &[GraphNode] {
		&self.nodes[..self.person_count]
	}

	pub fn skills(&self) -> &[GraphNode] {
		&self.nodes[self.person_count..]
	}

	pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
		self.nodes.get(id.0)
	}

	pub fn person_id(&self, name: &str) -> Option<NodeId> {
		self.persons().iter().find(|n| n.name == name).map(|n| n.id)
	}

	/// Closest node whose center lies within `radius` of `point`.
	pub fn node_at(&self, point: Point, radius: f64) -> Option<&GraphNode> {
		self.nodes
			.iter()
			.map(|node| (node.position.distance(point), node))
			.filter(|(dist, _)| *dist < radius)
			.min_by(|a, b| a.0.total_cmp(&b.0))
			.map(|(_, node)| node)
	}

	/// Bounding box of node centers and label anchors, as (min, max).
	///
	/// Label offsets are counted as graph units.
	pub fn bounds(&self) -> Option<(Point, Point)> {
		let mut points = self
			.nodes
			.iter()
			.flat_map(|n| [n.position, n.position + n.label_offset]);
		let first = points.next()?;
		Some(points.fold((first, first), |(min, max), p| {
			(
				Point::new(min.x.min(p.x), min.y.min(p.y)),
				Point::new(max.x.max(p.x), max.y.max(p.y)),
			)
		}))
	}
}

fn validate(people: &[Person]) -> Result<(), GraphError> {
	let mut seen = HashSet::new();
	for (index, person) in people.iter().enumerate() {
		if person.name.trim().is_empty() {
			return Err(GraphError::EmptyName { index });
		}
		if !seen.insert(person.name.as_str()) {
			return Err(GraphError::DuplicatePerson(person.name.clone()));
		}
		if person.all_skills().any(|s| s.trim().is_empty()) {
			return Err(GraphError::EmptySkill {
				person: person.name.clone(),
			});
		}
	}
	Ok(())
}

/// Main and other skills of everyone, deduplicated in first-seen order.
pub fn unique_skills(people: &[Person]) -> Vec<&str> {
	let mut seen = HashSet::new();
	people
		.iter()
		.flat_map(Person::all_skills)
		.filter(|skill| seen.insert(*skill))
		.collect()
}

fn ring_angle(index: usize, count: usize) -> f64 {
	index as f64 * 2.0 * PI / count as f64
}

fn place(
	id: NodeId,
	name: &str,
	category: Category,
	angle: f64,
	radius: f64,
	label_margin: f64,
	center: Point,
) -> GraphNode {
	let on_ring = Point::polar(radius, angle);
	GraphNode {
		id,
		name: name.to_string(),
		category,
		position: on_ring + center,
		label_offset: Point::polar(radius + label_margin, angle) - on_ring,
		degree: angle.to_degrees(),
	}
}

/// Closed cycle `start -> start+1 -> ... -> start` over `count` nodes.
fn ring_links(start: usize, count: usize, kind: LinkKind) -> Vec<GraphLink> {
	(0..count)
		.map(|i| GraphLink {
			source: NodeId(start + i),
			target: NodeId(start + (i + 1) % count),
			kind,
		})
		.collect()
}
