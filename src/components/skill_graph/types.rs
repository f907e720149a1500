use serde::Deserialize;

/// One record of the input dataset.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
	pub name: String,
	pub main_skills: Vec<String>,
	#[serde(default)]
	pub other_skills: Vec<String>,
}

impl Person {
	/// Primary skills followed by secondary skills, in dataset order.
	pub fn all_skills(&self) -> impl Iterator<Item = &str> {
		self.main_skills
			.iter()
			.chain(self.other_skills.iter())
			.map(String::as_str)
	}
}

/// Index of a node within a [`GraphLayout`](super::GraphLayout).
///
/// Persons occupy `0..persons`, skills follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	Person,
	Skill,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Point at `radius` along `angle` (radians) from the origin.
	pub fn polar(radius: f64, angle: f64) -> Self {
		Self::new(radius * angle.cos(), radius * angle.sin())
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

impl std::ops::Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl std::ops::Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

/// A person or skill placed on its ring.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: NodeId,
	pub name: String,
	pub category: Category,
	pub position: Point,
	/// Label anchor relative to `position`, in screen pixels.
	pub label_offset: Point,
	/// Ring angle in degrees.
	pub degree: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkKind {
	/// Person to one of its main skills.
	Primary,
	/// Person to one of its other skills.
	Secondary,
	/// Edge of the person ring.
	PersonRing,
	/// Edge of the skill ring.
	SkillRing,
}

impl LinkKind {
	/// Ring edges are drawn regardless of selection.
	pub fn is_persistent(self) -> bool {
		matches!(self, LinkKind::PersonRing | LinkKind::SkillRing)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GraphLink {
	pub source: NodeId,
	pub target: NodeId,
	pub kind: LinkKind,
}

impl GraphLink {
	pub fn touches(&self, id: NodeId) -> bool {
		self.source == id || self.target == id
	}
}
