//! Orders people so that those sharing main skills tend to sit close on the ring.

use super::types::Person;

/// Number of entries in `a` that also appear in `b`.
pub fn shared_skills(a: &[String], b: &[String]) -> usize {
	a.iter().filter(|skill| b.contains(skill)).count()
}

/// Per-person sum of main skills shared with every other person.
pub fn similarity_scores(people: &[Person]) -> Vec<usize> {
	people
		.iter()
		.enumerate()
		.map(|(i, person)| {
			people
				.iter()
				.enumerate()
				.filter(|&(j, _)| j != i)
				.map(|(_, other)| shared_skills(&person.main_skills, &other.main_skills))
				.sum()
		})
		.collect()
}

/// Sorts by descending similarity score. Equal scores keep dataset order.
pub fn sort_by_similar_skills(people: Vec<Person>) -> Vec<Person> {
	let scores = similarity_scores(&people);
	let mut scored: Vec<(usize, Person)> = scores.into_iter().zip(people).collect();
	scored.sort_by(|a, b| b.0.cmp(&a.0));
	scored.into_iter().map(|(_, person)| person).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn person(name: &str, main: &[&str]) -> Person {
		Person {
			name: name.into(),
			main_skills: main.iter().map(|s| s.to_string()).collect(),
			other_skills: Vec::new(),
		}
	}

	fn names(people: &[Person]) -> Vec<&str> {
		people.iter().map(|p| p.name.as_str()).collect()
	}

	#[test]
	fn two_people_sharing_one_skill_tie() {
		let people = vec![person("A", &["x"]), person("B", &["x", "y"])];
		assert_eq!(similarity_scores(&people), vec![1, 1]);
		assert_eq!(names(&sort_by_similar_skills(people)), ["A", "B"]);
	}

	#[test]
	fn contribution_is_symmetric() {
		let people = vec![
			person("A", &["rust", "sql", "go"]),
			person("B", &["sql", "go"]),
			person("C", &["css"]),
		];
		assert_eq!(shared_skills(&people[0].main_skills, &people[1].main_skills), 2);
		assert_eq!(shared_skills(&people[1].main_skills, &people[0].main_skills), 2);
		assert_eq!(similarity_scores(&people), vec![2, 2, 0]);
	}

	#[test]
	fn higher_scores_move_first() {
		let people = vec![
			person("loner", &["cobol"]),
			person("a", &["rust", "sql"]),
			person("b", &["rust"]),
			person("c", &["rust", "sql"]),
		];
		// loner 0, a 1+2=3, b 1+1=2, c 2+1=3
		assert_eq!(similarity_scores(&people), vec![0, 3, 2, 3]);
		assert_eq!(names(&sort_by_similar_skills(people)), ["a", "c", "b", "loner"]);
	}

	#[test]
	fn all_equal_scores_keep_order() {
		let people = vec![person("z", &["a"]), person("y", &["b"]), person("x", &["c"])];
		assert_eq!(names(&sort_by_similar_skills(people)), ["z", "y", "x"]);
	}

	#[test]
	fn only_main_skills_count() {
		let mut a = person("A", &["x"]);
		a.other_skills.push("y".into());
		let b = person("B", &["y"]);
		assert_eq!(similarity_scores(&[a, b]), vec![0, 0]);
	}

	#[test]
	fn empty_input() {
		assert!(sort_by_similar_skills(Vec::new()).is_empty());
	}
}
