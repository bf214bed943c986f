//! Project list records as served by `projects.json`.

use serde::Deserialize;

/// An outbound link shown on a project card.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProjectLink {
	/// Link target.
	pub href: String,
	/// Button text.
	pub label: String,
}

/// A single project entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
	/// Card heading; also keys the tech tag lookup.
	pub title: String,
	/// Short description paragraph.
	pub desc: String,
	/// External links, possibly none.
	#[serde(default)]
	pub links: Vec<ProjectLink>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_project_list() {
		let json = r#"[
			{
				"title": "Lay Summarisation Pipeline",
				"desc": "Summaries for non-experts.",
				"links": [{ "href": "https://example.org/repo", "label": "Code" }]
			},
			{ "title": "Untitled", "desc": "No links yet." }
		]"#;

		let projects: Vec<Project> = serde_json::from_str(json).unwrap();
		assert_eq!(projects.len(), 2);
		assert_eq!(projects[0].links[0].label, "Code");
		assert!(projects[1].links.is_empty());
	}

	#[test]
	fn test_missing_title_rejected() {
		let json = r#"[{ "desc": "orphan" }]"#;
		assert!(serde_json::from_str::<Vec<Project>>(json).is_err());
	}
}
