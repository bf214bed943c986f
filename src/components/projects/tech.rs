//! Technology tags shown on each project card, keyed by project title.

const DEFAULT_TAGS: &[&str] = &["Python", "Machine Learning"];

/// Tags for a project title. Unknown titles get a generic pair.
pub fn tech_tags(title: &str) -> &'static [&'static str] {
	match title {
		"BC Environment NLP Pipeline" => &["Python", "BERT", "NLP", "Ollama", "ROUGE"],
		"Lay Summarisation Pipeline" => &["Python", "Transformers", "Biomedical", "Evaluation"],
		"Detoxification LLM Dataflow" => &["Python", "Data Curation", "Toxicity", "Workflow"],
		"Movie Review Corpus and UI" => &["Python", "Corpus", "Annotation", "UI", "GPT"],
		_ => DEFAULT_TAGS,
	}
}

/// Staggered CSS animation delay for the card at `index`.
pub fn animation_delay(index: usize) -> String {
	format!("{:.1}s", index as f64 * 0.1)
}
