//! Typewriter effect for the hero code block.

use serde::Deserialize;
use web_sys::Element;

use crate::dom;

const CURSOR: char = '|';

const SAMPLE_CODE: &str = r#"import torch
from transformers import pipeline

class NLPProcessor:
    def __init__(self):
        self.classifier = pipeline(
            "text-classification",
            model="bert-base-uncased"
        )
    
    def process_document(self, text):
        # Extract key information
        entities = self.extract_entities(text)
        sentiment = self.analyze_sentiment(text)
        
        return {
            "entities": entities,
            "sentiment": sentiment,
            "confidence": 0.95
        }
    
    def extract_entities(self, text):
        # Named entity recognition
        return self.classifier(text)
    
    def analyze_sentiment(self, text):
        # Sentiment analysis
        return self.classifier(text)

# Initialize processor
processor = NLPProcessor()
result = processor.process_document("Sample text")
print("Processing complete!")"#;

/// Typewriter timing and content.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
	/// Id of the element receiving the text
	pub target: String,
	/// Text typed out.
	pub text: String,
	/// Pause before the first character.
	pub start_delay_ms: i32,
	/// Pause between characters.
	pub char_delay_ms: i32,
	/// Cursor blink period once typing finishes
	pub blink_ms: i32,
}

impl Default for TypingConfig {
	fn default() -> Self {
		Self {
			target: "typing-code".to_string(),
			text: SAMPLE_CODE.to_string(),
			start_delay_ms: 1000,
			char_delay_ms: 50,
			blink_ms: 500,
		}
	}
}

/// Yields the text one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
	chars: Vec<char>,
	index: usize,
}

impl Typewriter {
	/// Start at the beginning of `text`.
	pub fn new(text: &str) -> Self {
		Self {
			chars: text.chars().collect(),
			index: 0,
		}
	}

	/// Advance by one character.
	pub fn next_char(&mut self) -> Option<char> {
		let c = self.chars.get(self.index).copied()?;
		self.index += 1;
		Some(c)
	}

	/// Whether every character has been emitted.
	pub fn is_done(&self) -> bool {
		self.index >= self.chars.len()
	}
}

/// Add the trailing cursor if absent, drop it if present.
pub fn toggle_cursor(text: &str) -> String {
	match text.strip_suffix(CURSOR) {
		Some(rest) => rest.to_string(),
		None => format!("{text}{CURSOR}"),
	}
}

/// Start typing into the configured element, if it exists.
pub fn init(config: &TypingConfig) {
	let Some(el) = dom::by_id::<Element>(&config.target) else {
		return;
	};
	let writer = Typewriter::new(&config.text);
	let config = config.clone();
	dom::set_timeout(config.start_delay_ms, move || type_next(el, writer, config));
}

fn type_next(el: Element, mut writer: Typewriter, config: TypingConfig) {
	match writer.next_char() {
		Some(c) => {
			let mut text = el.text_content().unwrap_or_default();
			text.push(c);
			el.set_text_content(Some(&text));
			dom::set_timeout(config.char_delay_ms, move || type_next(el, writer, config));
		}
		None => {
			dom::set_interval(config.blink_ms, move || {
				let text = el.text_content().unwrap_or_default();
				el.set_text_content(Some(&toggle_cursor(&text)));
			});
		}
	}
}
