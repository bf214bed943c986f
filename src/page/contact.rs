//! Contact form submission and toast notifications.

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, FormData, Headers, HtmlButtonElement, HtmlElement, HtmlFormElement, RequestInit, Response};

use crate::dom;

const SENDING_HTML: &str = r#"<span>Sending...</span>
<svg class="btn-icon animate-spin" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
	<path d="M21 12a9 9 0 11-6.219-8.56"/>
</svg>"#;

const NOTIFY_SHOW_DELAY_MS: i32 = 100;
const NOTIFY_LIFETIME_MS: i32 = 5000;
const NOTIFY_SLIDE_MS: i32 = 300;

/// Notification flavor, picking class suffix and background color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
	/// Message sent.
	Success,
	/// Something went wrong.
	Error,
	/// Neutral notice.
	Info,
}

impl NotificationKind {
	/// Class suffix, e.g. `notification-success`.
	pub fn name(self) -> &'static str {
		match self {
			NotificationKind::Success => "success",
			NotificationKind::Error => "error",
			NotificationKind::Info => "info",
		}
	}

	/// Banner background color.
	pub fn background(self) -> &'static str {
		match self {
			NotificationKind::Success => "#10b981",
			NotificationKind::Error => "#ef4444",
			NotificationKind::Info => "#6366f1",
		}
	}

	/// Inline style for the banner, starting off-screen to the right.
	pub fn css(self) -> String {
		format!(
			"position: fixed; top: 20px; right: 20px; background: {}; color: white; \
			 padding: 1rem 1.5rem; border-radius: 0.5rem; \
			 box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); z-index: 10000; \
			 transform: translateX(100%); transition: transform 0.3s ease;",
			self.background()
		)
	}
}

/// Show a banner that slides in, closes on click and dismisses itself after
/// a few seconds.
pub fn notify(message: &str, kind: NotificationKind) {
	if build_notification(message, kind).is_none() {
		warn!("portfolio: could not show notification: {message}");
	}
}

fn build_notification(message: &str, kind: NotificationKind) -> Option<()> {
	let document = dom::document()?;
	let body = document.body()?;

	let banner: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
	banner.set_class_name(&format!("notification notification-{}", kind.name()));
	banner.style().set_css_text(&kind.css());

	let content = document.create_element("div").ok()?;
	content.set_class_name("notification-content");
	let text = document.create_element("span").ok()?;
	text.set_class_name("notification-message");
	text.set_text_content(Some(message));
	let close: Element = document.create_element("button").ok()?;
	close.set_class_name("notification-close");
	close.set_text_content(Some("\u{00d7}"));

	content.append_child(&text).ok()?;
	content.append_child(&close).ok()?;
	banner.append_child(&content).ok()?;
	body.append_child(&banner).ok()?;

	let b = banner.clone();
	dom::set_timeout(NOTIFY_SHOW_DELAY_MS, move || dom::set_style(&b, "transform", "translateX(0)"));

	let b = banner.clone();
	dom::listen(&close, "click", move |_| dismiss(b.clone()));

	dom::set_timeout(NOTIFY_LIFETIME_MS, move || {
		if banner.is_connected() {
			dismiss(banner);
		}
	});
	Some(())
}

fn dismiss(banner: HtmlElement) {
	dom::set_style(&banner, "transform", "translateX(100%)");
	dom::set_timeout(NOTIFY_SLIDE_MS, move || banner.remove());
}

/// Intercept `.contact-form` submits and post them in the background.
pub fn init_contact_form() {
	let Some(form) = dom::query::<HtmlFormElement>(".contact-form") else {
		return;
	};
	let f = form.clone();
	dom::listen(&form, "submit", move |ev| {
		ev.prevent_default();
		wasm_bindgen_futures::spawn_local(submit(f.clone()));
	});
}

async fn submit(form: HtmlFormElement) {
	let button = form
		.query_selector("button[type=\"submit\"]")
		.ok()
		.flatten()
		.and_then(|b| b.dyn_into::<HtmlButtonElement>().ok());
	let label = button.as_ref().map(|b| b.inner_html());
	if let Some(b) = &button {
		b.set_inner_html(SENDING_HTML);
		b.set_disabled(true);
	}

	match post_form(&form).await {
		Ok(()) => {
			info!("portfolio: contact form sent");
			notify("Message sent successfully!", NotificationKind::Success);
			form.reset();
		}
		Err(e) => {
			warn!("portfolio: contact form failed: {:?}", e);
			notify("Failed to send message. Please try again.", NotificationKind::Error);
		}
	}

	if let (Some(b), Some(html)) = (&button, label) {
		b.set_inner_html(&html);
		b.set_disabled(false);
	}
}

async fn post_form(form: &HtmlFormElement) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let body = FormData::new_with_form(form)?;
	let headers = Headers::new()?;
	headers.set("Accept", "application/json")?;

	let init = RequestInit::new();
	init.set_method("POST");
	init.set_body(&body);
	init.set_headers(&headers);

	let response: Response = JsFuture::from(window.fetch_with_str_and_init(&form.action(), &init))
		.await?
		.dyn_into()?;
	if response.ok() {
		Ok(())
	} else {
		Err(JsValue::from_str(&format!("HTTP {}", response.status())))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_kind_colors() {
		assert_eq!(NotificationKind::Success.background(), "#10b981");
		assert_eq!(NotificationKind::Error.background(), "#ef4444");
		assert_eq!(NotificationKind::Info.background(), "#6366f1");
	}

	#[test]
	fn test_css_starts_offscreen() {
		let css = NotificationKind::Error.css();
		assert!(css.contains("background: #ef4444;"));
		assert!(css.contains("transform: translateX(100%)"));
		assert!(css.contains("position: fixed"));
	}
}
