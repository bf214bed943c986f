//! Leptos component rendering the project grid from a JSON resource.

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, Response};

use super::tech::{animation_delay, tech_tags};
use super::types::Project;
use crate::dom;

const EXTERNAL_ICON: &str = "M10 6H6a2 2 0 0 0-2 2v10a2 2 0 0 0 2 2h10a2 2 0 0 0 2-2v-4M14 4h6m0 0v6m0-6L10 14";

/// Decode a project list response; anything but a successful JSON array is
/// an error.
fn decode_projects(status: u16, ok: bool, body: &str) -> Result<Vec<Project>, String> {
	if !ok {
		return Err(format!("HTTP {status}"));
	}
	serde_json::from_str(body).map_err(|e| e.to_string())
}

/// Fetch and decode the project list.
async fn fetch_projects(url: &str) -> Result<Vec<Project>, JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let response: Response = JsFuture::from(window.fetch_with_str(url)).await?.dyn_into()?;
	let body = JsFuture::from(response.text()?).await?;
	let body = body
		.as_string()
		.ok_or_else(|| JsValue::from_str("response body is not text"))?;
	decode_projects(response.status(), response.ok(), &body).map_err(|e| JsValue::from_str(&e))
}

/// Renders one card per project.
#[component]
pub fn ProjectGrid(projects: Vec<Project>) -> impl IntoView {
	projects
		.into_iter()
		.enumerate()
		.map(|(index, project)| view! { <ProjectCard project=project index=index /> })
		.collect_view()
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
	let tags = tech_tags(&project.title);

	view! {
		<article
			class="project-card"
			data-aos="fade-up"
			style=format!("animation-delay: {}", animation_delay(index))
		>
			<div class="project-header">
				<h3 class="project-title">{project.title}</h3>
			</div>
			<p class="project-description">{project.desc}</p>
			<div class="project-tech">
				{tags.iter().map(|tag| view! { <span class="tech-tag">{*tag}</span> }).collect_view()}
			</div>
			<div class="project-links">
				{project
					.links
					.into_iter()
					.map(|link| {
						view! {
							<a href=link.href target="_blank" rel="noopener" class="btn btn-outline">
								{link.label}
								<svg
									class="btn-icon"
									viewBox="0 0 24 24"
									fill="none"
									stroke="currentColor"
									stroke-width="2"
								>
									<path d=EXTERNAL_ICON />
								</svg>
							</a>
						}
					})
					.collect_view()}
			</div>
		</article>
	}
}

/// Load projects from `url` and replace the contents of `#container_id` with
/// the grid.
///
/// The existing markup is only swapped out once the list has been fetched and
/// decoded; on failure the error is logged and the container is left as is.
pub fn mount(container_id: &str, url: String) {
	let Some(container) = dom::by_id::<HtmlElement>(container_id) else {
		debug!("portfolio: no #{container_id} element, project grid skipped");
		return;
	};
	wasm_bindgen_futures::spawn_local(async move {
		match fetch_projects(&url).await {
			Ok(projects) => {
				info!("portfolio: loaded {} projects", projects.len());
				container.set_inner_html("");
				leptos::mount::mount_to(container, move || view! { <ProjectGrid projects=projects /> }).forget();
			}
			Err(e) => warn!("portfolio: failed to load projects from {}: {:?}", url, e),
		}
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_decode_rejects_http_error() {
		assert_eq!(decode_projects(404, false, "Not Found"), Err("HTTP 404".to_string()));
	}

	#[test]
	fn test_decode_rejects_malformed_body() {
		assert!(decode_projects(200, true, "<html>").is_err());
		assert!(decode_projects(200, true, r#"{"title": "x"}"#).is_err());
	}

	#[test]
	fn test_decode_accepts_list() {
		let projects = decode_projects(200, true, r#"[{"title": "A", "desc": "B"}]"#).unwrap();
		assert_eq!(projects.len(), 1);
		assert_eq!(projects[0].title, "A");
		assert!(projects[0].links.is_empty());
	}
}
