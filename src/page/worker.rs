//! Service worker registration with eager activation of updates.
//!
//! A freshly installed worker is told to skip waiting, and the page reloads
//! once the new worker takes control.

use js_sys::{Object, Reflect};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{ServiceWorker, ServiceWorkerContainer, ServiceWorkerRegistration, ServiceWorkerState};

use crate::dom;

/// Message asking a waiting worker to activate immediately.
pub const SKIP_WAITING: &str = "SKIP_WAITING";

fn skip_waiting_message() -> JsValue {
	let msg = Object::new();
	let _ = Reflect::set(&msg, &JsValue::from_str("type"), &JsValue::from_str(SKIP_WAITING));
	msg.into()
}

fn skip_waiting(worker: &ServiceWorker) {
	let _ = worker.post_message(&skip_waiting_message());
}

/// Register `script_url` once the page has loaded, if the browser supports
/// service workers.
pub fn init(script_url: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let navigator = window.navigator();
	if !Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false) {
		debug!("portfolio: service workers unsupported");
		return;
	}

	let script_url = script_url.to_string();
	dom::listen(&window, "load", move |_| {
		let container = navigator.service_worker();
		wasm_bindgen_futures::spawn_local(register(container.clone(), script_url.clone()));

		dom::listen(&container, "controllerchange", |_| {
			if let Some(window) = web_sys::window() {
				let _ = window.location().reload();
			}
		});
	});
}

async fn register(container: ServiceWorkerContainer, script_url: String) {
	let registration = match JsFuture::from(container.register(&script_url)).await {
		Ok(reg) => reg.unchecked_into::<ServiceWorkerRegistration>(),
		Err(e) => {
			warn!("portfolio: service worker registration failed: {:?}", e);
			return;
		}
	};
	debug!("portfolio: service worker registered from {}", script_url);

	if let Ok(update) = registration.update() {
		wasm_bindgen_futures::spawn_local(async move {
			let _ = JsFuture::from(update).await;
		});
	}

	if let Some(waiting) = registration.waiting() {
		skip_waiting(&waiting);
	}

	let reg = registration.clone();
	dom::listen(&registration, "updatefound", move |_| {
		let Some(installing) = reg.installing() else {
			return;
		};
		let (worker, container) = (installing.clone(), container.clone());
		dom::listen(&installing, "statechange", move |_| {
			if worker.state() == ServiceWorkerState::Installed && container.controller().is_some() {
				skip_waiting(&worker);
			}
		});
	});
}

