use crate::shared::api_utils::api_base;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum StoreStatus {
    Online,
    Offline,
    Checking,
}

impl StoreStatus {
    fn display_text(&self) -> &'static str {
        match self {
            StoreStatus::Online => "Store: Online",
            StoreStatus::Offline => "Store: Offline",
            StoreStatus::Checking => "Store: Checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            StoreStatus::Online => "status-online",
            StoreStatus::Offline => "status-offline",
            StoreStatus::Checking => "status-checking",
        }
    }
}

async fn ping_store() -> bool {
    match gloo_net::http::Request::get(&api_base()).send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(StoreStatus::Checking);

    let check_store = move || {
        status.set(StoreStatus::Checking);

        spawn_local(async move {
            let reachable = ping_store().await;
            status.set(if reachable {
                StoreStatus::Online
            } else {
                StoreStatus::Offline
            });
        });
    };

    // One reachability probe at mount
    Effect::new(move |_| {
        check_store();
    });

    view! {
        <footer class="status-bar">
            <span class="status-bar__brand">"E-Admin Product Catalog Dashboard"</span>
            <span class=move || status.get().css_class()>
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}
