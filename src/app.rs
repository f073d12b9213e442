use dioxus::prelude::*;

use crate::{
    domain::AppState,
    infra::catalog::load_catalog,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CatalogPage, ShoeDetailPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Catalog {},
    #[route("/shoe/:slug")]
    Shoe { slug: String },
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    let toasts = use_signal(Vec::<ToastMessage>::new);

    use_hook({
        let mut state = state.clone();
        let toasts = toasts.clone();
        move || match load_catalog() {
            Ok(listings) => {
                tracing::info!(count = listings.len(), "catalog loaded");
                state.with_mut(|st| st.listings = listings);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load catalog");
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Failed to load the catalog: {err}"),
                );
            }
        }
    });

    use_context_provider(|| state.clone());
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Catalog() -> Element {
    rsx! { Shell { CatalogPage {} } }
}

#[component]
pub fn Shoe(slug: String) -> Element {
    rsx! { Shell { ShoeDetailPage { slug } } }
}
