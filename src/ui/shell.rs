use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{AppState, CatalogFilter};
use crate::ui::theme;
use crate::util::version;

/// Chrome around every page: brand header, catalog filter nav, version
/// label.
#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let filter = state.with(|s| s.filter);
    let nav = use_navigator();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 px-6 py-4 backdrop-blur",
                div { class: "mx-auto grid max-w-6xl grid-cols-[1fr_auto_1fr] items-center gap-4",
                    div {
                        h1 { class: "text-xl font-semibold tracking-tight", "{version::APP_NAME}" }
                        p { class: "text-xs italic {theme::text_muted()}", "fresh kicks, honest prices" }
                    }
                    nav { class: "flex justify-center gap-1",
                        for entry in [
                            CatalogFilter::All,
                            CatalogFilter::OnSale,
                            CatalogFilter::NewReleases,
                        ] {
                            FilterButton {
                                active: filter == entry,
                                label: entry.label(),
                                onclick: {
                                    let mut state = state;
                                    move |_| {
                                        state.with_mut(|s| s.filter = entry);
                                        nav.push(Route::Catalog {});
                                    }
                                },
                            }
                        }
                    }
                    p { class: "justify-self-end text-xs {theme::text_muted()}",
                        "{version::version_label()}"
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn FilterButton(active: bool, label: &'static str, onclick: EventHandler<()>) -> Element {
    let class = if active {
        theme::filter_btn_active()
    } else {
        theme::filter_btn_inactive()
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
