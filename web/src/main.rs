use dioxus::prelude::*;

mod store;
mod views;

use views::{CardView, Home, TableView};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/table-view")]
        TableView {},
        #[route("/card-view")]
        CardView {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            server::init().await?;

            Ok(dioxus::server::router(App))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "StaffIt!" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

/// One dismissable notification at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum Banner {
    Error(String),
    Success(String),
}

/// Global banner state - use `use_banner()` to access
#[derive(Clone, Copy)]
pub struct BannerState(Signal<Option<Banner>>);

impl BannerState {
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.0.set(Some(Banner::Error(message.into())));
    }

    pub fn set_server_error(&mut self, error: &ServerFnError) {
        let message = match error {
            ServerFnError::ServerError { message, .. } => message.clone(),
            other => other.to_string(),
        };
        self.0.set(Some(Banner::Error(message)));
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.0.set(Some(Banner::Success(message.into())));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the banner state for raising/clearing notifications
pub fn use_banner() -> BannerState {
    use_context::<BannerState>()
}

#[component]
fn StatusBanner() -> Element {
    let mut banner_state = use_context::<BannerState>();
    let banner = banner_state.0.read().clone();

    if let Some(banner) = banner {
        let (class, message) = match banner {
            Banner::Error(message) => ("banner banner-error", message),
            Banner::Success(message) => ("banner banner-success", message),
        };

        rsx! {
            div { class: "{class}",
                span { class: "banner-message", "{message}" }
                button {
                    class: "banner-close",
                    onclick: move |_| banner_state.clear(),
                    "×"
                }
            }
        }
    } else {
        rsx! {}
    }
}

#[component]
fn AppLayout() -> Element {
    use_context_provider(|| BannerState(Signal::new(None)));

    rsx! {
        div { class: "app-layout",
            // Sidebar
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "StaffIt!" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Home {}, "Home" }
                    NavLink { to: Route::TableView {}, "Table View" }
                    NavLink { to: Route::CardView {}, "Card View" }
                }
            }
            // Main content
            main { class: "main-content",
                StatusBanner {}
                Outlet::<Route> {}
            }
        }
    }
}
