use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "StaffIt!" }
                p { class: "page-subtitle", "Manage your employee directory." }
            }
            div { class: "dashboard-grid",
                Link {
                    to: Route::TableView {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Table View" }
                    p { class: "dashboard-card-desc",
                        "Browse, search and manage employees in a table."
                    }
                }
                Link {
                    to: Route::CardView {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Card View" }
                    p { class: "dashboard-card-desc",
                        "The same directory as a grid of profile cards."
                    }
                }
            }
        }
    }
}
