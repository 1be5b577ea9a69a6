use dioxus::prelude::*;
use types::{Employee, filter_employees};

use crate::store::use_employee_store;
use crate::use_banner;
use crate::views::components::{Avatar, DeleteConfirmModal, EmployeeFormModal, ViewEmployeeModal};

#[component]
pub fn TableView() -> Element {
    let store = use_employee_store();
    let mut query = use_signal(String::new);
    let mut show_form = use_signal(|| false);
    let mut show_view = use_signal(|| false);
    let mut selected = use_signal(|| None::<Employee>);
    let mut pending_delete = use_signal(|| None::<Employee>);
    let mut deleting = use_signal(|| false);
    let mut banner = use_banner();

    let records = store.records();
    let filtered = use_memo(move || filter_employees(&records.read(), &query.read()));

    let confirm_delete = move |_| {
        let Some(employee) = pending_delete.read().clone() else {
            return;
        };
        spawn(async move {
            deleting.set(true);
            match api::delete_employee(employee.id.clone()).await {
                Ok(()) => {
                    store.remove(&employee.id);
                    store.reload();
                    banner.set_success("Employee deleted.");
                }
                Err(error) => banner.set_server_error(&error),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Table View" }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            selected.set(None);
                            show_form.set(true);
                        },
                        "Add Employee"
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Employees" }
                    input {
                        r#type: "search",
                        class: "form-input search-input",
                        placeholder: "Search by name or email",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                    }
                }
                if store.is_loading() {
                    div { class: "loading", "Loading employees..." }
                } else if filtered().is_empty() {
                    div { class: "empty-state", "No data available." }
                } else {
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Designation" }
                                    th { "Contact" }
                                    th { "Address" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for employee in filtered() {
                                    {
                                        let view_target = employee.clone();
                                        let edit_target = employee.clone();
                                        let delete_target = employee.clone();

                                        rsx! {
                                            tr { key: "{employee.id}",
                                                td {
                                                    div { class: "cell-with-avatar",
                                                        Avatar {
                                                            name: employee.name.clone(),
                                                            image: employee.image.clone(),
                                                        }
                                                        span { "{employee.name}" }
                                                    }
                                                }
                                                td { "{employee.email}" }
                                                td {
                                                    span { class: "designation-tag", "{employee.designation}" }
                                                }
                                                td { "{employee.phone}" }
                                                td { "{employee.address}" }
                                                td { class: "actions",
                                                    button {
                                                        class: "btn btn-link",
                                                        onclick: move |_| {
                                                            selected.set(Some(view_target.clone()));
                                                            show_view.set(true);
                                                        },
                                                        "View"
                                                    }
                                                    button {
                                                        class: "btn btn-link",
                                                        onclick: move |_| {
                                                            selected.set(Some(edit_target.clone()));
                                                            show_form.set(true);
                                                        },
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "btn btn-link btn-link-danger",
                                                        onclick: move |_| {
                                                            pending_delete.set(Some(delete_target.clone()));
                                                        },
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if *show_form.read() {
                EmployeeFormModal {
                    selected: selected.read().clone(),
                    on_close: move |_| {
                        show_form.set(false);
                        selected.set(None);
                    },
                    on_saved: move |_| {
                        show_form.set(false);
                        selected.set(None);
                        store.reload();
                    },
                }
            }

            if *show_view.read() {
                if let Some(employee) = selected.read().clone() {
                    ViewEmployeeModal {
                        employee,
                        on_close: move |_| {
                            show_view.set(false);
                            selected.set(None);
                        },
                    }
                }
            }

            if let Some(employee) = pending_delete.read().clone() {
                DeleteConfirmModal {
                    employee_name: employee.name.clone(),
                    deleting: *deleting.read(),
                    on_close: move |_| pending_delete.set(None),
                    on_confirm: confirm_delete,
                }
            }
        }
    }
}
