use dioxus::prelude::*;
use strum::IntoEnumIterator;
use types::{
    Designation, Employee, EmployeeDraft, EmployeeInput, FieldErrors, FormMode, ImageFile,
    MAX_IMAGE_BYTES,
};

use crate::use_banner;

/// Round avatar; falls back to the first letter of the name when the
/// record has no image.
#[component]
pub fn Avatar(name: String, image: Option<String>, #[props(default)] large: bool) -> Element {
    let class = if large { "avatar avatar-lg" } else { "avatar" };

    match image {
        Some(url) => rsx! {
            img { class: "{class}", src: "{url}", alt: "{name}" }
        },
        None => {
            let initial = name
                .chars()
                .next()
                .unwrap_or('?')
                .to_uppercase()
                .to_string();

            rsx! {
                div { class: "{class} avatar-initial", "{initial}" }
            }
        }
    }
}

/// Add/edit form in a modal. Passing a record makes it an edit form;
/// nothing makes it a create form.
#[component]
pub fn EmployeeFormModal(
    selected: Option<Employee>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let mut banner = use_banner();

    let mode = if selected.is_some() {
        FormMode::Edit
    } else {
        FormMode::Create
    };
    let record_id = selected.as_ref().map(|record| record.id.clone());
    let existing_image = selected.as_ref().and_then(|record| record.image.clone());
    let initial = selected
        .as_ref()
        .map(EmployeeDraft::from_record)
        .unwrap_or_default();

    let mut draft = use_signal(move || initial);
    let mut errors = use_signal(FieldErrors::default);
    let mut preview = use_signal(move || existing_image);
    let mut saving = use_signal(|| false);

    let submit = move |_| {
        let checked = draft.read().validate(mode);
        let ok = checked.is_valid();
        errors.set(checked);
        if !ok {
            return;
        }

        let input = match EmployeeInput::try_from(draft.read().clone()) {
            Ok(input) => input,
            Err(error) => {
                banner.set_error(error.to_string());
                return;
            }
        };
        let record_id = record_id.clone();

        spawn(async move {
            saving.set(true);
            let result = match &record_id {
                Some(id) => api::update_employee(id.clone(), input)
                    .await
                    .map(|_| "Employee updated."),
                None => api::create_employee(input).await.map(|_| "Employee created."),
            };
            match result {
                Ok(message) => {
                    banner.set_success(message);
                    on_saved.call(());
                }
                Err(error) => banner.set_server_error(&error),
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title",
                        if mode == FormMode::Edit { "Edit Employee" } else { "Add Employee" }
                    }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "name", "Name" }
                        input {
                            id: "name",
                            class: "form-input",
                            r#type: "text",
                            value: "{draft.read().name}",
                            oninput: move |e| draft.with_mut(|d| d.name = e.value()),
                        }
                        if !errors.read().name.is_empty() {
                            p { class: "form-error", "{errors.read().name}" }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email" }
                        input {
                            id: "email",
                            class: "form-input",
                            r#type: "email",
                            value: "{draft.read().email}",
                            oninput: move |e| draft.with_mut(|d| d.email = e.value()),
                        }
                        if !errors.read().email.is_empty() {
                            p { class: "form-error", "{errors.read().email}" }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "phone", "Contact" }
                        input {
                            id: "phone",
                            class: "form-input",
                            r#type: "text",
                            value: "{draft.read().phone}",
                            oninput: move |e| draft.with_mut(|d| d.phone = e.value()),
                        }
                        if !errors.read().phone.is_empty() {
                            p { class: "form-error", "{errors.read().phone}" }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "designation", "Designation" }
                        select {
                            id: "designation",
                            class: "form-input",
                            value: "{draft.read().designation}",
                            onchange: move |e| draft.with_mut(|d| d.designation = e.value()),
                            option { value: "", "Select Designation" }
                            for designation in Designation::iter() {
                                option { value: "{designation}", "{designation}" }
                            }
                        }
                        if !errors.read().designation.is_empty() {
                            p { class: "form-error", "{errors.read().designation}" }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "address", "Address" }
                        input {
                            id: "address",
                            class: "form-input",
                            r#type: "text",
                            value: "{draft.read().address}",
                            oninput: move |e| draft.with_mut(|d| d.address = e.value()),
                        }
                        if !errors.read().address.is_empty() {
                            p { class: "form-error", "{errors.read().address}" }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "image", "Image" }
                        input {
                            id: "image",
                            class: "form-input",
                            r#type: "file",
                            accept: "image/*",
                            onchange: move |e| {
                                let Some(file) = e.files().into_iter().next() else {
                                    return;
                                };
                                spawn(async move {
                                    if file.size() > MAX_IMAGE_BYTES as u64 {
                                        errors.with_mut(|errs| {
                                            errs.image = "Image must be less than 300KB".into();
                                        });
                                        draft.with_mut(|d| d.image = None);
                                        preview.set(None);
                                        return;
                                    }
                                    match file.read_bytes().await {
                                        Ok(bytes) => {
                                            let bytes = bytes.to_vec();
                                            errors.with_mut(|errs| errs.image.clear());
                                            preview.set(Some(data_url(&file.name(), &bytes)));
                                            draft.with_mut(|d| {
                                                d.image = Some(ImageFile {
                                                    file_name: file.name(),
                                                    bytes,
                                                });
                                            });
                                        }
                                        Err(error) => {
                                            banner.set_error(format!("failed to read image: {error}"));
                                        }
                                    }
                                });
                            },
                        }
                        if !errors.read().image.is_empty() {
                            p { class: "form-error", "{errors.read().image}" }
                        }
                        if let Some(url) = preview.read().clone() {
                            div { class: "image-preview",
                                img { src: "{url}", alt: "Preview" }
                                button {
                                    r#type: "button",
                                    class: "image-reset",
                                    onclick: move |_| {
                                        draft.with_mut(|d| d.image = None);
                                        preview.set(None);
                                    },
                                    "×"
                                }
                            }
                        }
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: *saving.read() || !errors.read().image.is_empty(),
                        onclick: submit,
                        if *saving.read() {
                            "Saving..."
                        } else if mode == FormMode::Edit {
                            "Update"
                        } else {
                            "Submit"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ViewEmployeeModal(employee: Employee, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Employee Information" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    div { class: "modal-avatar",
                        Avatar {
                            name: employee.name.clone(),
                            image: employee.image.clone(),
                            large: true,
                        }
                    }
                    div { class: "form-group",
                        span { class: "form-label", "Name" }
                        div { class: "form-value", "{employee.name}" }
                    }
                    div { class: "form-group",
                        span { class: "form-label", "Email" }
                        div { class: "form-value", "{employee.email}" }
                    }
                    div { class: "form-group",
                        span { class: "form-label", "Designation" }
                        div { class: "form-value", "{employee.designation}" }
                    }
                    div { class: "form-group",
                        span { class: "form-label", "Contact" }
                        div { class: "form-value", "{employee.phone}" }
                    }
                    div { class: "form-group",
                        span { class: "form-label", "Address" }
                        div { class: "form-value", "{employee.address}" }
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}

#[component]
pub fn DeleteConfirmModal(
    employee_name: String,
    deleting: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if !deleting { on_close.call(()) },
            div { class: "modal modal-sm",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Delete Employee" }
                    if !deleting {
                        button {
                            class: "modal-close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                div { class: "modal-body",
                    p { "Are you sure you want to delete " strong { "{employee_name}" } "?" }
                    p { class: "text-muted", "You won't be able to revert this." }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: deleting,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: deleting,
                        onclick: move |_| on_confirm.call(()),
                        if deleting { "Deleting..." } else { "Yes, delete it" }
                    }
                }
            }
        }
    }
}

/// Inline preview for a freshly chosen file, before it has a hosted
/// URL.
fn data_url(file_name: &str, bytes: &[u8]) -> String {
    use base64::prelude::*;

    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
    format!(
        "data:{};base64,{}",
        mime.essence_str(),
        BASE64_STANDARD.encode(bytes)
    )
}
