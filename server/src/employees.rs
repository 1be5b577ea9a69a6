use std::sync::LazyLock;

use eyre::WrapErr;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use types::{Employee, EmployeeInput, Result};

use crate::config::CONFIG;

/// Shared client for the employee REST service.
pub static EMPLOYEE_CLIENT: LazyLock<EmployeeClient> =
    LazyLock::new(|| EmployeeClient::new(CONFIG.employees_url.clone()));

trait ReqwestExt {
    /// Send, apply the service's error contract, and decode a JSON body.
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;

    /// Send and apply the error contract, ignoring any response body.
    async fn try_send_no_body(self) -> Result<()>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let body = checked(self)
            .await?
            .bytes()
            .await
            .wrap_err("failed to read response from employee service")?;

        Ok(serde_json::from_slice(&body)
            .wrap_err("employee service returned an unexpected body")?)
    }

    async fn try_send_no_body(self) -> Result<()> {
        checked(self).await?;
        Ok(())
    }
}

/// Send the request and map non-2xx responses through the service's
/// error contract.
async fn checked(builder: RequestBuilder) -> Result<Response> {
    let response = builder
        .send()
        .await
        .wrap_err("request to employee service failed")?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    Err(error_message(status, &body).into())
}

/// Non-2xx responses carry `{"error": "..."}` when the service has a
/// message for us; anything else falls back to the status line.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => format!("employee service returned {status}"),
    }
}

#[derive(Clone)]
pub struct EmployeeClient {
    client: Client,
    base_url: Url,
}

impl EmployeeClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .wrap_err("invalid employee service URL")?;

        Ok(self.client.request(method, url))
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.request(Method::GET, "/api/employees")?
            .try_send()
            .await
    }

    pub async fn create_employee(&self, input: &EmployeeInput) -> Result<Employee> {
        self.request(Method::POST, "/api/employees")?
            .multipart(employee_form(input)?)
            .try_send()
            .await
    }

    pub async fn update_employee(&self, id: &str, input: &EmployeeInput) -> Result<Employee> {
        self.request(Method::PUT, &format!("/api/employees/{id}"))?
            .multipart(employee_form(input)?)
            .try_send()
            .await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<()> {
        self.request(Method::DELETE, &format!("/api/employees/{id}"))?
            .try_send_no_body()
            .await
    }
}

/// The service takes employee writes as multipart form data; the image
/// part is attached only when a new file was chosen.
fn employee_form(input: &EmployeeInput) -> Result<Form> {
    let mut form = Form::new()
        .text("name", input.name.clone())
        .text("email", input.email.clone())
        .text("phone", input.phone.clone())
        .text("address", input.address.clone())
        .text("designation", input.designation.to_string());

    if let Some(image) = &input.image {
        let mime = mime_guess::from_path(&image.file_name).first_or_octet_stream();
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(mime.essence_str())
            .wrap_err("invalid image content type")?;
        form = form.part("image", part);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_is_surfaced() {
        let message = error_message(
            StatusCode::BAD_REQUEST,
            br#"{"error": "email already in use"}"#,
        );
        assert_eq!(message, "email already in use");
    }

    #[test]
    fn non_json_error_body_falls_back_to_status() {
        let message = error_message(StatusCode::BAD_GATEWAY, b"<html>oops</html>");
        assert_eq!(message, "employee service returned 502 Bad Gateway");

        let message = error_message(StatusCode::NOT_FOUND, b"");
        assert_eq!(message, "employee service returned 404 Not Found");
    }
}
