use dioxus::prelude::*;
use types::{Employee, EmployeeInput};

#[post("/api/employees")]
pub async fn list_employees() -> ServerFnResult<Vec<Employee>> {
    Ok(server::EMPLOYEE_CLIENT.list_employees().await?)
}

#[post("/api/employees/create")]
pub async fn create_employee(input: EmployeeInput) -> ServerFnResult<Employee> {
    Ok(server::EMPLOYEE_CLIENT.create_employee(&input).await?)
}

#[post("/api/employees/update")]
pub async fn update_employee(id: String, input: EmployeeInput) -> ServerFnResult<Employee> {
    Ok(server::EMPLOYEE_CLIENT.update_employee(&id, &input).await?)
}

#[post("/api/employees/delete")]
pub async fn delete_employee(id: String) -> ServerFnResult<()> {
    server::EMPLOYEE_CLIENT.delete_employee(&id).await?;
    Ok(())
}
