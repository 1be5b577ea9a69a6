mod draft;
mod employee;
mod error;
mod list;

pub use draft::{EmployeeDraft, EmployeeInput, FieldErrors, FormMode, ImageFile, MAX_IMAGE_BYTES};
pub use employee::{Designation, Employee};
pub use error::{Error, Result};
pub use list::{filter_employees, remove_employee};
