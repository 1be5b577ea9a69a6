use serde::{Deserialize, Serialize};

use crate::{Designation, Employee, Error};

/// Largest image upload the form accepts, in bytes.
pub const MAX_IMAGE_BYTES: usize = 300 * 1024;

/// A file chosen in the form, carried as raw bytes until upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Whether a form submission creates a new record or edits an existing
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Transient, modal-scoped editable copy of a record.
///
/// `designation` holds the raw select value (empty = unselected).
/// `image` holds only a newly chosen file, never a previously uploaded
/// URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub designation: String,
    pub image: Option<ImageFile>,
}

/// One message per field; an empty string means the field is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub designation: String,
    pub image: String,
}

impl FieldErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.address.is_empty()
            && self.designation.is_empty()
            && self.image.is_empty()
    }
}

impl EmployeeDraft {
    /// Start an edit draft from an existing record.
    pub fn from_record(record: &Employee) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            address: record.address.clone(),
            designation: record.designation.to_string(),
            image: None,
        }
    }

    /// Check every field rule. All rules are evaluated; none
    /// short-circuits the rest.
    pub fn validate(&self, mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.name = "Name is required".into();
        }

        if self.email.trim().is_empty() {
            errors.email = "Email is required".into();
        } else if !email_shape_ok(&self.email) {
            errors.email = "Email is invalid".into();
        }

        if self.phone.trim().is_empty() {
            errors.phone = "Contact is required".into();
        }

        if self.address.trim().is_empty() {
            errors.address = "Address is required".into();
        }

        if self.designation.trim().is_empty() {
            errors.designation = "Designation is required".into();
        }

        if mode == FormMode::Create && self.image.is_none() {
            errors.image = "Image is required".into();
        }
        if let Some(image) = &self.image {
            if image.size() > MAX_IMAGE_BYTES {
                errors.image = "Image must be less than 300KB".into();
            }
        }

        errors
    }
}

/// Accepts any string containing, anywhere, a non-whitespace character,
/// `@`, then a non-whitespace run holding a `.` with at least one
/// character between it and the `@` and one after it.
fn email_shape_ok(email: &str) -> bool {
    let chars: Vec<char> = email.chars().collect();

    for at in (0..chars.len()).filter(|&i| chars[i] == '@') {
        if at == 0 || chars[at - 1].is_whitespace() {
            continue;
        }

        let mut seen_domain_char = false;
        for i in at + 1..chars.len() {
            let c = chars[i];
            if c.is_whitespace() {
                break;
            }
            if c == '.' && seen_domain_char && i + 1 < chars.len() && !chars[i + 1].is_whitespace()
            {
                return true;
            }
            seen_domain_char = true;
        }
    }

    false
}

/// Validated payload handed to the employee service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub designation: Designation,
    pub image: Option<ImageFile>,
}

impl TryFrom<EmployeeDraft> for EmployeeInput {
    type Error = Error;

    fn try_from(draft: EmployeeDraft) -> Result<Self, Self::Error> {
        let designation = draft
            .designation
            .parse()
            .map_err(|_| Error::from(format!("unknown designation: {}", draft.designation)))?;

        Ok(Self {
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            designation,
            image: draft.image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(len: usize) -> ImageFile {
        ImageFile {
            file_name: "photo.png".into(),
            bytes: vec![0; len],
        }
    }

    fn complete_draft() -> EmployeeDraft {
        EmployeeDraft {
            name: "A".into(),
            email: "a@b.co".into(),
            phone: "1".into(),
            address: "x".into(),
            designation: "HR".into(),
            image: Some(image(1024)),
        }
    }

    #[test]
    fn complete_create_draft_is_valid() {
        let errors = complete_draft().validate(FormMode::Create);
        assert_eq!(errors, FieldErrors::default());
        assert!(errors.is_valid());
    }

    #[test]
    fn each_missing_field_reports_its_own_message() {
        let mut draft = complete_draft();
        draft.name = "   ".into();
        let errors = draft.validate(FormMode::Create);
        assert_eq!(errors.name, "Name is required");
        assert!(!errors.is_valid());

        let mut draft = complete_draft();
        draft.email = String::new();
        assert_eq!(draft.validate(FormMode::Create).email, "Email is required");

        let mut draft = complete_draft();
        draft.phone = " ".into();
        assert_eq!(draft.validate(FormMode::Create).phone, "Contact is required");

        let mut draft = complete_draft();
        draft.address = String::new();
        assert_eq!(
            draft.validate(FormMode::Create).address,
            "Address is required"
        );

        let mut draft = complete_draft();
        draft.designation = String::new();
        assert_eq!(
            draft.validate(FormMode::Create).designation,
            "Designation is required"
        );
    }

    #[test]
    fn malformed_email_is_invalid() {
        let mut draft = complete_draft();
        draft.email = "not-an-email".into();
        assert_eq!(draft.validate(FormMode::Create).email, "Email is invalid");

        draft.email = "a@b".into();
        assert_eq!(draft.validate(FormMode::Create).email, "Email is invalid");

        draft.email = "a@.c".into();
        assert_eq!(draft.validate(FormMode::Create).email, "Email is invalid");

        draft.email = "a@b .c".into();
        assert_eq!(draft.validate(FormMode::Create).email, "Email is invalid");
    }

    #[test]
    fn loose_email_shapes_are_accepted() {
        let mut draft = complete_draft();
        for email in ["a@b.co", "first.last@sub.domain.org", "x y@z.com"] {
            draft.email = email.into();
            assert_eq!(draft.validate(FormMode::Create).email, "", "{email}");
        }
    }

    #[test]
    fn all_rules_evaluate_even_when_several_fail() {
        let errors = EmployeeDraft::default().validate(FormMode::Create);
        assert_eq!(errors.name, "Name is required");
        assert_eq!(errors.email, "Email is required");
        assert_eq!(errors.phone, "Contact is required");
        assert_eq!(errors.address, "Address is required");
        assert_eq!(errors.designation, "Designation is required");
        assert_eq!(errors.image, "Image is required");
    }

    #[test]
    fn image_is_required_only_when_creating() {
        let mut draft = complete_draft();
        draft.image = None;

        assert_eq!(draft.validate(FormMode::Create).image, "Image is required");
        assert_eq!(draft.validate(FormMode::Edit).image, "");
    }

    #[test]
    fn image_size_boundary() {
        let mut draft = complete_draft();

        draft.image = Some(image(MAX_IMAGE_BYTES));
        assert_eq!(draft.validate(FormMode::Create).image, "");

        draft.image = Some(image(MAX_IMAGE_BYTES + 1));
        assert_eq!(
            draft.validate(FormMode::Create).image,
            "Image must be less than 300KB"
        );
        // The size rule applies in edit mode too.
        assert_eq!(
            draft.validate(FormMode::Edit).image,
            "Image must be less than 300KB"
        );
    }

    #[test]
    fn valid_draft_converts_to_input() {
        let input = EmployeeInput::try_from(complete_draft()).unwrap();
        assert_eq!(input.designation, Designation::Hr);
        assert_eq!(input.image.unwrap().size(), 1024);
    }

    #[test]
    fn unselected_designation_does_not_convert() {
        let mut draft = complete_draft();
        draft.designation = String::new();
        assert!(EmployeeInput::try_from(draft).is_err());
    }
}
