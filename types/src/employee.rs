use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One employee record as served by the employee service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Server-assigned identifier, immutable once assigned. The wire
    /// format names this field `_id`.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub designation: Designation,
    /// Hosted image URL, when one has been uploaded.
    #[serde(default)]
    pub image: Option<String>,
}

/// The closed set of designations the service accepts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Designation {
    #[serde(rename = "HR")]
    #[strum(serialize = "HR")]
    Hr,
    Engineering,
    Marketing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_record() {
        let body = r#"{
            "_id": "65a1f0",
            "name": "Ann",
            "email": "ann@x.com",
            "phone": "0171",
            "address": "Dhaka",
            "designation": "HR",
            "image": "https://cdn.example/ann.png"
        }"#;

        let employee: Employee = serde_json::from_str(body).unwrap();
        assert_eq!(employee.id, "65a1f0");
        assert_eq!(employee.designation, Designation::Hr);
        assert_eq!(employee.image.as_deref(), Some("https://cdn.example/ann.png"));
    }

    #[test]
    fn missing_image_is_none() {
        let body = r#"{
            "_id": "65a1f1",
            "name": "Bob",
            "email": "bob@x.com",
            "phone": "0172",
            "address": "Sylhet",
            "designation": "Engineering"
        }"#;

        let employee: Employee = serde_json::from_str(body).unwrap();
        assert_eq!(employee.image, None);
    }

    #[test]
    fn designation_labels_round_trip() {
        assert_eq!(Designation::Hr.to_string(), "HR");
        assert_eq!("HR".parse::<Designation>().unwrap(), Designation::Hr);
        assert_eq!(
            "Engineering".parse::<Designation>().unwrap(),
            Designation::Engineering
        );
        assert_eq!(
            "Marketing".parse::<Designation>().unwrap(),
            Designation::Marketing
        );
    }

    #[test]
    fn unknown_designation_is_rejected() {
        assert!("Sales".parse::<Designation>().is_err());
        assert!("".parse::<Designation>().is_err());
    }
}
