use serde::{Deserialize, Serialize};
use validator::Validate;

/// An irrigation scheme as recorded by a field assessment.
///
/// Status fields are free text from the assessment form and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SchemeRecord {
    pub scheme_id: u32,

    #[validate(length(min = 1))]
    pub scheme_name: String,

    #[validate(length(min = 1))]
    pub subcounty: String,

    #[serde(default)]
    pub water_availability: Option<String>,

    #[serde(default)]
    pub infrastructure_status: Option<String>,

    #[serde(default)]
    pub application_type: Option<String>,

    #[serde(default)]
    pub current_status: Option<String>,

    #[serde(default)]
    pub registration_status: Option<String>,
}

impl SchemeRecord {
    pub fn new(scheme_id: u32, scheme_name: String, subcounty: String) -> Self {
        Self {
            scheme_id,
            scheme_name,
            subcounty,
            water_availability: None,
            infrastructure_status: None,
            application_type: None,
            current_status: None,
            registration_status: None,
        }
    }

    pub fn with_water_availability(mut self, value: &str) -> Self {
        self.water_availability = Some(value.to_string());
        self
    }

    pub fn with_infrastructure_status(mut self, value: &str) -> Self {
        self.infrastructure_status = Some(value.to_string());
        self
    }

    pub fn with_application_type(mut self, value: &str) -> Self {
        self.application_type = Some(value.to_string());
        self
    }

    pub fn with_current_status(mut self, value: &str) -> Self {
        self.current_status = Some(value.to_string());
        self
    }

    pub fn with_registration_status(mut self, value: &str) -> Self {
        self.registration_status = Some(value.to_string());
        self
    }
}
