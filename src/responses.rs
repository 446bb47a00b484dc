//! Shared backend response shapes used by the client.

use serde::{Deserialize, Serialize};

use crate::types::{Employee, NewEmployee};

/// Error body of a 4xx/5xx response. Backends use either key.
#[derive(Deserialize, Default)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Successful create: either the stored record or an acknowledgement
/// carrying only the new identifier.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum CreateResponse {
    Record(Employee),
    Ack {
        employee_id: String,
        #[allow(dead_code)]
        message: Option<String>,
    },
}

impl CreateResponse {
    pub fn into_employee(self, draft: NewEmployee) -> Employee {
        match self {
            CreateResponse::Record(employee) => employee,
            CreateResponse::Ack { employee_id, .. } => draft.into_employee(employee_id),
        }
    }
}

/// `GET /api/` health probe.
#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewEmployee {
        NewEmployee {
            name: "Ana".to_string(),
            position: "Designer".to_string(),
            salary: 51000.0,
        }
    }

    #[test]
    fn test_create_response_record() {
        let response: CreateResponse = serde_json::from_str(
            r#"{"_id": "a1", "name": "Ana", "position": "Designer", "salary": 51000}"#,
        )
        .unwrap();
        let employee = response.into_employee(draft());
        assert_eq!(employee.id, "a1");
    }

    #[test]
    fn test_create_response_ack() {
        let response: CreateResponse =
            serde_json::from_str(r#"{"message": "Employee added", "employee_id": "b2"}"#).unwrap();
        let employee = response.into_employee(draft());
        assert_eq!(employee.id, "b2");
        assert_eq!(employee.name, "Ana");
        assert_eq!(employee.salary, 51000.0);
    }

    #[test]
    fn test_error_body_prefers_error_key() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "Invalid salary filter", "message": "x"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Invalid salary filter"));
    }

    #[test]
    fn test_error_body_blank_is_none() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "  "}"#).unwrap();
        assert_eq!(body.into_message(), None);
    }
}
