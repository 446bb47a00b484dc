//! The employee-creation form.
//!
//! Holds the draft record, validates it locally and submits it once per
//! attempt. Validation failures never reach the backend.

use thiserror::Error;

use crate::client::{ApiResult, EmployeeApi};
use crate::error::ApiError;
use crate::types::{Employee, NewEmployee};

pub const SUCCESS_MESSAGE: &str = "Employee added successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Position,
    Salary,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Position, Field::Salary];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Position => "Position",
            Field::Salary => "Salary",
        }
    }
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub position: String,
    pub salary: String,
}

impl Draft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Position => &self.position,
            Field::Salary => &self.salary,
        }
    }

    pub fn validate(&self) -> Result<NewEmployee, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError { field: Field::Name });
        }

        let position = self.position.trim();
        if position.is_empty() {
            return Err(ValidationError {
                field: Field::Position,
            });
        }

        let salary = parse_salary(&self.salary).ok_or(ValidationError {
            field: Field::Salary,
        })?;

        Ok(NewEmployee {
            name: name.to_string(),
            position: position.to_string(),
            salary,
        })
    }
}

/// Positive, finite salary or nothing.
fn parse_salary(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|s| s.is_finite() && *s > 0.0)
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Please provide valid inputs for all fields.")]
pub struct ValidationError {
    /// First field that failed.
    pub field: Field,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Invalid(ValidationError),
    Submitting,
    Added(Employee),
    Failed(ApiError),
}

#[derive(Debug, Default)]
pub struct CreateScreen {
    draft: Draft,
    state: SubmitState,
}

impl CreateScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, SubmitState::Submitting)
    }

    /// Edits are ignored while a request is in flight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.is_busy() {
            return;
        }
        let value = value.into();
        match field {
            Field::Name => self.draft.name = value,
            Field::Position => self.draft.position = value,
            Field::Salary => self.draft.salary = value,
        }
    }

    /// Inline error for the current state, if any.
    pub fn error(&self) -> Option<String> {
        match &self.state {
            SubmitState::Invalid(e) => Some(e.to_string()),
            SubmitState::Failed(e) => Some(e.to_string()),
            _ => None,
        }
    }

    /// Validate and enter `Submitting`. Returns the payload to send, or
    /// `None` when the draft is invalid or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<NewEmployee> {
        if self.is_busy() {
            tracing::debug!("submit ignored, request already in flight");
            return None;
        }

        match self.draft.validate() {
            Ok(payload) => {
                self.state = SubmitState::Submitting;
                Some(payload)
            }
            Err(e) => {
                tracing::debug!(field = ?e.field, "draft failed validation");
                self.state = SubmitState::Invalid(e);
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: ApiResult<Employee>) {
        match result {
            Ok(employee) => {
                tracing::info!(id = %employee.id, "employee created");
                self.draft = Draft::default();
                self.state = SubmitState::Added(employee);
            }
            Err(e) => {
                tracing::warn!(error = %e, "create failed");
                self.state = SubmitState::Failed(e);
            }
        }
    }

    pub async fn submit<A: EmployeeApi>(&mut self, api: &A) {
        if let Some(payload) = self.begin_submit() {
            let result = api.create_employee(&payload).await;
            self.finish_submit(result);
        }
    }
}
