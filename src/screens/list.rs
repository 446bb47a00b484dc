//! The filterable employee list.
//!
//! Fetches once on mount; filters are edited as pending input and only
//! change the displayed rows when applied.

use crate::client::{ApiResult, EmployeeApi};
use crate::error::ApiError;
use crate::types::Employee;

/// Applied filter criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub name: String,
    pub min_salary: Option<f64>,
}

impl Filters {
    pub fn matches(&self, employee: &Employee) -> bool {
        let name_match = employee
            .name
            .to_lowercase()
            .contains(&self.name.to_lowercase());
        let salary_match = self.min_salary.is_none_or(|min| employee.salary >= min);

        name_match && salary_match
    }

    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        employees
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}

/// Empty or non-numeric input clears the salary filter.
pub fn parse_min_salary(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(ApiError),
}

#[derive(Debug, Default)]
pub struct ListScreen {
    state: LoadState,
    employees: Vec<Employee>,
    displayed: Vec<Employee>,
    pending: Filters,
    applied: Filters,
}

impl ListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn displayed(&self) -> &[Employee] {
        &self.displayed
    }

    pub fn total(&self) -> usize {
        self.employees.len()
    }

    pub fn pending_filters(&self) -> &Filters {
        &self.pending
    }

    pub fn applied_filters(&self) -> &Filters {
        &self.applied
    }

    pub fn error(&self) -> Option<String> {
        match &self.state {
            LoadState::Failed(e) => Some(format!("Failed to fetch employees: {e}")),
            _ => None,
        }
    }

    /// Enter `Loading` if nothing was fetched yet. Returns whether a fetch
    /// should be issued.
    pub fn begin_load(&mut self) -> bool {
        if self.state != LoadState::Idle {
            tracing::debug!(state = ?self.state, "list already mounted, not refetching");
            return false;
        }
        self.state = LoadState::Loading;
        true
    }

    pub fn finish_load(&mut self, result: ApiResult<Vec<Employee>>) {
        match result {
            Ok(employees) => {
                tracing::info!(count = employees.len(), "employees loaded");
                self.displayed = employees.clone();
                self.employees = employees;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch employees");
                self.employees.clear();
                self.displayed.clear();
                self.state = LoadState::Failed(e);
            }
        }
    }

    /// The single fetch on mount. Later calls are no-ops.
    pub async fn load<A: EmployeeApi>(&mut self, api: &A) {
        if self.begin_load() {
            let result = api.list_employees().await;
            self.finish_load(result);
        }
    }

    pub fn set_name_filter(&mut self, text: impl Into<String>) {
        self.pending.name = text.into();
    }

    pub fn set_salary_filter(&mut self, text: &str) {
        self.pending.min_salary = parse_min_salary(text);
    }

    /// Recompute the displayed rows from the last fetched list.
    pub fn apply_filters(&mut self) {
        self.applied = self.pending.clone();
        self.displayed = self.applied.apply(&self.employees);
        tracing::debug!(
            shown = self.displayed.len(),
            total = self.employees.len(),
            "filters applied"
        );
    }
}
