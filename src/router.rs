use crate::error::{EmployeeError, Result};
use crate::screens::{CreateScreen, ListScreen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    AddEmployee,
    EmployeeList,
}

/// A mounted screen. Only built once its route is navigated to.
#[derive(Debug)]
pub enum Screen {
    Create(CreateScreen),
    List(ListScreen),
}

impl Route {
    pub const ALL: [Route; 2] = [Route::AddEmployee, Route::EmployeeList];

    pub fn resolve(path: &str) -> Result<Self> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        Route::ALL
            .into_iter()
            .find(|r| r.path() == normalized)
            .ok_or_else(|| EmployeeError::UnknownRoute(trimmed.to_string()))
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::AddEmployee => "/",
            Route::EmployeeList => "/list",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::AddEmployee => "Add New Employee",
            Route::EmployeeList => "Employee List",
        }
    }

    pub fn mount(self) -> Screen {
        tracing::debug!(path = self.path(), "mounting screen");
        match self {
            Route::AddEmployee => Screen::Create(CreateScreen::new()),
            Route::EmployeeList => Screen::List(ListScreen::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(Route::resolve("/").unwrap(), Route::AddEmployee);
        assert_eq!(Route::resolve("").unwrap(), Route::AddEmployee);
        assert_eq!(Route::resolve("/list").unwrap(), Route::EmployeeList);
        assert_eq!(Route::resolve("/list/").unwrap(), Route::EmployeeList);
    }

    #[test]
    fn test_resolve_unknown_path() {
        let err = Route::resolve("/employees").unwrap_err();
        assert!(matches!(err, EmployeeError::UnknownRoute(p) if p == "/employees"));
    }

    #[test]
    fn test_mount_matches_route() {
        assert!(matches!(Route::AddEmployee.mount(), Screen::Create(_)));
        assert!(matches!(Route::EmployeeList.mount(), Screen::List(_)));
    }
}
