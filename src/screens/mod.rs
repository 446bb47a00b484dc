//! The two application screens. Each owns its state outright and talks to
//! the backend through [`EmployeeApi`](crate::client::EmployeeApi).

pub mod create;
pub mod list;

pub use create::CreateScreen;
pub use list::ListScreen;
