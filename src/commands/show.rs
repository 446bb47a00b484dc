use crate::client::EmployeeClient;
use crate::error::{EmployeeError, Result};
use crate::output::{self, with_busy};

pub async fn run(client: &EmployeeClient, id: &str) -> Result<()> {
    let employee = with_busy("Loading employee...", client.get_employee(id))
        .await
        .map_err(|e| match e.status() {
            Some(404) => EmployeeError::EmployeeNotFound(id.to_string()),
            _ => EmployeeError::from(e),
        })?;

    output::print_employee(&employee);
    Ok(())
}
