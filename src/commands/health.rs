use colored::Colorize;

use crate::client::EmployeeClient;
use crate::error::Result;
use crate::output::{self, with_busy};

pub async fn run(client: &EmployeeClient) -> Result<()> {
    let health = with_busy("Checking backend...", client.health()).await?;
    let base = client.base_url().to_string();

    output::print_item(&health, |h| {
        let status = if h.status.eq_ignore_ascii_case("ok") {
            h.status.green().to_string()
        } else {
            h.status.yellow().to_string()
        };
        match &h.message {
            Some(message) => println!("{base}: {status} ({message})"),
            None => println!("{base}: {status}"),
        }
    });

    Ok(())
}
