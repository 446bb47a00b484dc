use colored::Colorize;

use crate::client::EmployeeClient;
use crate::commands::prompt::Prompter;
use crate::commands::{add, list};
use crate::error::Result;
use crate::output;
use crate::router::{Route, Screen};

/// Navigate to `path` and run that screen until the user leaves it.
pub async fn run(client: &EmployeeClient, path: &str) -> Result<()> {
    let route = Route::resolve(path)?;
    let mut prompter = Prompter::stdio();

    prompter.say(&route.title().blue().bold().to_string())?;
    prompter.say("")?;

    match route.mount() {
        Screen::Create(mut screen) => {
            let added = add::session(client, &mut screen, &mut prompter).await?;
            if added > 0 {
                output::print_message(&format!(
                    "Added {added} employee{}",
                    if added == 1 { "" } else { "s" }
                ));
            }
        }
        Screen::List(mut screen) => {
            list::session(client, &mut screen, &mut prompter).await?;
        }
    }

    Ok(())
}
