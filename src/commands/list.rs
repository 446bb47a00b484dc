use std::io::{BufRead, Write};

use crate::cli::{ListArgs, OutputFormat};
use crate::client::EmployeeApi;
use crate::commands::prompt::Prompter;
use crate::error::{EmployeeError, Result};
use crate::output::{self, format_salary, Busy, EmployeeRow};
use crate::screens::list::{parse_min_salary, Filters, LoadState};
use crate::screens::ListScreen;

const SESSION_HELP: &str = "Commands:
  name <text>       set the name filter (empty clears it)
  salary <amount>   set the minimum salary (empty clears it)
  apply             apply the filters to the list
  filters           show pending and applied filters
  quit              leave";

fn render(screen: &ListScreen) {
    let shown = screen.displayed();

    if output::format() != OutputFormat::Json && shown.is_empty() {
        println!("No employees found.");
        return;
    }

    output::print_table(shown, |e| EmployeeRow::from(e));

    if output::format() == OutputFormat::Table && !output::is_quiet() {
        println!("{} of {} employees", shown.len(), screen.total());
    }
}

fn describe(filters: &Filters) -> String {
    let name = if filters.name.is_empty() {
        "any".to_string()
    } else {
        format!("{:?}", filters.name)
    };
    let salary = filters
        .min_salary
        .map(|min| format!(">= {}", format_salary(min)))
        .unwrap_or_else(|| "any".to_string());

    format!("name {name}, salary {salary}")
}

pub async fn run<A: EmployeeApi>(api: &A, args: ListArgs) -> Result<()> {
    let mut screen = ListScreen::new();
    screen.load(&Busy(api)).await;

    if let LoadState::Failed(e) = screen.state() {
        return Err(EmployeeError::FetchFailed(e.to_string()));
    }

    if args.has_filters() {
        if let Some(name) = args.name {
            screen.set_name_filter(name);
        }
        if let Some(min) = args.min_salary.as_deref() {
            if !min.trim().is_empty() && parse_min_salary(min).is_none() {
                tracing::warn!(value = min, "ignoring non-numeric salary filter");
            }
            screen.set_salary_filter(min);
        }
        screen.apply_filters();
    }

    render(&screen);
    Ok(())
}

/// Interactive list: loads once, then filters are edited and applied on
/// demand.
pub async fn session<A, R, W>(
    api: &A,
    screen: &mut ListScreen,
    prompter: &mut Prompter<R, W>,
) -> Result<()>
where
    A: EmployeeApi,
    R: BufRead,
    W: Write,
{
    screen.load(&Busy(api)).await;

    if let Some(message) = screen.error() {
        output::print_error(&message);
    }
    render(screen);
    prompter.say(SESSION_HELP)?;

    while let Some(line) = prompter.ask("list> ")? {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((line, ""));

        match command {
            "" => {}
            "name" | "n" => screen.set_name_filter(rest),
            "salary" | "s" => {
                if !rest.is_empty() && parse_min_salary(rest).is_none() {
                    output::print_error(&format!("Not a number: {rest}, salary filter cleared"));
                }
                screen.set_salary_filter(rest);
            }
            "apply" | "a" => {
                screen.apply_filters();
                render(screen);
            }
            "filters" | "f" => {
                prompter.say(&format!("pending: {}", describe(screen.pending_filters())))?;
                prompter.say(&format!("applied: {}", describe(screen.applied_filters())))?;
            }
            "help" | "?" => prompter.say(SESSION_HELP)?,
            "quit" | "q" | "exit" => break,
            other => output::print_error(&format!("Unknown command: {other} (try help)")),
        }
    }

    Ok(())
}
