use std::io::{BufRead, Write};

use colored::Colorize;

use crate::cli::{AddArgs, OutputFormat};
use crate::client::EmployeeApi;
use crate::commands::prompt::Prompter;
use crate::error::{EmployeeError, Result};
use crate::output::{self, Busy};
use crate::screens::create::{Field, SubmitState, SUCCESS_MESSAGE};
use crate::screens::CreateScreen;
use crate::types::Employee;

fn report_added(employee: &Employee) {
    if output::format() == OutputFormat::Json {
        output::print_employee(employee);
    } else {
        output::print_message(SUCCESS_MESSAGE);
    }
}

pub async fn run<A: EmployeeApi>(api: &A, args: AddArgs) -> Result<()> {
    let mut screen = CreateScreen::new();
    screen.set_field(Field::Name, args.name);
    screen.set_field(Field::Position, args.position);
    screen.set_field(Field::Salary, args.salary);

    screen.submit(&Busy(api)).await;

    match screen.state() {
        SubmitState::Added(employee) => {
            report_added(employee);
            Ok(())
        }
        SubmitState::Invalid(e) => Err(EmployeeError::Validation(e.clone())),
        SubmitState::Failed(e) => Err(EmployeeError::Api(e.clone())),
        SubmitState::Idle | SubmitState::Submitting => Ok(()),
    }
}

/// Interactive form. Returns how many employees were added.
pub async fn session<A, R, W>(
    api: &A,
    screen: &mut CreateScreen,
    prompter: &mut Prompter<R, W>,
) -> Result<usize>
where
    A: EmployeeApi,
    R: BufRead,
    W: Write,
{
    let mut added = 0;

    loop {
        for field in Field::ALL {
            let current = screen.draft().get(field).to_string();
            let label = if current.is_empty() {
                format!("{}: ", field.label())
            } else {
                format!("{} [{}]: ", field.label(), current)
            };

            let Some(value) = prompter.ask(&label)? else {
                return Ok(added);
            };
            // Blank input keeps what was typed before a failed attempt.
            if !value.is_empty() || current.is_empty() {
                screen.set_field(field, value);
            }
        }

        screen.submit(&Busy(api)).await;

        if let SubmitState::Added(employee) = screen.state() {
            added += 1;
            report_added(employee);
            if !prompter.confirm("Add another employee?", false)? {
                return Ok(added);
            }
            prompter.say("")?;
            continue;
        }

        if let Some(message) = screen.error() {
            output::print_error(&message);
        }
        if !prompter.confirm("Edit and resubmit?", true)? {
            return Ok(added);
        }
        prompter.say(&"Press Enter to keep a value.".bright_black().to_string())?;
    }
}
