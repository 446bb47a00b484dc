use std::future::Future;
use std::io::{IsTerminal, Write};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::time::Duration;

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::OutputFormat;
use crate::client::{ApiResult, EmployeeApi};
use crate::types::{Employee, NewEmployee};

/// Global output settings
static OUTPUT_FORMAT: AtomicU8 = AtomicU8::new(0);
static QUIET: AtomicBool = AtomicBool::new(false);

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn set_format(format: OutputFormat) {
    let value = match format {
        OutputFormat::Table => 0,
        OutputFormat::Json => 1,
        OutputFormat::Compact => 2,
    };
    OUTPUT_FORMAT.store(value, Ordering::Relaxed);
}

pub fn format() -> OutputFormat {
    match OUTPUT_FORMAT.load(Ordering::Relaxed) {
        1 => OutputFormat::Json,
        2 => OutputFormat::Compact,
        _ => OutputFormat::Table,
    }
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a table or JSON depending on output mode
pub fn print_table<T, R, F>(items: &[T], to_row: F)
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    match format() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(items).unwrap_or_default());
        }
        OutputFormat::Table => {
            let rows: Vec<R> = items.iter().map(to_row).collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
        OutputFormat::Compact => {
            let rows: Vec<R> = items.iter().map(to_row).collect();
            let table = Table::new(rows).with(Style::blank()).to_string();
            println!("{table}");
        }
    }
}

/// Print a single item or JSON depending on output mode
pub fn print_item<T: Serialize>(item: &T, display: impl FnOnce(&T)) {
    if format() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(item).unwrap_or_default());
    } else {
        display(item);
    }
}

/// Print a success message (skipped when quiet, wrapped in JSON mode)
pub fn print_message(message: &str) {
    if is_quiet() {
        return;
    }
    if format() == OutputFormat::Json {
        println!("{}", serde_json::json!({ "message": message }));
    } else {
        println!("{}", message.green());
    }
}

/// Inline error that doesn't end the session.
pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

/// Salary with two decimals, e.g. `$72000.00`
pub fn format_salary(salary: f64) -> String {
    format!("${salary:.2}")
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[derive(Tabled)]
pub struct EmployeeRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Salary")]
    salary: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            name: truncate(&employee.name, 40),
            position: truncate(&employee.position, 30),
            salary: format_salary(employee.salary),
            id: employee.id.clone(),
        }
    }
}

pub fn print_employee(employee: &Employee) {
    print_item(employee, |e| {
        println!("{}", e.name.bold());
        println!("Position: {}", e.position);
        println!("Salary:   {}", format_salary(e.salary));
        println!("ID:       {}", e.id.bright_black());
    });
}

/// Run `fut`, animating a spinner on stderr until it completes.
///
/// Nothing is drawn unless stderr is a terminal.
pub async fn with_busy<F: Future>(label: &str, fut: F) -> F::Output {
    let mut stderr = std::io::stderr();
    if !stderr.is_terminal() {
        return fut.await;
    }

    tokio::pin!(fut);
    let mut ticker = tokio::time::interval(Duration::from_millis(80));
    let mut frame = 0usize;

    let output = loop {
        tokio::select! {
            output = &mut fut => break output,
            _ = ticker.tick() => {
                let glyph = SPINNER_FRAMES[frame % SPINNER_FRAMES.len()];
                let _ = write!(stderr, "\r{} {label}", glyph.cyan());
                let _ = stderr.flush();
                frame += 1;
            }
        }
    };

    let _ = write!(stderr, "\r{}\r", " ".repeat(label.chars().count() + 2));
    let _ = stderr.flush();
    output
}

/// Wraps a backend so every call shows the busy indicator.
pub struct Busy<'a, A>(pub &'a A);

impl<A: EmployeeApi> EmployeeApi for Busy<'_, A> {
    async fn create_employee(&self, draft: &NewEmployee) -> ApiResult<Employee> {
        with_busy("Adding employee...", self.0.create_employee(draft)).await
    }

    async fn list_employees(&self) -> ApiResult<Vec<Employee>> {
        with_busy("Loading employees...", self.0.list_employees()).await
    }
}
