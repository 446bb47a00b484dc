use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

#[derive(Parser)]
#[command(name = "employees")]
#[command(about = "A CLI for the employee directory", version)]
#[command(after_help = "EXAMPLES:
    employees add -n \"Dana\" -p \"Engineer\" -s 72000   Add an employee
    employees list --name an --min-salary 50000      Filter the list
    employees open /list                             Browse the list interactively
    employees show 64f1c0ffee                        Show one employee")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show detailed error information and debug logs
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new employee
    #[command(
        alias = "a",
        after_help = "EXAMPLES:
    employees add --name \"Dana\" --position \"Engineer\" --salary 72000
    employees add -n \"Ian\" -p \"Clerk\" -s 41000.50"
    )]
    Add(AddArgs),
    /// List employees, optionally filtered by name and minimum salary
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    employees list
    employees list --name an
    employees list --name an --min-salary 50000 --format json"
    )]
    List(ListArgs),
    /// Show a single employee
    #[command(after_help = "EXAMPLES:
    employees show 64f1c0ffee")]
    Show {
        /// Employee identifier
        id: String,
    },
    /// Open a screen interactively by path (/ or /list)
    #[command(after_help = "EXAMPLES:
    employees open /        Fill in the new-employee form
    employees open /list    Browse and filter the list")]
    Open {
        /// Screen path
        #[arg(default_value = "/")]
        path: String,
    },
    /// Check that the backend is reachable
    #[command(after_help = "EXAMPLES:
    employees health")]
    Health,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    employees completions bash > ~/.bash_completion.d/employees
    employees completions zsh > ~/.zfunc/_employees
    employees completions fish > ~/.config/fish/completions/employees.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    employees init")]
    Init,
}

#[derive(Args)]
pub struct AddArgs {
    /// Employee name
    #[arg(long, short)]
    pub name: String,

    /// Job position
    #[arg(long, short)]
    pub position: String,

    /// Salary, a positive number
    #[arg(long, short, allow_hyphen_values = true)]
    pub salary: String,
}

#[derive(Args, Clone, Default)]
pub struct ListArgs {
    /// Only names containing this text (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Only salaries at or above this amount
    #[arg(long, allow_hyphen_values = true)]
    pub min_salary: Option<String>,
}

impl ListArgs {
    pub fn has_filters(&self) -> bool {
        self.name.is_some() || self.min_salary.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::parse_from([
            "employees", "add", "-n", "Dana", "-p", "Engineer", "-s", "-5",
        ]);
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.name, "Dana");
                assert_eq!(args.salary, "-5");
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_json_flag_overrides_format() {
        let cli = Cli::parse_from(["employees", "list", "--json"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);

        let cli = Cli::parse_from(["employees", "-o", "compact", "list"]);
        assert_eq!(cli.output_format(), OutputFormat::Compact);
    }

    #[test]
    fn test_open_defaults_to_root() {
        let cli = Cli::parse_from(["employees", "open"]);
        assert!(matches!(cli.command, Commands::Open { path } if path == "/"));
    }
}
