use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "recipebook",
    about = "Recipebook: keep recipes in a local file and compare map vs list lookups",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Backing recipe file (default: recipes.json)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List recipe names
    List(ListArgs),
    /// Add a new recipe
    Add(AddArgs),
    /// Show a recipe's ingredients and instructions
    View(ViewArgs),
    /// Delete a recipe
    Delete(DeleteArgs),
    /// Time add/get/delete on a map vs a list of pairs
    Bench(BenchArgs),
    /// Interactive recipe shell
    Shell(ShellArgs),
}

#[derive(Args)]
pub struct ListArgs {}

#[derive(Args)]
pub struct AddArgs {
    pub name: String,
    /// Comma-separated ingredients
    #[arg(short, long, default_value = "")]
    pub ingredients: String,
    #[arg(short = 's', long, default_value = "")]
    pub instructions: String,
}

#[derive(Args)]
pub struct ViewArgs {
    pub name: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub name: Option<String>,
}

#[derive(Args)]
pub struct BenchArgs {
    /// Number of synthetic recipes to time
    pub count: Option<String>,
    /// Print the bar chart of total times
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub chart: bool,
}

#[derive(Args)]
pub struct ShellArgs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["recipebook", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List(_)));
    }

    #[test]
    fn parse_add() {
        let cli = Cli::try_parse_from([
            "recipebook", "add", "Pasta", "-i", "Pasta, Water", "-s", "Boil water, add pasta",
        ])
        .unwrap();
        let Command::Add(args) = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(args.name, "Pasta");
        assert_eq!(args.ingredients, "Pasta, Water");
        assert_eq!(args.instructions, "Boil water, add pasta");
    }

    #[test]
    fn parse_view_without_selection() {
        let cli = Cli::try_parse_from(["recipebook", "view"]).unwrap();
        let Command::View(args) = cli.command else {
            panic!("wrong command");
        };
        assert!(args.name.is_none());
    }

    #[test]
    fn parse_delete() {
        let cli = Cli::try_parse_from(["recipebook", "delete", "Pasta"]).unwrap();
        let Command::Delete(args) = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(args.name, Some("Pasta".into()));
    }

    #[test]
    fn parse_bench_keeps_raw_count() {
        let cli = Cli::try_parse_from(["recipebook", "bench", "--", "-5"]).unwrap();
        let Command::Bench(args) = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(args.count, Some("-5".into()));
        assert!(args.chart);
    }

    #[test]
    fn parse_bench_without_chart() {
        let cli = Cli::try_parse_from(["recipebook", "bench", "10", "--chart", "false"]).unwrap();
        let Command::Bench(args) = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(args.count, Some("10".into()));
        assert!(!args.chart);
    }

    #[test]
    fn parse_shell() {
        let cli = Cli::try_parse_from(["recipebook", "shell"]).unwrap();
        assert!(matches!(cli.command, Command::Shell(_)));
    }

    #[test]
    fn parse_global_file() {
        let cli = Cli::try_parse_from(["recipebook", "list", "--file", "/tmp/r.json"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/r.json")));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["recipebook", "--verbose", "list"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["recipebook", "--format", "json", "list"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
