use std::io::{self, Write};

use anyhow::bail;
use colored::Colorize;
use recipebook_bench::{BarChart, BenchError, BenchmarkHarness, TestCount};
use recipebook_store::{JsonFileStorage, RecipeStore};
use recipebook_types::RecipeDraft;
use serde_json::json;

use crate::cli::*;
use crate::config::AppConfig;
use crate::shell::Shell;

pub const NO_SELECTION: &str = "No recipe selected.";
pub const ADD_REFUSED: &str = "Recipe could not be added. It may already exist.";
pub const DELETE_REFUSED: &str = "Recipe could not be deleted. It may not exist.";

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::resolve(&cli)?;
    let mut app = App::open(config, cli.format);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::List(_) => app.list(&mut out),
        Command::Add(args) => {
            let draft = RecipeDraft::from_fields(&args.name, &args.ingredients, &args.instructions);
            app.add(draft, &mut out)
        }
        Command::View(args) => app.view(args.name.as_deref(), &mut out),
        Command::Delete(args) => app.delete(args.name.as_deref(), &mut out),
        Command::Bench(args) => app.bench(args.count.as_deref(), args.chart, &mut out),
        Command::Shell(_) => {
            let stdin = io::stdin();
            Shell::new(&mut app, stdin.lock(), out).run()
        }
    }
}

/// The live recipe store plus the benchmark panel, shared by one-shot
/// commands and the interactive shell.
pub struct App {
    config: AppConfig,
    format: OutputFormat,
    store: RecipeStore<JsonFileStorage>,
    harness: BenchmarkHarness,
}

impl App {
    pub fn open(config: AppConfig, format: OutputFormat) -> Self {
        let store = RecipeStore::open(JsonFileStorage::new(&config.recipes_path));
        let harness = BenchmarkHarness::new(config.bench);
        Self {
            config,
            format,
            store,
            harness,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn names(&self) -> Vec<String> {
        self.store.list_names()
    }

    /// Re-read the backing file.
    pub fn refresh(&mut self) {
        self.store.reload();
    }

    pub fn list(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        let names = self.store.list_names();
        match self.format {
            OutputFormat::Json => writeln!(out, "{}", json!(names))?,
            OutputFormat::Text if names.is_empty() => writeln!(out, "No recipes.")?,
            OutputFormat::Text => {
                for name in &names {
                    writeln!(out, "{name}")?;
                }
            }
        }
        Ok(())
    }

    pub fn add(&mut self, draft: RecipeDraft, out: &mut dyn Write) -> anyhow::Result<()> {
        let (name, recipe) = draft.into_parts();
        if !self.store.add(&name, recipe.ingredients, recipe.instructions)? {
            bail!(ADD_REFUSED);
        }
        match self.format {
            OutputFormat::Json => writeln!(out, "{}", json!({ "added": name }))?,
            OutputFormat::Text => writeln!(out, "{} Added {}", "✓".green().bold(), name.yellow())?,
        }
        Ok(())
    }

    pub fn view(&self, name: Option<&str>, out: &mut dyn Write) -> anyhow::Result<()> {
        let Some(name) = name else { bail!(NO_SELECTION) };
        let Some(recipe) = self.store.get(name) else {
            bail!("Recipe {name:?} not found.");
        };
        match self.format {
            OutputFormat::Json => writeln!(
                out,
                "{}",
                json!({
                    "name": name,
                    "ingredients": recipe.ingredients,
                    "instructions": recipe.instructions,
                })
            )?,
            OutputFormat::Text => {
                writeln!(out, "{}", name.bold())?;
                writeln!(out, "{}", "Ingredients:".bold())?;
                writeln!(out, "{}", recipe.ingredient_lines())?;
                writeln!(out, "{}", "Instructions:".bold())?;
                writeln!(out, "{}", recipe.instructions)?;
            }
        }
        Ok(())
    }

    pub fn delete(&mut self, name: Option<&str>, out: &mut dyn Write) -> anyhow::Result<()> {
        let Some(name) = name else { bail!(NO_SELECTION) };
        if !self.store.delete(name)? {
            bail!(DELETE_REFUSED);
        }
        match self.format {
            OutputFormat::Json => writeln!(out, "{}", json!({ "deleted": name }))?,
            OutputFormat::Text => writeln!(out, "{} Deleted {}", "✓".green().bold(), name.yellow())?,
        }
        Ok(())
    }

    /// Run the benchmark against a copy of the live recipes. `None` uses
    /// the configured default count.
    pub fn bench(&mut self, count: Option<&str>, chart: bool, out: &mut dyn Write) -> anyhow::Result<()> {
        let count = match count {
            Some(input) => TestCount::parse(input)?,
            None => {
                let configured = self.config.default_test_count;
                let value = i64::try_from(configured)
                    .map_err(|_| BenchError::NotANumber(configured.to_string()))?;
                TestCount::try_from(value)?
            }
        };
        let report = self.harness.run(self.store.recipes(), count)?;

        match self.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&report.summary())?)?,
            OutputFormat::Text => {
                writeln!(out, "{}", "Results - Average time per operation".bold())?;
                for line in report.average_lines() {
                    writeln!(out, "  {line}")?;
                }
                if chart {
                    writeln!(out)?;
                    let chart = BarChart::totals(report).with_width(self.config.chart_width);
                    write!(out, "{}", chart.render().cyan())?;
                }
            }
        }
        self.harness.dismiss();
        Ok(())
    }
}
