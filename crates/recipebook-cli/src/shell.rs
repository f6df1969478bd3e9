use std::io::{BufRead, Write};

use colored::Colorize;
use recipebook_types::RecipeDraft;
use tracing::debug;

use crate::commands::{App, NO_SELECTION};

const HELP: &str = "\
Commands:
  refresh            reload recipes from the backing file
  add                add a recipe (prompts for name, ingredients, instructions)
  view <n|name>      show a recipe
  delete <n|name>    delete a recipe
  perf [count]       run the map vs list performance test
  help               show this help
  quit               leave the shell";

/// Interactive recipe browser.
///
/// Shows a numbered recipe list and reads one command per line. A number
/// selects the recipe at that position in the list as last displayed.
/// Errors are printed and the shell keeps running.
pub struct Shell<'a, R, W> {
    app: &'a mut App,
    input: R,
    out: W,
    listing: Vec<String>,
}

enum Flow {
    Continue,
    Quit,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(app: &'a mut App, input: R, out: W) -> Self {
        Self {
            app,
            input,
            out,
            listing: Vec::new(),
        }
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        writeln!(self.out, "{}", "Recipe Manager".bold())?;
        self.refresh()?;
        loop {
            let Some(line) = self.prompt("recipebook> ")? else { break };
            match self.dispatch(line.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => writeln!(self.out, "{} {e}", "Error:".red().bold())?,
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> anyhow::Result<Flow> {
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (line, None),
        };
        debug!(command, ?arg, "shell command");

        match command {
            "" => {}
            "refresh" | "r" => self.refresh()?,
            "add" | "a" => self.add()?,
            "view" | "v" => {
                let name = self.select(arg)?;
                self.app.view(Some(&name), &mut self.out)?;
            }
            "delete" | "d" => {
                let name = self.select(arg)?;
                self.app.delete(Some(&name), &mut self.out)?;
                self.refresh()?;
            }
            "perf" | "p" => self.perf(arg)?,
            "help" | "h" | "?" => writeln!(self.out, "{HELP}")?,
            "quit" | "q" | "exit" => return Ok(Flow::Quit),
            other => anyhow::bail!("unknown command {other:?} (try `help`)"),
        }
        Ok(Flow::Continue)
    }

    /// Reload from disk and redraw the numbered list.
    fn refresh(&mut self) -> anyhow::Result<()> {
        self.app.refresh();
        self.listing = self.app.names();
        if self.listing.is_empty() {
            writeln!(self.out, "  (no recipes)")?;
        }
        for (i, name) in self.listing.iter().enumerate() {
            writeln!(self.out, "  {:>3}  {}", (i + 1).to_string().dimmed(), name)?;
        }
        Ok(())
    }

    /// Resolve a selection: a 1-based position in the current listing, or
    /// a recipe name.
    fn select(&self, arg: Option<&str>) -> anyhow::Result<String> {
        let Some(arg) = arg else { anyhow::bail!(NO_SELECTION) };
        if let Ok(position) = arg.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|i| self.listing.get(i))
                .cloned()
                .ok_or_else(|| anyhow::anyhow!(NO_SELECTION));
        }
        Ok(arg.to_string())
    }

    /// Prompt for the three add-form fields. End of input cancels.
    fn add(&mut self) -> anyhow::Result<()> {
        let Some(name) = self.prompt("Name: ")? else { return Ok(()) };
        let Some(ingredients) = self.prompt("Ingredients (comma-separated): ")? else { return Ok(()) };
        let Some(instructions) = self.prompt("Instructions: ")? else { return Ok(()) };

        let draft = RecipeDraft::from_fields(&name, &ingredients, &instructions);
        self.app.add(draft, &mut self.out)?;
        self.refresh()
    }

    fn perf(&mut self, arg: Option<&str>) -> anyhow::Result<()> {
        let default = self.app.config().default_test_count.to_string();
        let input = match arg {
            Some(count) => count.to_string(),
            None => {
                let question = format!("Enter number of tests [{default}]: ");
                match self.prompt(&question)? {
                    Some(answer) if !answer.trim().is_empty() => answer,
                    Some(_) => default,
                    None => return Ok(()),
                }
            }
        };
        self.app.bench(Some(&input), true, &mut self.out)
    }

    /// Print `text` and read one line without its line ending. `None` at
    /// end of input.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::AppConfig;

    fn app_in(dir: &tempfile::TempDir) -> App {
        colored::control::set_override(false);
        let mut config = AppConfig::default();
        config.recipes_path = dir.path().join("recipes.json");
        config.default_test_count = 2;
        config.bench.repeat = 1;
        config.bench.number = 1;
        App::open(config, OutputFormat::Text)
    }

    fn run_script(app: &mut App, script: &str) -> String {
        let mut out = Vec::new();
        Shell::new(app, script.as_bytes(), &mut out).run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_view_delete_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        let text = run_script(
            &mut app,
            "add\nPasta\nPasta, Water\nBoil water, add pasta\nview 1\ndelete Pasta\nquit\n",
        );

        assert!(text.contains("Added Pasta"));
        assert!(text.contains("    1  Pasta"));
        assert!(text.contains("Ingredients:\nPasta\nWater\n"));
        assert!(text.contains("Deleted Pasta"));
        assert!(app.names().is_empty());
    }

    #[test]
    fn missing_selection_is_an_error_not_a_crash() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        let text = run_script(&mut app, "view\ndelete 3\nhelp\n");

        assert_eq!(text.matches(NO_SELECTION).count(), 2);
        assert!(text.contains("Commands:"));
    }

    #[test]
    fn duplicate_add_keeps_running() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        let text = run_script(&mut app, "add\nTea\nLeaves\nSteep\nadd\nTea\nLeaves\nSteep\nrefresh\n");

        assert!(text.contains("It may already exist."));
        assert_eq!(app.names(), vec!["Tea"]);
    }

    #[test]
    fn add_cancelled_by_end_of_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        run_script(&mut app, "add\nHalf");
        assert!(app.names().is_empty());
    }

    #[test]
    fn perf_uses_default_count_and_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        let text = run_script(&mut app, "perf -5\nperf\n\n");

        assert!(text.contains("Number of tests must be a positive integer"));
        assert!(text.contains("Enter number of tests [2]: "));
        assert!(text.contains("Add Operation - Map:"));
    }

    #[test]
    fn unknown_command_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        let text = run_script(&mut app, "bake\n");
        assert!(text.contains("unknown command \"bake\""));
    }

    #[test]
    fn select_by_position_and_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        let mut shell = Shell::new(&mut app, &b""[..], Vec::new());
        shell.listing = vec!["Soup".into(), "Bread".into()];

        assert_eq!(shell.select(Some("2")).unwrap(), "Bread");
        assert_eq!(shell.select(Some("Soup")).unwrap(), "Soup");
        assert!(shell.select(Some("0")).is_err());
        assert!(shell.select(Some("3")).is_err());
        assert!(shell.select(None).is_err());
    }
}
