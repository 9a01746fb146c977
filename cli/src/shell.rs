//! Interactive session: search, open a recipe, ask about it, change it.
//!
//! The shell owns one [`SessionStore`] for its whole lifetime, so repeated
//! searches in the same session are answered from the cache.

use anyhow::Result;
use cookbook_core::{
    InfoKey, InfoKind, RecipeGateway, RecipePage, SearchPage, SearchQuery, SearchStyle,
    SessionStore,
};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::{render_recipe, render_suggestions, render_thread};

const HELP: &str = "\
Commands:
  search <ingredients or craving>   suggest recipes
  style [<name>]                    toggle a style filter, or list them
  open <n>                          open suggestion n
  show                              print the open recipe again
  ask ingredient|step <n>           ask about an ingredient or step
  followup ingredient|step <n> <q>  ask a follow-up on that answer
  discard ingredient|step <n>       remove that answer
  change <request>                  change the whole recipe
  help                              show this help
  quit                              leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Style(Option<SearchStyle>),
    Open(usize),
    Show,
    Ask(InfoKey),
    FollowUp(InfoKey, String),
    Discard(InfoKey),
    Change(String),
    Help,
    Quit,
}

/// Parse `ingredient 2` into a zero-based key.
fn parse_key<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<InfoKey, String> {
    let kind = words
        .next()
        .and_then(InfoKind::from_label)
        .ok_or_else(|| "expected \"ingredient\" or \"step\"".to_string())?;
    let index = parse_number(words.next())?;
    Ok(InfoKey { kind, index })
}

/// Parse a 1-based number into a 0-based index.
fn parse_number(word: Option<&str>) -> Result<usize, String> {
    match word.and_then(|w| w.parse::<usize>().ok()) {
        Some(n) if n >= 1 => Ok(n - 1),
        _ => Err("expected a number starting at 1".to_string()),
    }
}

fn rest_of<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words.collect::<Vec<_>>().join(" ")
}

pub fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Err("empty command".to_string());
    };

    match command.to_lowercase().as_str() {
        "search" | "s" => Ok(ShellCommand::Search(rest_of(words))),
        "style" => {
            let name = rest_of(words);
            if name.is_empty() {
                Ok(ShellCommand::Style(None))
            } else {
                SearchStyle::from_label(&name)
                    .map(|s| ShellCommand::Style(Some(s)))
                    .ok_or_else(|| format!("unknown style \"{}\"", name))
            }
        }
        "open" | "o" => parse_number(words.next()).map(ShellCommand::Open),
        "show" => Ok(ShellCommand::Show),
        "ask" => parse_key(&mut words).map(ShellCommand::Ask),
        "followup" | "follow-up" => {
            let key = parse_key(&mut words)?;
            let question = rest_of(words);
            if question.is_empty() {
                return Err("expected a question".to_string());
            }
            Ok(ShellCommand::FollowUp(key, question))
        }
        "discard" => parse_key(&mut words).map(ShellCommand::Discard),
        "change" => {
            let request = rest_of(words);
            if request.is_empty() {
                return Err("expected a change request".to_string());
            }
            Ok(ShellCommand::Change(request))
        }
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
        other => Err(format!("unknown command \"{}\" (try \"help\")", other)),
    }
}

pub struct Shell {
    gateway: RecipeGateway,
    store: SessionStore,
    search: SearchPage,
    detail: Option<RecipePage>,
    styles: Vec<SearchStyle>,
}

impl Shell {
    pub fn new(gateway: RecipeGateway) -> Self {
        Self {
            gateway,
            store: SessionStore::new(),
            search: SearchPage::new(),
            detail: None,
            styles: Vec::new(),
        }
    }

    /// Read commands from stdin until `quit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "What do you feel like cooking? (\"help\" for commands)")?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            write!(stdout, "> ")?;
            stdout.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => self.handle(command, &mut stdout).await?,
                Err(message) => writeln!(stdout, "{}", message)?,
            }
        }
        Ok(())
    }

    /// Execute one command. Only output errors are returned; failed calls
    /// are reported to the user and the session continues.
    pub async fn handle(&mut self, command: ShellCommand, out: &mut impl Write) -> Result<()> {
        match command {
            ShellCommand::Search(keyword) => {
                let query = SearchQuery::new(&keyword, &self.styles);
                writeln!(out, "Searching for recipes...")?;
                match self
                    .search
                    .perform(&self.gateway, &mut self.store, query)
                    .await
                {
                    Ok(view) if !view.recipes.is_empty() => {
                        writeln!(out, "I got plenty of options for you...")?;
                        write!(out, "{}", render_suggestions(view.recipes))?;
                    }
                    Ok(_) => writeln!(out, "Error occurred.")?,
                    Err(err) => {
                        tracing::error!(error = %err, "Search failed");
                        writeln!(out, "Error occurred.")?;
                    }
                }
            }
            ShellCommand::Style(None) => {
                for style in SearchStyle::ALL {
                    let mark = if self.styles.contains(style) { "x" } else { " " };
                    writeln!(out, "[{}] {}", mark, style)?;
                }
            }
            ShellCommand::Style(Some(style)) => {
                if let Some(pos) = self.styles.iter().position(|s| *s == style) {
                    self.styles.remove(pos);
                    writeln!(out, "Style {} off", style)?;
                } else {
                    self.styles.push(style);
                    writeln!(out, "Style {} on", style)?;
                }
            }
            ShellCommand::Open(index) => {
                if self.search.select(&mut self.store, index).is_none() {
                    writeln!(out, "No suggestion {} (search first)", index + 1)?;
                    return Ok(());
                }
                writeln!(out, "Loading recipe...")?;
                let mut page = RecipePage::new();
                match page.load(&self.gateway, &self.store).await {
                    Ok(true) => {
                        if let Some(recipe) = page.recipe() {
                            write!(out, "{}", render_recipe(recipe))?;
                        }
                    }
                    Ok(false) => writeln!(out, "No detailed recipe generated yet.")?,
                    Err(err) => {
                        tracing::error!(error = %err, "Error generating recipe");
                        writeln!(out, "Failed to generate recipe")?;
                    }
                }
                self.detail = Some(page);
            }
            ShellCommand::Show => match self.detail.as_ref().and_then(|p| p.recipe()) {
                Some(recipe) => {
                    write!(out, "{}", render_recipe(recipe))?;
                    if let Some(page) = &self.detail {
                        for (key, thread) in page.additional_info() {
                            writeln!(out, "{} {}:", key.kind.as_str(), key.index + 1)?;
                            write!(out, "{}", render_thread(thread))?;
                        }
                    }
                }
                None => writeln!(out, "No recipe selected.")?,
            },
            ShellCommand::Ask(key) => {
                let Some(page) = self.detail.as_mut() else {
                    writeln!(out, "No recipe selected.")?;
                    return Ok(());
                };
                match page.ask(&self.gateway, key).await {
                    Ok(Some(thread)) => write!(out, "{}", render_thread(thread))?,
                    Ok(None) => writeln!(out, "Sorry, something went wrong.")?,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to fetch additional info");
                        writeln!(out, "Sorry, something went wrong.")?;
                    }
                }
            }
            ShellCommand::FollowUp(key, question) => {
                let Some(page) = self.detail.as_mut() else {
                    writeln!(out, "No recipe selected.")?;
                    return Ok(());
                };
                if page.info(key).is_none() {
                    writeln!(out, "Ask about {} {} first.", key.kind.as_str(), key.index + 1)?;
                    return Ok(());
                }
                match page.follow_up(&self.gateway, key, &question).await {
                    Ok(Some(answer)) => writeln!(out, "> {}", answer)?,
                    Ok(None) => writeln!(out, "Sorry, something went wrong.")?,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to fetch follow-up info");
                        writeln!(out, "Sorry, something went wrong.")?;
                    }
                }
            }
            ShellCommand::Discard(key) => {
                let removed = self
                    .detail
                    .as_mut()
                    .map(|page| page.discard(key))
                    .unwrap_or(false);
                if !removed {
                    writeln!(out, "Nothing to discard for {} {}", key.kind.as_str(), key.index + 1)?;
                }
            }
            ShellCommand::Change(request) => {
                let Some(page) = self.detail.as_mut() else {
                    writeln!(out, "No recipe selected.")?;
                    return Ok(());
                };
                writeln!(out, "Loading recipe...")?;
                match page.apply_change(&self.gateway, &request).await {
                    Ok(true) => {
                        if let Some(recipe) = page.recipe() {
                            write!(out, "{}", render_recipe(recipe))?;
                        }
                    }
                    Ok(false) => writeln!(out, "Failed to regenerate recipe")?,
                    Err(err) => {
                        tracing::error!(error = %err, "Error regenerating recipe");
                        writeln!(out, "Failed to regenerate recipe")?;
                    }
                }
            }
            ShellCommand::Help => writeln!(out, "{}", HELP)?,
            ShellCommand::Quit => {}
        }
        Ok(())
    }
}
