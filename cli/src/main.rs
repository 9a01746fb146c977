mod recipe_file;
mod render;
mod shell;
mod telemetry;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use cookbook_core::{Outcome, RecipeGateway, RecipeSeed, SearchQuery, SearchStyle};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(about = "Recipe ideas from whatever is in your fridge", long_about = None)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn parse_style(s: &str) -> Result<SearchStyle, String> {
    SearchStyle::from_label(s).ok_or_else(|| {
        let known: Vec<&str> = SearchStyle::ALL.iter().map(|s| s.as_str()).collect();
        format!("unknown style (expected one of: {})", known.join(", "))
    })
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest recipes for some ingredients or a craving
    Search {
        /// Ingredients, dish name, or craving
        keyword: String,
        /// Style filter; repeat for several
        #[arg(long = "style", value_parser = parse_style)]
        styles: Vec<SearchStyle>,
    },
    /// Generate a full recipe from a title and ingredients
    Generate {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Ingredient; repeat for several
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        /// Also write the recipe as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Ask about one ingredient or step of a saved recipe
    Ask {
        /// The ingredient or step text
        text: String,
        /// Recipe JSON file
        #[arg(long)]
        recipe: PathBuf,
    },
    /// Ask a follow-up question about an earlier answer
    FollowUp {
        question: String,
        /// Recipe JSON file
        #[arg(long)]
        recipe: PathBuf,
        /// The earlier answer
        #[arg(long)]
        previous: String,
    },
    /// Apply a change to a saved recipe
    Regenerate {
        /// What to change, e.g. "make it vegan"
        change: String,
        /// Recipe JSON file
        #[arg(long)]
        recipe: PathBuf,
        /// Write the new recipe here (default: print only)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Interactive session
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_telemetry(cli.verbose);

    let gateway = RecipeGateway::from_env().context("Cannot start without an API key")?;
    tracing::debug!(
        provider = gateway.provider().provider_name(),
        model = gateway.provider().model_name(),
        "Gateway ready"
    );

    match cli.command {
        Commands::Search { keyword, styles } => {
            let query = SearchQuery::new(&keyword, &styles);
            if query.is_empty() {
                bail!("Search keyword is empty");
            }
            let outcome = gateway
                .search_recipes(&query)
                .await
                .context("Recipe search failed")?;
            match outcome {
                Outcome::Parsed(recipes) if !recipes.is_empty() => {
                    print!("{}", render::render_suggestions(&recipes));
                }
                _ => bail!("Error occurred."),
            }
        }
        Commands::Generate {
            title,
            description,
            ingredients,
            output,
        } => {
            let seed = RecipeSeed {
                title,
                description,
                ingredients,
            };
            let outcome = gateway
                .generate_recipe(&seed)
                .await
                .context("Failed to generate recipe")?;
            let Outcome::Parsed(recipe) = outcome else {
                bail!("Failed to generate recipe");
            };
            print!("{}", render::render_recipe(&recipe));
            if let Some(path) = output {
                recipe_file::save_recipe(&path, &recipe)?;
            }
        }
        Commands::Ask { text, recipe } => {
            let recipe = recipe_file::load_recipe(&recipe)?;
            let outcome = gateway
                .ask_about_ingredient_or_step(&text, &recipe)
                .await
                .context("Failed to fetch additional info")?;
            match outcome {
                Outcome::Parsed(answer) => println!("{}", answer),
                Outcome::Invalid(_) => bail!("Sorry, something went wrong."),
            }
        }
        Commands::FollowUp {
            question,
            recipe,
            previous,
        } => {
            let recipe = recipe_file::load_recipe(&recipe)?;
            let outcome = gateway
                .ask_follow_up(&question, &recipe, &previous)
                .await
                .context("Failed to fetch follow-up info")?;
            match outcome {
                Outcome::Parsed(answer) => println!("{}", answer),
                Outcome::Invalid(_) => bail!("Sorry, something went wrong."),
            }
        }
        Commands::Regenerate {
            change,
            recipe,
            output,
        } => {
            if change.trim().is_empty() {
                bail!("Change request is empty");
            }
            let original = recipe_file::load_recipe(&recipe)?;
            let outcome = gateway
                .regenerate_recipe(&original, &change)
                .await
                .context("Failed to regenerate recipe")?;
            let Outcome::Parsed(updated) = outcome else {
                bail!("Failed to regenerate recipe");
            };
            print!("{}", render::render_recipe(&updated));
            if let Some(path) = output {
                recipe_file::save_recipe(&path, &updated)?;
            }
        }
        Commands::Shell => {
            shell::Shell::new(gateway).run().await?;
        }
    }

    Ok(())
}
