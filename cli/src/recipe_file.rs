//! Reading and writing recipes as JSON files.

use anyhow::{Context, Result};
use cookbook_core::Recipe;
use std::fs;
use std::path::Path;

pub fn load_recipe(path: &Path) -> Result<Recipe> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe file {}", path.display()))?;
    cookbook_core::schema::parse_recipe(&content)
        .with_context(|| format!("{} is not a valid recipe", path.display()))
}

pub fn save_recipe(path: &Path, recipe: &Recipe) -> Result<()> {
    let json = serde_json::to_string_pretty(recipe)?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write recipe file {}", path.display()))
}
