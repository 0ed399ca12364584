//! Non-interactive subcommands

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use recipe_book::{Config, Recipe, RecipeBook, RecipeDraft, RecipeId, Stamp, SystemClock};

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal recipe book", long_about = None)]
pub struct Cli {
    /// Directory holding the database, config and logs (default: ~/.recipe-book)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep recipes in memory only; the recipe database is not opened
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Runs the terminal UI when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every recipe in insertion order
    List(ListArgs),
    /// Add a recipe
    Add(AddArgs),
    /// Remove a recipe by id
    Remove(RemoveArgs),
    /// Print the effective configuration
    ShowConfig,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    /// Comma-separated list
    #[arg(long)]
    pub ingredients: String,

    #[arg(long)]
    pub instructions: String,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    pub id: RecipeId,
}

pub fn run_list(book: &RecipeBook, args: &ListArgs) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, book.recipes())?;
        writeln!(out)?;
        return Ok(());
    }

    if book.recipes().is_empty() {
        writeln!(out, "No recipes yet.")?;
        return Ok(());
    }
    for recipe in book.recipes() {
        write_recipe(&mut out, recipe)?;
    }
    Ok(())
}

fn write_recipe(out: &mut impl Write, recipe: &Recipe) -> std::io::Result<()> {
    writeln!(out, "{}  {}", recipe.id, recipe.name)?;
    writeln!(out, "    Ingredients: {}", recipe.ingredients_text())?;
    if let Some(stamp) = &recipe.display_id {
        writeln!(out, "    -- Updated {stamp} --")?;
    }
    Ok(())
}

pub fn run_add(book: &mut RecipeBook, args: &AddArgs) -> Result<()> {
    let draft = RecipeDraft::new(&args.name, &args.ingredients, &args.instructions);
    let outcome = book.submit(draft, Stamp::from_clock(&SystemClock))?;
    println!("Added recipe {}: {}", outcome.id(), args.name);
    Ok(())
}

pub fn run_remove(book: &mut RecipeBook, args: &RemoveArgs) -> Result<()> {
    if book.remove(args.id) == 0 {
        println!("No recipe with id {}", args.id);
    } else {
        println!("Removed recipe {}", args.id);
    }
    Ok(())
}

pub fn run_show_config(config: &Config) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
