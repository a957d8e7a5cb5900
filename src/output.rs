use std::io::{self, Write};

use crate::model::Recipe;

const HEADER_RULE: &str = "----------------------------------";
const RECORD_RULE_WIDTH: usize = 79;

/// Print search results for `query` to `out`.
///
/// Field values are written exactly as received.
pub fn render_results<W: Write>(out: &mut W, query: &str, recipes: &[Recipe]) -> io::Result<()> {
    if recipes.is_empty() {
        writeln!(out, "No recipes found for \"{query}\" :(")?;
        return Ok(());
    }

    writeln!(out, "Found {} recipes for \"{}\":", recipes.len(), query)?;
    writeln!(out, "{HEADER_RULE}")?;
    for recipe in recipes {
        render_recipe(out, recipe)?;
    }
    Ok(())
}

fn render_recipe<W: Write>(out: &mut W, recipe: &Recipe) -> io::Result<()> {
    write!(out, "Title: {}\n\n", recipe.title)?;
    write!(out, "Ingredients: {}\n\n", recipe.ingredients)?;
    write!(out, "Servings: {}\n\n", recipe.servings)?;
    write!(out, "Instructions: {}\n\n", recipe.instructions)?;
    writeln!(out, "{}", "=".repeat(RECORD_RULE_WIDTH))
}
