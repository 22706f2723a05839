//! List recipes command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_recipes(config: &Config, category: Option<&str>) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let recipes = match category {
        Some(category) => store.list_recipes_in_category(category).await?,
        None => store.list_recipes_by_title().await?,
    };

    if recipes.is_empty() {
        println!("No recipes found.");
        println!();
        println!("Start the server with `cookbook serve` and add one at /create");
        return Ok(());
    }

    println!("Recipes ({} total)", recipes.len());
    println!("{:-<70}", "");

    for recipe in recipes {
        let photo = if recipe.image.is_some() { "📷" } else { "•" };
        println!("{} {}", photo, recipe.title_or_default());
        println!(
            "  ID: {} | Category: {}",
            recipe.id,
            recipe.category.as_deref().unwrap_or("-")
        );
    }

    println!();
    println!("Legend: 📷 has photo");

    Ok(())
}
