use super::{attr, page, text};
use crate::models::recipe::{Category, Recipe};
use crate::services::ImageService;

#[must_use]
pub fn home() -> String {
    let body = r#"        <section class="hero">
            <h1>Welcome to the cookbook</h1>
            <p>Browse dishes by category, search for a favourite or let chance decide.</p>
            <a class="button" href="/create">Add a recipe</a>
        </section>
        <section class="random" data-random-recipe>
            <h2>Not sure what to cook?</h2>
            <button type="button" data-random-trigger>Surprise me</button>
            <article data-random-result hidden></article>
        </section>"#;

    page("Home", "", body)
}

#[must_use]
pub fn create_form() -> String {
    let body = format!(
        r#"        <h1>New recipe</h1>
{}"#,
        recipe_form("/create", None, "Save recipe")
    );
    page("New recipe", "", &body)
}

#[must_use]
pub fn update_form(recipe: &Recipe) -> String {
    let action = format!("/recipe/{}/update", recipe.id);
    let body = format!(
        r#"        <h1>Edit recipe</h1>
{}"#,
        recipe_form(&action, Some(recipe), "Update recipe")
    );
    page("Edit recipe", "", &body)
}

/// Listing used by the all-recipes page and the category pages.
#[must_use]
pub fn recipe_list(heading: &str, recipes: &[Recipe]) -> String {
    let body = format!(
        "        <h1>{}</h1>\n{}",
        text(heading),
        recipe_cards(recipes)
    );
    page(heading, "", &body)
}

#[must_use]
pub fn search_results(query: &str, recipes: &[Recipe]) -> String {
    let heading = if query.is_empty() {
        "Search".to_string()
    } else {
        format!("Results for \u{201c}{query}\u{201d}")
    };

    let body = format!(
        "        <h1>{}</h1>\n{}",
        text(&heading),
        recipe_cards(recipes)
    );
    page(&heading, query, &body)
}

#[must_use]
pub fn recipe_detail(recipe: &Recipe) -> String {
    let title = recipe.title_or_default();
    let image = recipe.image.as_deref().map_or_else(String::new, |name| {
        format!(
            r#"        <img class="photo" src="{}" alt="{}">
"#,
            attr(&ImageService::public_url(Some(name))),
            attr(title)
        )
    });

    let body = format!(
        r#"        <article class="recipe">
            <h1>{title}</h1>
            <p class="category">{category}</p>
{image}            <p class="description">{description}</p>
            <h2>Instructions</h2>
            <div class="instructions">{instructions}</div>
            <p class="actions">
                <a href="/recipe/{id}/update">Edit</a>
                <a href="/recipe/{id}/delete" data-confirm="Delete this recipe?">Delete</a>
            </p>
        </article>"#,
        id = recipe.id,
        title = text(title),
        category = text(recipe.category.as_deref().unwrap_or("")),
        description = text(recipe.description.as_deref().unwrap_or("")),
        instructions = text(recipe.instructions.as_deref().unwrap_or("")),
    );

    page(title, "", &body)
}

fn recipe_cards(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return r#"        <p class="empty">No recipes yet.</p>"#.to_string();
    }

    let items: String = recipes
        .iter()
        .map(|recipe| {
            format!(
                r#"            <li class="card">
                <img src="{src}" alt="">
                <a href="/recipe_detail/{id}">{title}</a>
                <p>{description}</p>
            </li>
"#,
                id = recipe.id,
                src = attr(&ImageService::public_url(recipe.image.as_deref())),
                title = text(recipe.title_or_default()),
                description = text(recipe.description.as_deref().unwrap_or("")),
            )
        })
        .collect();

    format!("        <ul class=\"recipes\">\n{items}        </ul>")
}

fn recipe_form(action: &str, recipe: Option<&Recipe>, submit: &str) -> String {
    let field = |value: Option<&Option<String>>| {
        value
            .and_then(|v| v.as_deref())
            .map(attr)
            .unwrap_or_default()
    };
    let title = field(recipe.map(|r| &r.title));
    let description = field(recipe.map(|r| &r.description));
    let category = field(recipe.map(|r| &r.category));
    let instructions = recipe
        .and_then(|r| r.instructions.as_deref())
        .map(text)
        .unwrap_or_default();

    let options: String = Category::ALL
        .iter()
        .map(|c| format!(r#"<option value="{}">{}</option>"#, c.as_str(), c.heading()))
        .collect();

    let current_photo = recipe
        .and_then(|r| r.image.as_deref())
        .map(|name| {
            format!(
                r#"            <img class="thumb" src="{}" alt="Current photo">
"#,
                attr(&ImageService::public_url(Some(name)))
            )
        })
        .unwrap_or_default();

    format!(
        r#"        <form action="{action}" method="post" enctype="multipart/form-data">
            <label>Title <input type="text" name="title" maxlength="50" value="{title}"></label>
            <label>Description <input type="text" name="description" maxlength="300" value="{description}"></label>
            <label>Instructions <textarea name="instructions" rows="10">{instructions}</textarea></label>
            <label>Category <input type="text" name="category" list="categories" maxlength="50" value="{category}"></label>
            <datalist id="categories">{options}</datalist>
{current_photo}            <label>Photo <input type="file" name="photo" accept="image/*"></label>
            <button type="submit">{submit}</button>
        </form>"#,
        action = attr(action),
        submit = text(submit),
    )
}
