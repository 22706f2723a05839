use super::{attr, text};
use crate::models::recipe::Category;

/// Wraps `body` in the shared document shell with navigation and search box.
#[must_use]
pub fn page(title: &str, query: &str, body: &str) -> String {
    let nav: String = Category::ALL
        .iter()
        .map(|c| format!(r#"<a href="{}">{}</a>"#, c.route(), c.heading()))
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | Cookbook</title>
    <link rel="stylesheet" href="/assets/style.css">
</head>
<body>
    <header>
        <a class="brand" href="/">Cookbook</a>
        <nav>
        <a href="/all_recipes">All recipes</a>
        {nav}
        <a href="/create">Add a recipe</a>
        </nav>
        <form class="search" action="/search" method="get">
            <input type="search" name="q" value="{query}" placeholder="Search recipes">
            <button type="submit">Search</button>
        </form>
    </header>
    <main>
{body}
    </main>
    <script src="/assets/app.js"></script>
</body>
</html>
"#,
        title = text(title),
        query = attr(query),
    )
}
