//! Server-rendered HTML pages.
//!
//! Pages are assembled with `format!` and every piece of user data goes through
//! `html_escape` before it is interpolated.

mod layout;
mod recipes;

pub use layout::page;
pub use recipes::{
    create_form, home, recipe_detail, recipe_list, search_results, update_form,
};

use html_escape::{encode_double_quoted_attribute, encode_text};

fn text(value: &str) -> String {
    encode_text(value).into_owned()
}

fn attr(value: &str) -> String {
    encode_double_quoted_attribute(value).into_owned()
}
