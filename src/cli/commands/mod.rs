mod check_config;
mod list;

pub use check_config::cmd_check_config;
pub use list::cmd_list_recipes;
