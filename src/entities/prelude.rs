pub use super::recipe::Entity as Recipes;
