pub mod prelude;

pub mod recipe;
