/// Subdirectory of the static root that holds uploaded photos.
pub const PICTURES_DIR: &str = "pictures";

/// Shown by the JSON endpoints when a recipe has no photo.
pub const DEFAULT_PICTURE: &str = "default.jpg";

pub const STATIC_URL_PREFIX: &str = "/static";

pub mod messages {

    pub const CREATE_FAILED: &str = "Something went wrong while saving the recipe. Try again.";

    pub const DELETE_FAILED: &str = "Cannot delete what does not exist.";

    pub const UPDATE_FAILED: &str = "Something is off, but it is not my fault. Try again.";

    pub const NO_RECIPES: &str = "No recipes";

    pub const MISSING_CATEGORY: &str = "Category is not specified";
}
