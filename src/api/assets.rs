use axum::{
    body::Body,
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use crate::constants::DEFAULT_PICTURE;

#[derive(RustEmbed)]
#[folder = "assets"]
struct Asset;

/// Bundled placeholder shown for recipes without a photo.
pub(crate) fn default_picture() -> Option<Vec<u8>> {
    Asset::get(DEFAULT_PICTURE).map(|file| file.data.into_owned())
}

pub async fn serve_asset(Path(path): Path<String>) -> Response {
    match Asset::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref())],
                Body::from(content.data),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
