use axum::{
    Form,
    extract::{FromRequest, Multipart, Request},
    http::header,
};

use super::ApiError;
use crate::models::recipe::{PhotoUpload, RecipeInput};

/// The create/update form: four text fields and an optional `photo` file.
///
/// Accepts `multipart/form-data` and `application/x-www-form-urlencoded`; the
/// latter never carries a photo. Every text field must be present (it may be
/// empty). A `photo` part with an empty filename means no file was chosen.
#[derive(Debug)]
pub struct RecipeForm {
    pub input: RecipeInput,
    pub photo: Option<PhotoUpload>,
}

impl<S> FromRequest<S> for RecipeForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_urlencoded(&req) {
            let Form(input) = Form::<RecipeInput>::from_request(req, state)
                .await
                .map_err(|e| ApiError::validation(e.body_text()))?;
            return Ok(Self { input, photo: None });
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::validation(e.body_text()))?;

        let mut title = None;
        let mut description = None;
        let mut instructions = None;
        let mut category = None;
        let mut photo = None;

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            tracing::warn!("Multipart read error: {}", e);
            ApiError::validation(format!("Failed to read multipart data: {}", e.body_text()))
        })? {
            let name = field.name().unwrap_or_default().to_string();

            if name == "photo" {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| {
                    ApiError::validation(format!("Failed to read photo: {}", e.body_text()))
                })?;
                if !filename.is_empty() {
                    photo = Some(PhotoUpload {
                        filename,
                        data: data.to_vec(),
                    });
                }
                continue;
            }

            let slot = match name.as_str() {
                "title" => &mut title,
                "description" => &mut description,
                "instructions" => &mut instructions,
                "category" => &mut category,
                _ => continue,
            };
            let value = field.text().await.map_err(|e| {
                ApiError::validation(format!("Failed to read field '{name}': {}", e.body_text()))
            })?;
            *slot = Some(value);
        }

        Ok(Self {
            input: RecipeInput {
                title: required("title", title)?,
                description: required("description", description)?,
                instructions: required("instructions", instructions)?,
                category: required("category", category)?,
            },
            photo,
        })
    }
}

fn required(name: &str, value: Option<String>) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::validation(format!("Missing form field '{name}'")))
}

fn is_urlencoded(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}
