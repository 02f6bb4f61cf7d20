// src/presentation/http/multipart.rs
use crate::application::{error::ApplicationError, uploads::UploadedFile};
use crate::presentation::http::error::{HttpError, HttpResult};
use axum::extract::{Multipart, multipart::MultipartError};
use std::collections::HashMap;

/// A `multipart/form-data` body split into text fields and uploaded files.
///
/// A file part sent with an empty file name is what browsers submit for an
/// untouched file input, so it is treated as absent.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart) -> HttpResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(rejected)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match field.file_name().map(str::to_owned) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_owned);
                    let data = field.bytes().await.map_err(rejected)?;
                    if file_name.is_empty() && data.is_empty() {
                        continue;
                    }
                    form.files.insert(
                        name,
                        UploadedFile {
                            file_name,
                            content_type,
                            data,
                        },
                    );
                }
                None => {
                    let value = field.text().await.map_err(rejected)?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    pub fn text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Text field that must be present; a missing one reads as empty so the
    /// form validation reports it alongside the other fields.
    pub fn required_text(&mut self, name: &str) -> String {
        self.text(name).unwrap_or_default()
    }

    pub fn file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    /// Checkbox-style flag: `true`/`on`/`1` or `false`/`off`/`0`/blank.
    pub fn flag(&mut self, name: &str) -> HttpResult<Option<bool>> {
        let Some(raw) = self.text(name) else {
            return Ok(None);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "1" | "yes" => Ok(Some(true)),
            "false" | "off" | "0" | "no" | "" => Ok(Some(false)),
            _ => Err(HttpError::bad_request(format!(
                "field '{name}' must be a boolean"
            ))),
        }
    }

    /// Optional numeric id; blank counts as absent. Anything unparsable is
    /// reported as a form error against `name` with `message`.
    pub fn id(&mut self, name: &str, message: &str) -> HttpResult<Option<i64>> {
        match self.text(name).as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| HttpError::from_error(ApplicationError::field(name, message))),
        }
    }
}

fn rejected(err: MultipartError) -> HttpError {
    HttpError::with_status(err.status(), err.body_text())
}
