// tests/support/builders.rs
use image::{ImageFormat, RgbImage};
use std::io::Cursor;

const BOUNDARY: &str = "catalog-test-boundary";

/// Hand-assembled `multipart/form-data` body.
#[derive(Debug, Default)]
pub struct MultipartBody {
    buffer: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.buffer.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.buffer.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.buffer.extend_from_slice(data);
        self.buffer.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.buffer
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.buffer
    }
}

fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).expect("encode test image");
    out.into_inner()
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Png)
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Jpeg)
}

/// Registration form that passes every check; tweak fields to break it.
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password1: String,
    pub password2: String,
    pub image: Option<(String, String, Vec<u8>)>,
}

impl RegistrationForm {
    pub fn valid(username: &str) -> Self {
        Self {
            username: username.into(),
            email: format!("{username}@example.com"),
            first_name: "olena".into(),
            last_name: "petrenko".into(),
            password1: "Tr1cky-Pass!".into(),
            password2: "Tr1cky-Pass!".into(),
            image: Some(("avatar.png".into(), "image/png".into(), png_bytes(40, 20))),
        }
    }

    pub fn password(mut self, password: &str) -> Self {
        self.password1 = password.into();
        self.password2 = password.into();
        self
    }

    pub fn image(mut self, file_name: &str, content_type: &str, data: Vec<u8>) -> Self {
        self.image = Some((file_name.into(), content_type.into(), data));
        self
    }

    pub fn without_image(mut self) -> Self {
        self.image = None;
        self
    }

    pub fn into_multipart(self) -> MultipartBody {
        let body = MultipartBody::new()
            .text("username", &self.username)
            .text("email", &self.email)
            .text("first_name", &self.first_name)
            .text("last_name", &self.last_name)
            .text("password1", &self.password1)
            .text("password2", &self.password2);
        match &self.image {
            Some((file_name, content_type, data)) => {
                body.file("image", file_name, content_type, data)
            }
            None => body,
        }
    }
}
