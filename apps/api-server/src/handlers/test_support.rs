//! Shared fixtures for handler tests.

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::http::header;
use actix_web::test::TestRequest;
use actix_web::web;
use folio_core::domain::Post;
use folio_infra::{InMemoryPostRepository, LocalImageStore};
use tempfile::TempDir;

use crate::state::AppState;

const BOUNDARY: &str = "folio-test-boundary";

/// App state over an in-memory document and images in a temporary directory.
pub struct TestStorage {
    pub state: AppState,
    dir: TempDir,
}

impl TestStorage {
    pub fn with_ids(ids: &[&str]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let posts = ids
            .iter()
            .map(|id| Post {
                id: id.to_string(),
                title: format!("Post {id}"),
                excerpt: "excerpt".to_string(),
                content: "content".to_string(),
                image_urls: Vec::new(),
            })
            .collect();

        let repo = Arc::new(InMemoryPostRepository::new(posts));
        let images = Arc::new(LocalImageStore::new(dir.path().join("public"), "images"));
        Self {
            state: AppState::from_parts(repo, images, 1024 * 1024),
            dir,
        }
    }

    pub fn data(&self) -> web::Data<AppState> {
        web::Data::new(self.state.clone())
    }

    pub fn asset_dir(&self) -> PathBuf {
        self.dir.path().join("public").join("images")
    }

    /// Filesystem location of a public image path.
    pub fn file(&self, url: &str) -> PathBuf {
        self.dir
            .path()
            .join("public")
            .join(url.trim_start_matches('/'))
    }
}

/// One part of a multipart form body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

/// Attach a `multipart/form-data` body built from `parts`.
pub fn multipart(req: TestRequest, parts: &[Part<'_>]) -> TestRequest {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                        .as_bytes(),
                );
            }
            Part::File(name, filename, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    req.insert_header((
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={BOUNDARY}"),
    ))
    .set_payload(body)
}
