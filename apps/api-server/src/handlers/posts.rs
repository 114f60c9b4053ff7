//! Post handlers.
//!
//! Create and update accept either a multipart form (with images) or a plain
//! JSON body; the JSON routes are selected by content type.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};

use folio_core::domain::{NewPost, PostChanges};
use folio_shared::dto::{CreatePostRequest, UpdatePostRequest};

use super::form::PostForm;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_post(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts (multipart/form-data)
pub async fn create_post_form(
    state: web::Data<AppState>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let form = PostForm::read(payload, state.max_upload_bytes).await?;
    let (fields, images) = form.into_new_post()?;

    let post = state.posts.create_post(fields, images).await?;
    Ok(HttpResponse::Created().json(post))
}

/// POST /api/posts (application/json)
pub async fn create_post_json(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let CreatePostRequest {
        title,
        excerpt,
        content,
    } = body.into_inner();
    let fields = NewPost {
        title,
        excerpt,
        content,
    };

    let post = state.posts.create_post(fields, Vec::new()).await?;
    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id} (multipart/form-data)
pub async fn update_post_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = PostForm::read(payload, state.max_upload_bytes).await?;

    let post = state.posts.update_post(&id, form.into_changes()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/posts/{id} (application/json)
pub async fn update_post_json(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let changes = PostChanges {
        retained_image_urls: req.image_urls,
        ..PostChanges::fields(req.title, req.excerpt, req.content)
    };

    let post = state.posts.update_post(&path.into_inner(), changes).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete_post(&path.into_inner()).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Post deleted"))
}
