//! Image listing endpoint.

use actix_web::{HttpResponse, web};

use folio_core::DomainError;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Public paths of every stored post image.
///
/// GET /api/images
pub async fn list_images(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let images = state
        .images
        .list_images()
        .await
        .map_err(DomainError::from)?;

    Ok(HttpResponse::Ok().json(images))
}
