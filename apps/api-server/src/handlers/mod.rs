//! HTTP handlers and route configuration.

mod form;
mod health;
mod images;
mod posts;

#[cfg(test)]
mod test_support;

use actix_web::guard::{self, Guard, GuardContext};
use actix_web::http::header;
use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/images", web::get().to(images::list_images))
            .service(
                web::scope("/posts")
                    .service(
                        web::resource("")
                            .route(web::get().to(posts::list_posts))
                            .route(web::post().guard(json_body()).to(posts::create_post_json))
                            .route(web::post().to(posts::create_post_form)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(posts::get_post))
                            .route(web::put().guard(json_body()).to(posts::update_post_json))
                            .route(web::put().to(posts::update_post_form))
                            .route(web::delete().to(posts::delete_post)),
                    ),
            ),
    );
}

/// Matches requests whose body is declared as JSON.
fn json_body() -> impl Guard {
    guard::fn_guard(|ctx: &GuardContext<'_>| {
        ctx.head()
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"))
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};
    use serde_json::Value;

    use super::*;
    use crate::handlers::test_support::TestStorage;

    #[actix_web::test]
    async fn test_health_reports_storage() {
        let storage = TestStorage::with_ids(&["1"]);
        let app = test::init_service(
            App::new()
                .app_data(storage.data())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "ok");
    }
}
