use actix_web::{get, http::header::ContentType, HttpResponse};

// Embedded at compile time; the page fetches /data client-side.
const INDEX_HTML: &str = include_str!("../../static/index.html");

#[get("/")]
pub async fn index(
    _req: actix_web::HttpRequest
) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
