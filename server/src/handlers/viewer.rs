use actix_web::{web, HttpResponse};
use common::catalog::DataType;
use common::config::AppConfig;
use common::rows;
use pages::store_view::viewer_href;
use pages::ViewerState;
use sqlx::SqlitePool;

pub async fn store_show(path: web::Path<i64>) -> HttpResponse {
    let store_id = path.into_inner();
    HttpResponse::SeeOther()
        .insert_header(("Location", viewer_href(store_id, DataType::Orders)))
        .finish()
}

/// Data viewer: run the proxy for one store and tab, then render the rows or
/// the failure with a retry link.
pub async fn store_data(
    pool: web::Data<SqlitePool>,
    client: web::Data<reqwest::Client>,
    config: web::Data<AppConfig>,
    path: web::Path<(i64, String)>,
) -> HttpResponse {
    let (store_id, data_type) = path.into_inner();
    let data_type = match data_type.parse::<DataType>() {
        Ok(dt) => dt,
        Err(e) => return HttpResponse::NotFound().body(e.to_string()),
    };

    let store = match db::get_store(pool.get_ref(), store_id).await {
        Ok(Some(s)) => s,
        Ok(None) => return HttpResponse::NotFound().body("Store not found"),
        Err(e) => return HttpResponse::InternalServerError().body(format!("DB error: {}", e)),
    };

    let state = match proxy::query_store(client.get_ref(), config.get_ref(), &store, data_type)
        .await
    {
        Ok(data) => ViewerState::Rows(rows::normalize(&data, data_type)),
        Err(e) => {
            log::warn!("viewer {} {}: {}", store.name, data_type, e);
            ViewerState::Failed {
                message: e.to_string(),
                details: e.details(),
            }
        }
    };

    let html = pages::store_view::render_store_view(&store, data_type, state);
    HttpResponse::Ok().content_type("text/html").body(html)
}
