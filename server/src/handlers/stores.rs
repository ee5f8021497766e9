use std::collections::HashMap;

use actix_web::{http::StatusCode, web, HttpResponse};
use common::domain::normalize_domain;
use pages::StoreForm;
use sqlx::SqlitePool;

pub async fn home_page(pool: web::Data<SqlitePool>) -> HttpResponse {
    let store_count = match db::count_stores(pool.get_ref()).await {
        Ok(n) => n,
        Err(e) => {
            log::warn!("failed to count stores: {}", e);
            0
        }
    };
    let html = pages::home::render_home(store_count);
    HttpResponse::Ok().content_type("text/html").body(html)
}

pub async fn stores_index(pool: web::Data<SqlitePool>) -> HttpResponse {
    match db::list_stores(pool.get_ref()).await {
        Ok(stores) => {
            let html = pages::stores::render_stores_index(&stores);
            HttpResponse::Ok().content_type("text/html").body(html)
        }
        Err(e) => HttpResponse::InternalServerError().body(format!("DB error: {}", e)),
    }
}

pub async fn new_store() -> HttpResponse {
    let html = pages::stores::render_new_store(&StoreForm::default(), None);
    HttpResponse::Ok().content_type("text/html").body(html)
}

fn form_error(status: StatusCode, form: &StoreForm, message: &str) -> HttpResponse {
    let html = pages::stores::render_new_store(form, Some(message));
    HttpResponse::build(status).content_type("text/html").body(html)
}

fn trimmed(form: &HashMap<String, String>, key: &str) -> String {
    form.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
}

pub async fn create_store(
    pool: web::Data<SqlitePool>,
    form: web::Form<HashMap<String, String>>,
) -> HttpResponse {
    let name = trimmed(&form, "name");
    let raw_domain = trimmed(&form, "domain");
    let access_token = trimmed(&form, "access_token");
    let echo = StoreForm {
        name: name.clone(),
        domain: raw_domain.clone(),
    };

    if name.is_empty() || raw_domain.is_empty() || access_token.is_empty() {
        return form_error(
            StatusCode::BAD_REQUEST,
            &echo,
            "Name, domain and access token are required",
        );
    }

    let domain = normalize_domain(&raw_domain);
    match db::create_store(
        pool.get_ref(),
        &db::NewStore {
            name: &name,
            domain: &domain,
            access_token: &access_token,
        },
    )
    .await
    {
        Ok(id) => {
            log::info!("store {} connected as {} (id {})", name, domain, id);
            HttpResponse::SeeOther()
                .insert_header(("Location", format!("/_dashboard/stores/{}", id)))
                .finish()
        }
        Err(e) if db::is_unique_violation(&e) => form_error(
            StatusCode::CONFLICT,
            &echo,
            &format!("A store with domain {} already exists", domain),
        ),
        Err(e) => HttpResponse::InternalServerError().body(format!("DB error: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    async fn pool() -> web::Data<SqlitePool> {
        web::Data::new(db::connect("sqlite::memory:", 1).await.unwrap())
    }

    #[actix_web::test]
    async fn create_normalizes_domain_and_redirects() {
        let pool = pool().await;
        let app = test::init_service(
            App::new()
                .app_data(pool.clone())
                .route("/_dashboard/stores/new", web::post().to(create_store)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/_dashboard/stores/new")
            .set_form([
                ("name", "Foo"),
                ("domain", "https://foo.myshopify.com/"),
                ("access_token", "shpat_1"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let stores = db::list_stores(pool.get_ref()).await.unwrap();
        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0].domain, "foo.myshopify.com");
        assert_eq!(
            resp.headers().get("location").unwrap(),
            format!("/_dashboard/stores/{}", stores[0].id).as_str()
        );
    }

    #[actix_web::test]
    async fn duplicate_domain_is_conflict() {
        let pool = pool().await;
        let app = test::init_service(
            App::new()
                .app_data(pool.clone())
                .route("/_dashboard/stores/new", web::post().to(create_store)),
        )
        .await;
        for (expected, domain) in [
            (StatusCode::SEE_OTHER, "foo"),
            (StatusCode::CONFLICT, "foo.myshopify.com"),
        ] {
            let req = test::TestRequest::post()
                .uri("/_dashboard/stores/new")
                .set_form([("name", "Foo"), ("domain", domain), ("access_token", "t")])
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }
        assert_eq!(db::count_stores(pool.get_ref()).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn blank_fields_rejected() {
        let pool = pool().await;
        let app = test::init_service(
            App::new()
                .app_data(pool.clone())
                .route("/_dashboard/stores/new", web::post().to(create_store)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/_dashboard/stores/new")
            .set_form([("name", "Foo"), ("domain", "  "), ("access_token", "t")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("are required"));
        assert_eq!(db::count_stores(pool.get_ref()).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn home_page_still_renders_when_count_fails() {
        let pool = pool().await;
        pool.close().await;
        let app = test::init_service(
            App::new()
                .app_data(pool.clone())
                .route("/_dashboard", web::get().to(home_page)),
        )
        .await;
        let req = test::TestRequest::get().uri("/_dashboard").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("Connected stores: 0"));
    }
}
