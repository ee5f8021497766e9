use common::catalog::DataType;
use common::models::Store;
use common::rows::{headers, Row};
use leptos::{either::Either, prelude::*};
use serde_json::Value;
use templates::{collapsible_block, tab_bar, Breadcrumb, InfoRow, NavLink, Page, Tab};

/// What the data viewer got back for the active tab.
pub enum ViewerState {
    Rows(Vec<Row>),
    Failed {
        message: String,
        details: Option<Value>,
    },
}

pub fn viewer_href(store_id: i64, data_type: DataType) -> String {
    format!("/_dashboard/stores/{}/{}", store_id, data_type)
}

fn details_text(details: &Value) -> String {
    match details {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

fn render_rows(data_type: DataType, rows: Vec<Row>) -> AnyView {
    if rows.is_empty() {
        let msg = format!("No {} found.", data_type);
        return view! { <p class="muted">{msg}</p> }.into_any();
    }
    let count = format!("Showing {} most recent {}", rows.len(), data_type);
    view! {
        <p>{count}</p>
        <table>
            <tr>
                {headers(data_type).iter().map(|h| view! { <th>{*h}</th> }).collect::<Vec<_>>()}
            </tr>
            {rows.into_iter().map(|row| {
                view! {
                    <tr>
                        {row.cells().into_iter().map(|c| view! { <td>{c}</td> }).collect::<Vec<_>>()}
                    </tr>
                }
            }).collect::<Vec<_>>()}
        </table>
    }
    .into_any()
}

fn render_failure(retry_href: String, message: String, details: Option<Value>) -> AnyView {
    let details = details.map(|d| collapsible_block(&details_text(&d), "error-details"));
    view! {
        <p class="error">{message}</p>
        {details}
        <p><a href={retry_href}>"Try again"</a></p>
    }
    .into_any()
}

pub fn render_store_view(store: &Store, data_type: DataType, state: ViewerState) -> String {
    let tabs = DataType::ALL
        .into_iter()
        .map(|dt| Tab::new(dt.label(), viewer_href(store.id, dt), dt == data_type))
        .collect();
    let body = match state {
        ViewerState::Rows(rows) => Either::Left(render_rows(data_type, rows)),
        ViewerState::Failed { message, details } => Either::Right(render_failure(
            viewer_href(store.id, data_type),
            message,
            details,
        )),
    };

    let content = view! {
        {tab_bar(tabs)}
        {body}
    };

    Page {
        title: format!("Shop Dashboard - {} - {}", store.name, data_type.label()),
        breadcrumbs: vec![
            Breadcrumb::link("Home", "/_dashboard"),
            Breadcrumb::link("Stores", "/_dashboard/stores"),
            Breadcrumb::current(&store.name),
        ],
        nav_links: vec![NavLink::new("All Stores", "/_dashboard/stores")],
        info_rows: vec![
            InfoRow::new("Name", &store.name),
            InfoRow::new("Domain", &store.domain),
            InfoRow::new("Token", &store.masked_token()),
        ],
        content,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::rows::normalize;
    use serde_json::json;

    fn store() -> Store {
        Store {
            id: 4,
            name: "Alpha".to_string(),
            domain: "alpha.myshopify.com".to_string(),
            access_token: "shpat_abcd1234".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn rows_rendered_under_headers() {
        let data = json!({"orders": {"edges": [{"node": {
            "name": "#1001",
            "totalPriceSet": {"shopMoney": {"amount": "9.5", "currencyCode": "USD"}}
        }}]}});
        let html = render_store_view(
            &store(),
            DataType::Orders,
            ViewerState::Rows(normalize(&data, DataType::Orders)),
        );
        assert!(html.contains("<th>Total</th>"));
        assert!(html.contains("#1001"));
        assert!(html.contains("USD 9.50"));
        assert!(html.contains("Guest"));
        assert!(html.contains("Showing 1 most recent orders"));
    }

    #[test]
    fn active_tab_not_linked() {
        let html = render_store_view(&store(), DataType::Products, ViewerState::Rows(vec![]));
        assert!(html.contains(r#"<span class="active">Products</span>"#));
        assert!(html.contains(r#"href="/_dashboard/stores/4/orders""#));
        assert!(html.contains(r#"href="/_dashboard/stores/4/customers""#));
        assert!(html.contains("No products found."));
    }

    #[test]
    fn failure_shows_message_and_retry() {
        let html = render_store_view(
            &store(),
            DataType::Customers,
            ViewerState::Failed {
                message: "Shopify API error: 401".to_string(),
                details: Some(json!("Invalid API key")),
            },
        );
        assert!(html.contains("Shopify API error: 401"));
        assert!(html.contains("Invalid API key"));
        assert!(html.contains("Try again"));
        assert!(html.contains(r#"<a href="/_dashboard/stores/4/customers">Try again</a>"#));
        assert!(!html.contains("<table><tr><th>Name</th>"));
    }

    #[test]
    fn token_masked_in_info() {
        let html = render_store_view(&store(), DataType::Orders, ViewerState::Rows(vec![]));
        assert!(html.contains("****1234"));
        assert!(!html.contains("shpat_abcd1234"));
    }

    #[test]
    fn details_text_pretty_prints_json() {
        let text = details_text(&json!([{"message": "boom"}]));
        assert!(text.contains("\"message\": \"boom\""));
        assert_eq!(details_text(&json!("raw body")), "raw body");
    }
}
