use leptos::prelude::*;
use templates::{Breadcrumb, NavLink, Page};

pub fn render_home(store_count: i64) -> String {
    let content = view! {
        <p>{format!("Connected stores: {}", store_count)}</p>
    };

    Page {
        title: "Shop Dashboard - Home".to_string(),
        breadcrumbs: vec![Breadcrumb::current("Home")],
        nav_links: vec![
            NavLink::new("Stores", "/_dashboard/stores"),
            NavLink::new("Connect a Store", "/_dashboard/stores/new"),
        ],
        info_rows: vec![],
        content,
    }
    .render()
}
