use common::models::Store;
use leptos::{either::Either, prelude::*};
use templates::{Breadcrumb, NavLink, Page};

/// Values echoed back into the new-store form after a failed submission.
/// The access token is never echoed.
#[derive(Debug, Clone, Default)]
pub struct StoreForm {
    pub name: String,
    pub domain: String,
}

pub fn render_stores_index(stores: &[Store]) -> String {
    let stores = stores.to_vec();
    let total = stores.len();

    let content = view! {
        <h2>"Stores"</h2>
        <p>{format!("Total: {}", total)}</p>
        {if stores.is_empty() {
            Either::Left(view! {
                <p>"No stores connected yet."</p>
            })
        } else {
            Either::Right(view! {
                <table>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Domain"</th>
                        <th>"Token"</th>
                        <th>"Created"</th>
                    </tr>
                    {stores.into_iter().map(|s| {
                        let href = format!("/_dashboard/stores/{}", s.id);
                        let token = s.masked_token();
                        view! {
                            <tr>
                                <td><a href={href.clone()}>{s.id}</a></td>
                                <td><a href={href}>{s.name}</a></td>
                                <td>{s.domain}</td>
                                <td>{token}</td>
                                <td>{s.created_at.unwrap_or_default()}</td>
                            </tr>
                        }
                    }).collect::<Vec<_>>()}
                </table>
            })
        }}
    };

    Page {
        title: "Shop Dashboard - Stores".to_string(),
        breadcrumbs: vec![
            Breadcrumb::link("Home", "/_dashboard"),
            Breadcrumb::current("Stores"),
        ],
        nav_links: vec![NavLink::new("Connect a Store", "/_dashboard/stores/new")],
        info_rows: vec![],
        content,
    }
    .render()
}

pub fn render_new_store(form: &StoreForm, error: Option<&str>) -> String {
    let name = form.name.clone();
    let domain = form.domain.clone();
    let error = error.map(|e| e.to_string());

    let content = view! {
        <h2>"Connect a Store"</h2>
        {error.map(|e| view! { <p class="error">{e}</p> })}
        <form method="POST" action="/_dashboard/stores/new">
            <table>
                <tr>
                    <td><label>"Name"</label></td>
                    <td><input type="text" name="name" value={name} required size="40"/></td>
                </tr>
                <tr>
                    <td><label>"Domain"</label></td>
                    <td>
                        <input type="text" name="domain" value={domain} required size="40" placeholder="your-store.myshopify.com"/>
                        " "<span class="muted">"A bare handle or full URL is accepted"</span>
                    </td>
                </tr>
                <tr>
                    <td><label>"Admin API Access Token"</label></td>
                    <td><input type="password" name="access_token" required size="40" placeholder="shpat_..."/></td>
                </tr>
            </table>
            <button type="submit">"Save Store"</button>
        </form>
    };

    Page {
        title: "Shop Dashboard - Connect a Store".to_string(),
        breadcrumbs: vec![
            Breadcrumb::link("Home", "/_dashboard"),
            Breadcrumb::link("Stores", "/_dashboard/stores"),
            Breadcrumb::current("New"),
        ],
        nav_links: vec![],
        info_rows: vec![],
        content,
    }
    .render()
}
