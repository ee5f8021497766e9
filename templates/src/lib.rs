use leptos::{either::Either, prelude::*};

const COLLAPSE_THRESHOLD: usize = 200;

pub fn collapsible_block(content: &str, css_class: &str) -> AnyView {
    if content.len() <= COLLAPSE_THRESHOLD {
        let tag_content = content.to_string();
        let class = css_class.to_string();
        return if content.contains('\n') {
            view! { <pre class={class}>{tag_content}</pre> }.into_any()
        } else {
            view! { <div class={class}>{tag_content}</div> }.into_any()
        };
    }
    let preview: String = content.chars().take(COLLAPSE_THRESHOLD).collect();
    let preview_display = format!("{}...", preview);
    let preview_class = format!("preview-text {}", css_class);
    let full_class = format!("collapsible-full {}", css_class);
    let content = content.to_string();
    view! {
        <details class="collapsible">
            <summary>
                <span class={preview_class}>{preview_display}</span>
                " "
                <span class="show-more">"show more"</span>
                <span class="show-less">"show less"</span>
            </summary>
            <div class={full_class}>{content}</div>
        </details>
    }
    .into_any()
}

pub fn page_layout(title: &str, body_html: String) -> String {
    let title = title
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;");
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: monospace; padding: 16px; }}
table {{ width: 100%; border-collapse: collapse; }}
th {{ text-align: left; padding: 6px 8px; border-bottom: 1px solid #ccc; }}
td {{ padding: 6px 8px; border-bottom: 1px solid #eee; vertical-align: top; }}
tr:last-child td {{ border-bottom: none; }}
pre {{ white-space: pre-wrap; }}
details.collapsible {{ display: flex; flex-direction: column; }}
details.collapsible > summary {{ cursor: pointer; list-style: none; order: 1; }}
details.collapsible > summary::-webkit-details-marker {{ display: none; }}
details.collapsible > summary .show-less {{ display: none; }}
details.collapsible > .collapsible-full {{ white-space: pre-wrap; word-break: break-word; order: 0; }}
details.collapsible[open] > summary .preview-text {{ display: none; }}
details.collapsible[open] > summary .show-more {{ display: none; }}
details.collapsible[open] > summary .show-less {{ display: inline; }}
nav.tabs {{ margin: 12px 0; }}
nav.tabs a, nav.tabs span {{ padding: 4px 10px; border: 1px solid #ccc; margin-right: 4px; }}
nav.tabs span.active {{ background: #eee; font-weight: bold; }}
.error {{ color: #a00; }}
.muted {{ color: #888; }}
</style>
</head>
<body>
{body_html}
</body>
</html>"#,
        title = title,
        body_html = body_html
    )
}

pub struct Breadcrumb {
    pub label: String,
    pub href: Option<String>,
}

impl Breadcrumb {
    pub fn link(label: impl ToString, href: impl ToString) -> Self {
        Self {
            label: label.to_string(),
            href: Some(href.to_string()),
        }
    }

    pub fn current(label: impl ToString) -> Self {
        Self {
            label: label.to_string(),
            href: None,
        }
    }
}

pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl ToString, href: impl ToString) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

pub struct InfoRow {
    pub label: String,
    pub value: AnyView,
}

impl InfoRow {
    pub fn new(label: &str, value: &str) -> Self {
        let v = value.to_string();
        Self {
            label: label.to_string(),
            value: v.into_any(),
        }
    }
}

/// One entry in a tab bar. The active tab renders as plain text.
pub struct Tab {
    pub label: String,
    pub href: String,
    pub active: bool,
}

impl Tab {
    pub fn new(label: impl ToString, href: impl ToString, active: bool) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            active,
        }
    }
}

pub fn tab_bar(tabs: Vec<Tab>) -> AnyView {
    view! {
        <nav class="tabs">
            {tabs.into_iter().map(|tab| {
                if tab.active {
                    Either::Left(view! { <span class="active">{tab.label}</span> })
                } else {
                    Either::Right(view! { <a href={tab.href}>{tab.label}</a> })
                }
            }).collect::<Vec<_>>()}
        </nav>
    }
    .into_any()
}

pub struct Page<C: IntoView = ()> {
    pub title: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub nav_links: Vec<NavLink>,
    pub info_rows: Vec<InfoRow>,
    pub content: C,
}

impl<C: IntoView> Page<C> {
    pub fn render(self) -> String {
        let Page {
            title,
            breadcrumbs,
            nav_links,
            info_rows,
            content,
        } = self;

        let body = view! {
            {if !breadcrumbs.is_empty() {
                Either::Left(view! {
                    <h1>
                        {breadcrumbs.into_iter().enumerate().map(|(i, crumb)| {
                            let sep = if i > 0 { " / " } else { "" };
                            match crumb.href {
                                Some(href) => Either::Left(view! {
                                    {sep}<a href={href}>{crumb.label}</a>
                                }),
                                None => Either::Right(view! {
                                    {sep}{crumb.label}
                                }),
                            }
                        }).collect::<Vec<_>>()}
                    </h1>
                })
            } else {
                Either::Right(())
            }}

            {if !nav_links.is_empty() {
                Either::Left(view! {
                    <h2>"Navigation"</h2>
                    <table>
                        {nav_links.into_iter().map(|link| {
                            view! { <tr><td><a href={link.href}>{link.label}</a></td></tr> }
                        }).collect::<Vec<_>>()}
                    </table>
                })
            } else {
                Either::Right(())
            }}

            {if !info_rows.is_empty() {
                Either::Left(view! {
                    <h2>"Info"</h2>
                    <table>
                        {info_rows.into_iter().map(|row| {
                            view! { <tr><td>{row.label}</td><td>{row.value}</td></tr> }
                        }).collect::<Vec<_>>()}
                    </table>
                })
            } else {
                Either::Right(())
            }}

            {content}
        };

        page_layout(&title, body.to_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_page() -> Page {
        Page {
            title: String::new(),
            breadcrumbs: Vec::new(),
            nav_links: Vec::new(),
            info_rows: Vec::new(),
            content: (),
        }
    }

    #[test]
    fn collapsible_block_short_single_line() {
        let result = collapsible_block("short text", "cls").to_html();
        assert!(result.contains(r#"class="cls""#));
        assert!(result.contains("short text"));
        assert!(result.starts_with("<div"));
    }

    #[test]
    fn collapsible_block_long_content() {
        let long = "a".repeat(300);
        let result = collapsible_block(&long, "cls").to_html();
        assert!(result.contains("show more"));
        assert!(result.contains("collapsible"));
    }

    #[test]
    fn collapsible_block_escapes_content() {
        let result = collapsible_block("<script>alert(1)</script>", "cls").to_html();
        assert!(result.contains("&lt;script&gt;"));
        assert!(!result.contains("<script>alert"));
    }

    #[test]
    fn page_layout_escapes_title() {
        let result = page_layout("<Shop & Co>", String::new());
        assert!(result.contains("<title>&lt;Shop &amp; Co&gt;</title>"));
        assert!(result.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn tab_bar_marks_active_tab() {
        let html = tab_bar(vec![
            Tab::new("Orders", "/o", true),
            Tab::new("Products", "/p", false),
        ])
        .to_html();
        assert!(html.contains(r#"<span class="active">Orders</span>"#));
        assert!(html.contains(r#"<a href="/p">Products</a>"#));
        assert!(!html.contains(r#"href="/o""#));
    }

    #[test]
    fn page_render_breadcrumbs_and_nav() {
        let html = Page {
            title: "Test".to_string(),
            breadcrumbs: vec![
                Breadcrumb::link("Home", "/_dashboard"),
                Breadcrumb::current("Stores"),
            ],
            nav_links: vec![NavLink::new("New Store", "/_dashboard/stores/new")],
            info_rows: vec![],
            content: (),
        }
        .render();
        assert!(html.contains(r#"<a href="/_dashboard">"#));
        assert!(html.contains(" / "));
        assert!(html.contains("<h2>Navigation</h2>"));
        assert!(html.contains(r#"<a href="/_dashboard/stores/new">"#));
    }

    #[test]
    fn page_render_info_rows_escaped() {
        let html = Page {
            info_rows: vec![InfoRow::new("Domain", "<b>x</b>")],
            ..empty_page()
        }
        .render();
        assert!(html.contains("<h2>Info</h2>"));
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn page_render_empty_sections_omitted() {
        let html = empty_page().render();
        assert!(!html.contains("<h1>"));
        assert!(!html.contains("Navigation"));
        assert!(!html.contains("<h2>Info</h2>"));
    }

    #[test]
    fn page_render_content_view() {
        let html = Page {
            title: "Form".to_string(),
            breadcrumbs: vec![],
            nav_links: vec![],
            info_rows: vec![],
            content: view! { <form><input type="text" name="domain"/></form> },
        }
        .render();
        assert!(html.contains("<form>"));
        assert!(html.contains(r#"name="domain""#));
    }
}
