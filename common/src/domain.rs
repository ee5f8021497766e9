pub const SHOPIFY_DOMAIN_SUFFIX: &str = ".myshopify.com";

/// Normalize an operator-entered store domain into a bare `*.myshopify.com`
/// hostname. The proxy builds the upstream endpoint from the stored value, so
/// this is applied once, at creation time.
pub fn normalize_domain(input: &str) -> String {
    let trimmed = input.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let host = without_scheme.trim_end_matches('/');
    if host.ends_with(SHOPIFY_DOMAIN_SUFFIX) {
        host.to_string()
    } else {
        format!("{}{}", host, SHOPIFY_DOMAIN_SUFFIX)
    }
}
