//! Flattening of Admin API payloads into display rows.
//!
//! Everything here is pure: the same payload always yields the same rows, and
//! no field can make conversion fail. A field of the wrong type is read as
//! missing; the rest of its node still converts.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::catalog::DataType;

/// Shown in place of a missing date, money amount or status.
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown in place of an order's customer when neither a name nor an email is known.
pub const GUEST: &str = "Guest";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Money {
    /// Decimal amount; the Admin API sends it as a string, fixtures sometimes as a number.
    pub amount: Option<Value>,
    #[serde(deserialize_with = "tolerant")]
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoneyBag {
    #[serde(deserialize_with = "tolerant")]
    pub shop_money: Option<Money>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceRange {
    #[serde(deserialize_with = "tolerant")]
    pub min_variant_price: Option<Money>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderCustomer {
    #[serde(deserialize_with = "tolerant")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOrder {
    #[serde(deserialize_with = "tolerant")]
    pub id: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub name: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub processed_at: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub display_financial_status: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub display_fulfillment_status: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub total_price_set: Option<MoneyBag>,
    #[serde(deserialize_with = "tolerant")]
    pub customer: Option<OrderCustomer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProduct {
    #[serde(deserialize_with = "tolerant")]
    pub id: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub title: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub status: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub vendor: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub product_type: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub total_inventory: Option<i64>,
    #[serde(deserialize_with = "tolerant")]
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub price_range_v2: Option<PriceRange>,
    /// Older API versions only expose the deprecated `priceRange`.
    #[serde(deserialize_with = "tolerant")]
    pub price_range: Option<PriceRange>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCustomer {
    #[serde(deserialize_with = "tolerant")]
    pub id: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub email: Option<String>,
    #[serde(deserialize_with = "tolerant")]
    pub phone: Option<String>,
    /// `UnsignedInt64` scalar, serialized as a string by the Admin API.
    pub number_of_orders: Option<Value>,
    #[serde(deserialize_with = "tolerant")]
    pub amount_spent: Option<Money>,
}

/// One upstream node, typed by the data type it was fetched for.
#[derive(Debug, Clone)]
pub enum RawNode {
    Order(RawOrder),
    Product(RawProduct),
    Customer(RawCustomer),
}

impl RawNode {
    pub fn from_value(data_type: DataType, node: &Value) -> Self {
        match data_type {
            DataType::Orders => RawNode::Order(lenient(node)),
            DataType::Products => RawNode::Product(lenient(node)),
            DataType::Customers => RawNode::Customer(lenient(node)),
        }
    }

    pub fn into_row(self) -> Row {
        match self {
            RawNode::Order(o) => Row::Order(order_row(o)),
            RawNode::Product(p) => Row::Product(product_row(p)),
            RawNode::Customer(c) => Row::Customer(customer_row(c)),
        }
    }
}

fn lenient<T: Default + DeserializeOwned>(node: &Value) -> T {
    T::deserialize(node).unwrap_or_default()
}

/// Field-level counterpart of [`lenient`]: a value that does not fit `T`
/// becomes `None` instead of failing the enclosing struct.
fn tolerant<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: String,
    pub name: String,
    pub customer: String,
    pub processed_at: String,
    pub financial_status: String,
    pub fulfillment_status: String,
    pub total_price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub id: String,
    pub title: String,
    pub status: String,
    pub vendor: String,
    pub product_type: String,
    pub total_inventory: String,
    pub updated_at: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub number_of_orders: String,
    pub amount_spent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Row {
    Order(OrderRow),
    Product(ProductRow),
    Customer(CustomerRow),
}

impl Row {
    /// Cell values in the same order as [`headers`].
    pub fn cells(&self) -> Vec<String> {
        match self {
            Row::Order(r) => vec![
                r.name.clone(),
                r.customer.clone(),
                r.processed_at.clone(),
                r.financial_status.clone(),
                r.fulfillment_status.clone(),
                r.total_price.clone(),
            ],
            Row::Product(r) => vec![
                r.title.clone(),
                r.status.clone(),
                r.vendor.clone(),
                r.product_type.clone(),
                r.total_inventory.clone(),
                r.price.clone(),
                r.updated_at.clone(),
            ],
            Row::Customer(r) => vec![
                format!("{} {}", r.first_name, r.last_name).trim().to_string(),
                r.email.clone(),
                r.phone.clone(),
                r.number_of_orders.clone(),
                r.amount_spent.clone(),
            ],
        }
    }
}

pub fn headers(data_type: DataType) -> &'static [&'static str] {
    match data_type {
        DataType::Orders => &[
            "Order",
            "Customer",
            "Date",
            "Payment",
            "Fulfillment",
            "Total",
        ],
        DataType::Products => &[
            "Product",
            "Status",
            "Vendor",
            "Type",
            "Inventory",
            "Price",
            "Updated",
        ],
        DataType::Customers => &["Name", "Email", "Phone", "Orders", "Amount Spent"],
    }
}

/// Pull the node list for `data_type` out of a GraphQL `data` object.
///
/// Accepts both the `edges[].node` and the `nodes[]` connection shapes, and a
/// payload still wrapped in its top-level `data` member.
pub fn extract_nodes(data: &Value, data_type: DataType) -> Vec<&Value> {
    let data = match data.get("data") {
        Some(inner) if inner.is_object() => inner,
        _ => data,
    };
    let Some(connection) = data.get(data_type.as_str()) else {
        return Vec::new();
    };
    if let Some(edges) = connection.get("edges").and_then(|v| v.as_array()) {
        return edges
            .iter()
            .filter_map(|edge| edge.get("node"))
            .filter(|node| node.is_object())
            .collect();
    }
    connection
        .get("nodes")
        .and_then(|v| v.as_array())
        .map(|nodes| nodes.iter().filter(|n| n.is_object()).collect())
        .unwrap_or_default()
}

pub fn normalize_node(node: &Value, data_type: DataType) -> Row {
    RawNode::from_value(data_type, node).into_row()
}

pub fn normalize(data: &Value, data_type: DataType) -> Vec<Row> {
    extract_nodes(data, data_type)
        .into_iter()
        .map(|node| normalize_node(node, data_type))
        .collect()
}

/// `"{currency} {amount with 2 decimals}"`, or [`NOT_AVAILABLE`] when the
/// amount is missing or not a number.
pub fn format_money(money: Option<&Money>) -> String {
    let Some(money) = money else {
        return NOT_AVAILABLE.to_string();
    };
    let amount = match &money.amount {
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    };
    match (amount.filter(|a| a.is_finite()), money.currency_code.as_deref()) {
        (Some(a), Some(code)) if !code.is_empty() => format!("{} {:.2}", code, a),
        (Some(a), _) => format!("{:.2}", a),
        (None, _) => NOT_AVAILABLE.to_string(),
    }
}

/// Calendar date (`M/D/YYYY`) of an ISO-8601 timestamp, in the timestamp's own
/// offset, or [`NOT_AVAILABLE`].
pub fn format_date(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|ts| chrono::DateTime::parse_from_rfc3339(ts.trim()).ok())
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn customer_display_name(customer: Option<OrderCustomer>) -> String {
    let Some(c) = customer else {
        return GUEST.to_string();
    };
    let full: Vec<String> = [non_empty(c.first_name), non_empty(c.last_name)]
        .into_iter()
        .flatten()
        .collect();
    if !full.is_empty() {
        return full.join(" ");
    }
    non_empty(c.email).unwrap_or_else(|| GUEST.to_string())
}

fn order_row(o: RawOrder) -> OrderRow {
    let total = o.total_price_set.and_then(|set| set.shop_money);
    OrderRow {
        id: o.id.unwrap_or_default(),
        name: o.name.unwrap_or_default(),
        customer: customer_display_name(o.customer),
        processed_at: format_date(o.processed_at.as_deref()),
        financial_status: non_empty(o.display_financial_status)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        fulfillment_status: non_empty(o.display_fulfillment_status)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        total_price: format_money(total.as_ref()),
    }
}

fn product_row(p: RawProduct) -> ProductRow {
    let min_price = p
        .price_range_v2
        .and_then(|r| r.min_variant_price)
        .or_else(|| p.price_range.and_then(|r| r.min_variant_price));
    ProductRow {
        id: p.id.unwrap_or_default(),
        title: p.title.unwrap_or_default(),
        status: p.status.unwrap_or_default(),
        vendor: p.vendor.unwrap_or_default(),
        product_type: p.product_type.unwrap_or_default(),
        total_inventory: p
            .total_inventory
            .map(|n| n.to_string())
            .unwrap_or_default(),
        updated_at: format_date(p.updated_at.as_deref()),
        price: format_money(min_price.as_ref()),
    }
}

fn customer_row(c: RawCustomer) -> CustomerRow {
    let number_of_orders = match c.number_of_orders {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    CustomerRow {
        id: c.id.unwrap_or_default(),
        first_name: c.first_name.unwrap_or_default(),
        last_name: c.last_name.unwrap_or_default(),
        email: c.email.unwrap_or_default(),
        phone: c.phone.unwrap_or_default(),
        number_of_orders,
        amount_spent: format_money(c.amount_spent.as_ref()),
    }
}
