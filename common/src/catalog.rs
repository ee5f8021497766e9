//! Canned Admin API queries, one per data type.
//!
//! Every query asks for a single page of [`PAGE_SIZE`] records, newest first.
//! Adding a data type means adding a variant here; there is no runtime
//! registration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of records requested by every canned query.
pub const PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Orders,
    Products,
    Customers,
}

impl DataType {
    pub const ALL: [DataType; 3] = [DataType::Orders, DataType::Products, DataType::Customers];

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Orders => "orders",
            DataType::Products => "products",
            DataType::Customers => "customers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DataType::Orders => "Orders",
            DataType::Products => "Products",
            DataType::Customers => "Customers",
        }
    }

    pub fn query(self) -> &'static str {
        match self {
            DataType::Orders => ORDERS_QUERY,
            DataType::Products => PRODUCTS_QUERY,
            DataType::Customers => CUSTOMERS_QUERY,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDataType(pub String);

impl fmt::Display for UnknownDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid data_type '{}'. Must be one of: orders, products, customers",
            self.0
        )
    }
}

impl std::error::Error for UnknownDataType {}

impl FromStr for DataType {
    type Err = UnknownDataType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orders" => Ok(DataType::Orders),
            "products" => Ok(DataType::Products),
            "customers" => Ok(DataType::Customers),
            other => Err(UnknownDataType(other.to_string())),
        }
    }
}

const ORDERS_QUERY: &str = "\
query {
  orders(first: 20, sortKey: PROCESSED_AT, reverse: true) {
    edges {
      node {
        id
        name
        processedAt
        displayFinancialStatus
        displayFulfillmentStatus
        totalPriceSet {
          shopMoney {
            amount
            currencyCode
          }
        }
        customer {
          firstName
          lastName
          email
        }
      }
    }
  }
}";

const PRODUCTS_QUERY: &str = "\
query {
  products(first: 20, sortKey: UPDATED_AT, reverse: true) {
    edges {
      node {
        id
        title
        status
        vendor
        productType
        totalInventory
        updatedAt
        priceRangeV2 {
          minVariantPrice {
            amount
            currencyCode
          }
        }
      }
    }
  }
}";

const CUSTOMERS_QUERY: &str = "\
query {
  customers(first: 20, sortKey: UPDATED_AT, reverse: true) {
    edges {
      node {
        id
        firstName
        lastName
        email
        phone
        numberOfOrders
        amountSpent {
          amount
          currencyCode
        }
      }
    }
  }
}";
