//! Builds parameterized INSERT, SELECT, UPDATE, DELETE and search queries for the `items` table.
//! Placeholders are `$n`, accepted by both PostgreSQL and SQLite.

use crate::model::{ItemSearch, NewItem};
use crate::sql::BindValue;

pub const ITEMS_TABLE: &str = "items";

/// Column list in `Item` field order.
const ITEM_COLUMNS: &str = "id, name, description, price, quantity";

/// Writable columns; `id` is never among them.
const WRITABLE_COLUMNS: [&str; 4] = ["name", "description", "price", "quantity"];

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: impl Into<BindValue>) -> usize {
        self.params.push(v.into());
        self.params.len()
    }

    fn push_item(&mut self, item: &NewItem) -> Vec<usize> {
        vec![
            self.push_param(item.name.as_str()),
            self.push_param(item.description.as_str()),
            self.push_param(item.price),
            self.push_param(item.quantity),
        ]
    }
}

/// Turn a user needle into a `LIKE` pattern: escape `\`, `%` and `_`, then wrap in `%` so it
/// matches anywhere. Case folding is left to the backend's `LOWER` on both sides.
pub fn contains_pattern(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len() + 2);
    out.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

/// INSERT all writable columns; storage assigns `id`.
pub fn insert(item: &NewItem) -> QueryBuf {
    let mut q = QueryBuf::new();
    let placeholders: Vec<String> = q.push_item(item).iter().map(|n| format!("${}", n)).collect();
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        ITEMS_TABLE,
        WRITABLE_COLUMNS.join(", "),
        placeholders.join(", "),
        ITEM_COLUMNS
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!("SELECT {} FROM {} WHERE id = ${}", ITEM_COLUMNS, ITEMS_TABLE, n);
    q
}

/// SELECT every row in insertion order.
pub fn select_all() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM {} ORDER BY id", ITEM_COLUMNS, ITEMS_TABLE);
    q
}

/// UPDATE by id: overwrite every writable column. Returns no row when `id` does not exist.
pub fn update(id: i64, item: &NewItem) -> QueryBuf {
    let mut q = QueryBuf::new();
    let sets: Vec<String> = WRITABLE_COLUMNS
        .iter()
        .zip(q.push_item(item))
        .map(|(col, n)| format!("{} = ${}", col, n))
        .collect();
    let id_param = q.push_param(id);
    q.sql = format!(
        "UPDATE {} SET {} WHERE id = ${} RETURNING {}",
        ITEMS_TABLE,
        sets.join(", "),
        id_param,
        ITEM_COLUMNS
    );
    q
}

/// DELETE by id.
pub fn delete(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id);
    q.sql = format!("DELETE FROM {} WHERE id = ${}", ITEMS_TABLE, n);
    q
}

/// SELECT with the conjunction of the supplied criteria, ORDER BY id.
/// Text criteria are case-insensitive substring matches; price bounds are inclusive.
pub fn search(criteria: &ItemSearch) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();

    for (col, needle) in [("name", &criteria.name), ("description", &criteria.description)] {
        if let Some(needle) = needle {
            let n = q.push_param(contains_pattern(needle));
            where_parts.push(format!("LOWER({}) LIKE LOWER(${}) ESCAPE '\\'", col, n));
        }
    }
    if let Some(min) = criteria.min_price {
        let n = q.push_param(min);
        where_parts.push(format!("price >= ${}", n));
    }
    if let Some(max) = criteria.max_price {
        let n = q.push_param(max);
        where_parts.push(format!("price <= ${}", n));
    }
    if let Some(quantity) = criteria.quantity {
        let n = q.push_param(quantity);
        where_parts.push(format!("quantity = ${}", n));
    }

    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.sql = format!(
        "SELECT {} FROM {}{} ORDER BY id",
        ITEM_COLUMNS, ITEMS_TABLE, where_clause
    );
    q
}
