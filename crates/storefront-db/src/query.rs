//! SQL text for product statements.
//!
//! All values are bound as positional parameters. The paged listing is the
//! only statement with a dynamic part, and that part is assembled from the
//! `&'static str` identifiers of [`SortColumn`] and [`SortOrder`].
//!
//! [`SortColumn`]: storefront_core::SortColumn
//! [`SortOrder`]: storefront_core::SortOrder

use storefront_core::{PageRequest, SortColumn};

pub const PRODUCT_COLUMNS: &str = "id, name, description, price, stock_quantity";

pub fn insert_product() -> String {
    format!(
        "INSERT INTO products (name, description, price, stock_quantity) \
         VALUES ($1, $2, $3, $4) RETURNING {PRODUCT_COLUMNS}"
    )
}

pub fn select_product_by_id() -> String {
    format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1")
}

pub fn select_products() -> String {
    format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id")
}

pub fn update_product() -> String {
    format!(
        "UPDATE products SET name = $1, description = $2, price = $3, stock_quantity = $4 \
         WHERE id = $5 RETURNING {PRODUCT_COLUMNS}"
    )
}

pub fn delete_product() -> String {
    format!("DELETE FROM products WHERE id = $1 RETURNING {PRODUCT_COLUMNS}")
}

/// `SELECT ... ORDER BY <column> <direction> LIMIT $1 OFFSET $2`.
///
/// Sorting by anything but `id` appends `id ASC` so that rows with equal
/// sort keys keep a fixed position across pages.
pub fn select_products_page(page: &PageRequest) -> String {
    let mut order_by = format!("{} {}", page.sort_by.as_sql(), page.sort_order.as_sql());
    if page.sort_by != SortColumn::Id {
        order_by.push_str(", id ASC");
    }

    format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY {order_by} LIMIT $1 OFFSET $2")
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::SortOrder;

    #[test]
    fn test_default_page_orders_by_id() {
        let sql = select_products_page(&PageRequest::default());
        assert_eq!(
            sql,
            "SELECT id, name, description, price, stock_quantity FROM products \
             ORDER BY id ASC LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn test_page_with_tie_breaker() {
        let page = PageRequest {
            sort_by: SortColumn::Price,
            sort_order: SortOrder::Desc,
            ..PageRequest::default()
        };
        let sql = select_products_page(&page);
        assert!(sql.contains("ORDER BY price DESC, id ASC LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn test_every_sort_column_produces_static_sql() {
        for column in SortColumn::ALL {
            for order in [SortOrder::Asc, SortOrder::Desc] {
                let page = PageRequest {
                    sort_by: column,
                    sort_order: order,
                    ..PageRequest::default()
                };
                let sql = select_products_page(&page);
                assert!(sql.contains(&format!("ORDER BY {} {}", column.as_sql(), order.as_sql())));
                assert!(!sql.contains(';'));
            }
        }
    }

    #[test]
    fn test_mutations_bind_all_values() {
        assert!(insert_product().contains("VALUES ($1, $2, $3, $4)"));
        assert!(update_product().contains("WHERE id = $5"));
        assert!(delete_product().starts_with("DELETE FROM products WHERE id = $1"));
        assert!(select_product_by_id().ends_with("WHERE id = $1"));
    }
}
