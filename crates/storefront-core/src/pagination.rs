//! Pagination and sorting for product listings.
//!
//! Query parameters arrive as raw strings in [`PaginationParams`] and are
//! turned into a [`PageRequest`] before any query is built:
//!
//! - `page`: Page number (1-indexed, default: 1)
//! - `limit`: Items per page (1-100, default: 10)
//! - `sortBy`: One of [`SortColumn`] (default: `id`)
//! - `sortOrder`: `asc`/`ascending` or `desc`/`descending` (default: ascending)
//!
//! Unparseable or non-positive `page`/`limit` values fall back to their
//! defaults. Unknown `sortBy`/`sortOrder` values are rejected, since they
//! end up in the `ORDER BY` clause.
//!
//! # Example
//!
//! ```ignore
//! async fn list(Query(params): Query<PaginationParams>) -> Result<Json<Vec<Product>>, AppError> {
//!     let page = PageRequest::try_from(params).map_err(AppError::bad_request)?;
//!     let rows = repo.list_page(&page).await?;
//!     Ok(Json(rows))
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Deserializes an optional query value into a positive i64.
///
/// Empty, non-numeric, zero and negative values become `None` so the
/// caller falls back to the default instead of producing a negative offset.
fn deserialize_positive_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|value| *value > 0))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("Invalid sortBy '{0}'. Allowed values: id, name, description, price, stock_quantity")]
    Column(String),
    #[error("Invalid sortOrder '{0}'. Allowed values: asc, desc, ascending, descending")]
    Order(String),
}

/// Columns a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    #[default]
    Id,
    Name,
    Description,
    Price,
    StockQuantity,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Id,
        SortColumn::Name,
        SortColumn::Description,
        SortColumn::Price,
        SortColumn::StockQuantity,
    ];

    /// SQL identifier of the column. The only text from a sort request
    /// that is ever placed into a query.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Name => "name",
            SortColumn::Description => "description",
            SortColumn::Price => "price",
            SortColumn::StockQuantity => "stock_quantity",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for SortColumn {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|column| column.as_sql() == s.trim())
            .ok_or_else(|| SortError::Column(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(SortError::Order(s.to_string())),
        }
    }
}

/// Raw listing query parameters.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number, 1-indexed
    #[serde(default, deserialize_with = "deserialize_positive_i64")]
    pub page: Option<i64>,
    /// Items per page (max 100)
    #[serde(default, deserialize_with = "deserialize_positive_i64")]
    pub limit: Option<i64>,
    /// Column to order by
    #[serde(default, rename = "sortBy", alias = "sort_by")]
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    #[serde(default, rename = "sortOrder", alias = "sort_order")]
    pub sort_order: Option<String>,
}

/// A validated page of a sorted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
    pub sort_by: SortColumn,
    pub sort_order: SortOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_by: SortColumn::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl TryFrom<PaginationParams> for PageRequest {
    type Error = SortError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        let sort_by = match params.sort_by.as_deref() {
            None | Some("") => SortColumn::default(),
            Some(raw) => raw.parse()?,
        };
        let sort_order = match params.sort_order.as_deref() {
            None | Some("") => SortOrder::default(),
            Some(raw) => raw.parse()?,
        };

        Ok(Self {
            page: params.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE),
            limit: params
                .limit
                .filter(|l| *l > 0)
                .unwrap_or(DEFAULT_LIMIT)
                .min(MAX_LIMIT),
            sort_by,
            sort_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(json: &str) -> PaginationParams {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_defaults() {
        let page = PageRequest::try_from(PaginationParams::default()).unwrap();
        assert_eq!(page, PageRequest::default());
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.sort_by, SortColumn::Id);
        assert_eq!(page.sort_order, SortOrder::Asc);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_offset_from_page_and_limit() {
        let page = PageRequest::try_from(params(r#"{"page":"3","limit":"20"}"#)).unwrap();
        assert_eq!(page.offset(), 40);
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let cases = [
            r#"{"page":"abc","limit":"xyz"}"#,
            r#"{"page":"0","limit":"0"}"#,
            r#"{"page":"-4","limit":"-1"}"#,
            r#"{"page":"","limit":""}"#,
        ];

        for json in cases {
            let page = PageRequest::try_from(params(json)).unwrap();
            assert_eq!(page.page, DEFAULT_PAGE, "{json}");
            assert_eq!(page.limit, DEFAULT_LIMIT, "{json}");
            assert_eq!(page.offset(), 0, "{json}");
        }
    }

    #[test]
    fn test_limit_is_capped() {
        let page = PageRequest::try_from(params(r#"{"limit":"500"}"#)).unwrap();
        assert_eq!(page.limit, MAX_LIMIT);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let page = PageRequest::try_from(params(r#"{"page":"9223372036854775807","limit":"100"}"#))
            .unwrap();
        assert_eq!(page.offset(), i64::MAX);
    }

    #[test]
    fn test_sort_params_use_camel_case_names() {
        let page =
            PageRequest::try_from(params(r#"{"sortBy":"price","sortOrder":"desc"}"#)).unwrap();
        assert_eq!(page.sort_by, SortColumn::Price);
        assert_eq!(page.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_sort_params_accept_snake_case_alias() {
        let page = PageRequest::try_from(params(
            r#"{"sort_by":"stock_quantity","sort_order":"descending"}"#,
        ))
        .unwrap();
        assert_eq!(page.sort_by, SortColumn::StockQuantity);
        assert_eq!(page.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_sort_order_is_case_insensitive() {
        assert_eq!("ASC".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("Ascending".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
    }

    #[test]
    fn test_unknown_sort_column_rejected() {
        let err = PageRequest::try_from(params(r#"{"sortBy":"id; DROP TABLE products"}"#))
            .unwrap_err();
        assert_eq!(err, SortError::Column("id; DROP TABLE products".to_string()));
    }

    #[test]
    fn test_unknown_sort_order_rejected() {
        let err = PageRequest::try_from(params(r#"{"sortOrder":"asc, (SELECT 1)"}"#)).unwrap_err();
        assert!(matches!(err, SortError::Order(_)));
    }

    #[test]
    fn test_sort_error_messages_list_accepted_values() {
        let order = SortError::Order("up".to_string()).to_string();
        for accepted in ["asc", "desc", "ascending", "descending"] {
            assert!(order.contains(accepted), "{order}");
        }

        let column = SortError::Column("rank".to_string()).to_string();
        for column_name in SortColumn::ALL {
            assert!(column.contains(column_name.as_sql()), "{column}");
        }
    }

    #[test]
    fn test_sort_column_sql_identifiers() {
        let idents: Vec<&str> = SortColumn::ALL.iter().map(|c| c.as_sql()).collect();
        assert_eq!(
            idents,
            vec!["id", "name", "description", "price", "stock_quantity"]
        );
        for column in SortColumn::ALL {
            assert_eq!(column.as_sql().parse::<SortColumn>().unwrap(), column);
        }
    }

    #[test]
    fn test_sort_column_is_case_sensitive() {
        assert!("PRICE".parse::<SortColumn>().is_err());
    }
}
