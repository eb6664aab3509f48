//! Search business logic - Free-text search across the menu catalog.
//!
//! Queries are trimmed and case-folded. A handful of keyword shortcuts map
//! straight to whole sections and take precedence over general matching;
//! everything else is a substring scan of each section's name, price (as
//! text), and category. Results keep section order and carry their section
//! tag; there is no ranking, pagination, or deduplication.

use crate::{
    core::catalog,
    entities::{menu_item, MenuItem, MenuSection},
    errors::Result,
};
use sea_orm::sea_query::Expr;
use sea_orm::{Condition, QueryOrder, prelude::*};

/// Outcome of a search: the normalized query and the matching items.
///
/// An empty normalized query yields no results and is not an error; the
/// caller decides how to surface the warning.
#[derive(Debug, Clone)]
pub struct SearchResults {
    /// The query after trimming and case-folding
    pub query: String,
    /// Matching items, tagged with their section, in section order
    pub results: Vec<menu_item::Model>,
}

/// Searches the catalog.
///
/// Keyword shortcuts return exactly one section regardless of what the
/// words would match textually elsewhere:
/// - "veg" / "pure veg" → all Veg items
/// - "nonveg" / "non-veg" / "non veg" → all NonVeg items
/// - "starter" / "vegstarter" / "nonvegstarter" → all Starter items
///
/// Any other query matches items whose name, price rendered as text, or
/// category contains it case-insensitively, section by section.
pub async fn search(db: &DatabaseConnection, raw_query: &str) -> Result<SearchResults> {
    let query = raw_query.trim().to_lowercase();

    if query.is_empty() {
        return Ok(SearchResults {
            query,
            results: Vec::new(),
        });
    }

    let results = match query.as_str() {
        "veg" | "pure veg" => catalog::list_section(db, MenuSection::Veg).await?,
        "nonveg" | "non-veg" | "non veg" => catalog::list_section(db, MenuSection::NonVeg).await?,
        "starter" | "vegstarter" | "nonvegstarter" => {
            catalog::list_section(db, MenuSection::Starter).await?
        }
        _ => {
            let mut all = Vec::new();
            for section in MenuSection::ALL {
                all.extend(search_section(db, section, &query).await?);
            }
            all
        }
    };

    Ok(SearchResults { query, results })
}

async fn search_section(
    db: &DatabaseConnection,
    section: MenuSection,
    query: &str,
) -> Result<Vec<menu_item::Model>> {
    // SQLite LIKE is case-insensitive for ASCII; the price column is
    // compared as rendered text.
    let price_pattern = format!("%{query}%");

    MenuItem::find()
        .filter(menu_item::Column::Section.eq(section))
        .filter(
            Condition::any()
                .add(menu_item::Column::Name.contains(query))
                .add(menu_item::Column::Category.contains(query))
                .add(Expr::cust_with_values(
                    "CAST(price AS TEXT) LIKE ?",
                    [price_pattern],
                )),
        )
        .order_by_desc(menu_item::Column::AddedOn)
        .order_by_desc(menu_item::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
