//! Cart business logic - Handles the per-user cart ledger.
//!
//! A cart is a set of lines, each referencing one menu item by
//! `(item_id, section)` with a quantity and a price snapshot. Adding an item
//! the user already holds increments the existing line instead of creating a
//! second one; the storage-level unique index backs this up under concurrent
//! requests. Quantities never reach zero: a decrement at quantity 1 deletes
//! the line.

use crate::{
    core::catalog,
    entities::{cart_line, CartLine, MenuSection},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{QueryOrder, Set, SqlErr, prelude::*};
use serde::Serialize;
use std::str::FromStr;

/// Quantity update actions a user can apply to one of their cart lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Increment the quantity by one
    Increase,
    /// Decrement the quantity by one, deleting the line at quantity 1
    Decrease,
    /// Delete the line regardless of quantity
    Remove,
}

impl FromStr for CartAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "increase" => Ok(Self::Increase),
            "decrease" => Ok(Self::Decrease),
            "remove" => Ok(Self::Remove),
            other => Err(Error::InvalidAction {
                value: other.to_string(),
            }),
        }
    }
}

/// Result of adding a menu item to the cart
#[derive(Debug, Clone)]
pub struct AddToCartOutcome {
    /// The resulting line, freshly created or incremented
    pub line: cart_line::Model,
    /// True when a new line was created, false when an existing one was
    /// incremented. Feeds user messaging only.
    pub created: bool,
}

/// One cart line together with its computed subtotal
#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    /// The stored line
    #[serde(flatten)]
    pub line: cart_line::Model,
    /// `unit_price × quantity`
    pub subtotal: Decimal,
}

/// A user's full cart with per-line subtotals and the grand total
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    /// Lines, most recently added first
    pub lines: Vec<CartLineView>,
    /// Sum of all line subtotals
    pub total: Decimal,
    /// Number of lines
    pub count: usize,
}

/// Adds a menu item to the user's cart.
///
/// The item must exist in the given section. If the user has no line for it
/// yet, one is created with quantity 1 and a snapshot of the item's current
/// name, image, and price. If a line exists, its quantity is incremented by
/// one; the snapshot is never re-synced on repeat adds.
///
/// Two concurrent first adds of the same item can both miss the existence
/// check; the loser's insert trips the unique index and is retried as an
/// increment, so exactly one line results either way.
pub async fn add_to_cart(
    db: &DatabaseConnection,
    user_id: &str,
    section: MenuSection,
    item_id: i64,
) -> Result<AddToCartOutcome> {
    let item = catalog::get_menu_item(db, section, item_id)
        .await?
        .ok_or_else(|| Error::MenuItemNotFound {
            section: section.to_string(),
            id: item_id,
        })?;

    if let Some(existing) = find_line(db, user_id, section, item_id).await? {
        let line = increment_quantity_atomic(db, existing.id).await?;
        return Ok(AddToCartOutcome {
            line,
            created: false,
        });
    }

    let new_line = cart_line::ActiveModel {
        user_id: Set(user_id.to_string()),
        item_id: Set(item_id),
        section: Set(section),
        item_name: Set(item.name),
        item_image: Set(item.image_url),
        unit_price: Set(item.price),
        quantity: Set(1),
        added_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    match new_line.insert(db).await {
        Ok(line) => Ok(AddToCartOutcome {
            line,
            created: true,
        }),
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            // Lost the race against a concurrent add of the same item; the
            // line exists now, so fold this add into it.
            let existing = find_line(db, user_id, section, item_id)
                .await?
                .ok_or(Error::Database(err))?;
            let line = increment_quantity_atomic(db, existing.id).await?;
            Ok(AddToCartOutcome {
                line,
                created: false,
            })
        }
        Err(err) => Err(err.into()),
    }
}

/// Reads the user's cart: lines newest-first, per-line subtotals, grand
/// total, and line count. No side effects.
pub async fn view_cart(db: &DatabaseConnection, user_id: &str) -> Result<CartView> {
    let lines = CartLine::find()
        .filter(cart_line::Column::UserId.eq(user_id))
        .order_by_desc(cart_line::Column::AddedAt)
        .order_by_desc(cart_line::Column::Id)
        .all(db)
        .await?;

    let lines: Vec<CartLineView> = lines
        .into_iter()
        .map(|line| CartLineView {
            subtotal: line.subtotal(),
            line,
        })
        .collect();

    let total = lines.iter().map(|view| view.subtotal).sum();
    let count = lines.len();

    Ok(CartView {
        lines,
        total,
        count,
    })
}

/// Result of a quantity update
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityOutcome {
    /// The line persists with the given state
    Updated(cart_line::Model),
    /// The line was deleted
    Removed,
}

/// Applies a quantity action to one of the user's cart lines.
///
/// The line must belong to the user; a line id owned by someone else is
/// indistinguishable from a missing one. Decreasing at quantity 1 deletes
/// the line rather than storing a zero.
pub async fn update_quantity(
    db: &DatabaseConnection,
    user_id: &str,
    line_id: i64,
    action: CartAction,
) -> Result<QuantityOutcome> {
    let line = CartLine::find_by_id(line_id)
        .filter(cart_line::Column::UserId.eq(user_id))
        .one(db)
        .await?
        .ok_or(Error::CartLineNotFound { id: line_id })?;

    match action {
        CartAction::Increase => {
            let line = increment_quantity_atomic(db, line.id).await?;
            Ok(QuantityOutcome::Updated(line))
        }
        CartAction::Decrease if line.quantity > 1 => {
            let quantity = line.quantity - 1;
            let mut active: cart_line::ActiveModel = line.into();
            active.quantity = Set(quantity);
            Ok(QuantityOutcome::Updated(active.update(db).await?))
        }
        CartAction::Decrease | CartAction::Remove => {
            line.delete(db).await?;
            Ok(QuantityOutcome::Removed)
        }
    }
}

/// Deletes every line owned by the user.
///
/// Idempotent: clearing an empty cart succeeds and reports 0 lines removed.
pub async fn clear_cart(db: &DatabaseConnection, user_id: &str) -> Result<u64> {
    let result = CartLine::delete_many()
        .filter(cart_line::Column::UserId.eq(user_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

async fn find_line(
    db: &DatabaseConnection,
    user_id: &str,
    section: MenuSection,
    item_id: i64,
) -> Result<Option<cart_line::Model>> {
    CartLine::find()
        .filter(cart_line::Column::UserId.eq(user_id))
        .filter(cart_line::Column::ItemId.eq(item_id))
        .filter(cart_line::Column::Section.eq(section))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Increments a line's quantity with a single atomic database-level update
/// (`quantity = quantity + 1`), so concurrent increments never lose updates.
async fn increment_quantity_atomic<C>(db: &C, line_id: i64) -> Result<cart_line::Model>
where
    C: ConnectionTrait,
{
    CartLine::update_many()
        .col_expr(
            cart_line::Column::Quantity,
            Expr::col(cart_line::Column::Quantity).add(1),
        )
        .filter(cart_line::Column::Id.eq(line_id))
        .exec(db)
        .await?;

    CartLine::find_by_id(line_id)
        .one(db)
        .await?
        .ok_or(Error::CartLineNotFound { id: line_id })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]
    use super::*;
    use crate::test_utils::{create_test_menu_item, setup_test_db, USER};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_add_unknown_item_fails() -> Result<()> {
        let db = setup_test_db().await?;

        let result = add_to_cart(&db, USER, MenuSection::Veg, 42).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MenuItemNotFound { .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_is_section_scoped() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_menu_item(&db, MenuSection::Veg, "Dal Fry", dec!(6.50)).await?;

        // The right id under the wrong section must not produce a line
        let result = add_to_cart(&db, USER, MenuSection::NonVeg, item.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MenuItemNotFound { .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_repeat_add_increments_single_line() -> Result<()> {
        let db = setup_test_db().await?;
        let item =
            create_test_menu_item(&db, MenuSection::NonVeg, "Chicken 65", dec!(7.50)).await?;

        let first = add_to_cart(&db, USER, MenuSection::NonVeg, item.id).await?;
        assert!(first.created);
        assert_eq!(first.line.quantity, 1);

        let second = add_to_cart(&db, USER, MenuSection::NonVeg, item.id).await?;
        assert!(!second.created);
        assert_eq!(second.line.id, first.line.id);
        assert_eq!(second.line.quantity, 2);

        let cart = view_cart(&db, USER).await?;
        assert_eq!(cart.count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_snapshot_is_not_resynced_on_repeat_add() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_menu_item(&db, MenuSection::Veg, "Dal Fry", dec!(6.50)).await?;

        add_to_cart(&db, USER, MenuSection::Veg, item.id).await?;

        // Reprice the item between adds
        crate::core::catalog::update_menu_item(
            &db,
            MenuSection::Veg,
            item.id,
            crate::test_utils::new_test_item("Dal Fry Deluxe", dec!(8.00)),
        )
        .await?;

        let second = add_to_cart(&db, USER, MenuSection::Veg, item.id).await?;
        assert_eq!(second.line.unit_price, dec!(6.50));
        assert_eq!(second.line.item_name, "Dal Fry");
        assert_eq!(second.line.subtotal(), dec!(13.00));

        Ok(())
    }

    #[tokio::test]
    async fn test_view_cart_totals_and_order() -> Result<()> {
        let db = setup_test_db().await?;
        let nonveg =
            create_test_menu_item(&db, MenuSection::NonVeg, "Chicken Biryani", dec!(9.99)).await?;
        let veg = create_test_menu_item(&db, MenuSection::Veg, "Veg Korma", dec!(4.50)).await?;

        add_to_cart(&db, USER, MenuSection::NonVeg, nonveg.id).await?;
        add_to_cart(&db, USER, MenuSection::Veg, veg.id).await?;
        add_to_cart(&db, USER, MenuSection::Veg, veg.id).await?;

        let cart = view_cart(&db, USER).await?;
        assert_eq!(cart.count, 2);

        // Newest line first
        assert_eq!(cart.lines[0].line.item_name, "Veg Korma");
        assert_eq!(cart.lines[0].subtotal, dec!(9.00));
        assert_eq!(cart.lines[1].line.item_name, "Chicken Biryani");
        assert_eq!(cart.lines[1].subtotal, dec!(9.99));
        assert_eq!(cart.total, dec!(18.99));

        // Total always equals the sum of subtotals
        let summed: Decimal = cart.lines.iter().map(|l| l.subtotal).sum();
        assert_eq!(cart.total, summed);

        Ok(())
    }

    #[tokio::test]
    async fn test_view_empty_cart() -> Result<()> {
        let db = setup_test_db().await?;

        let cart = view_cart(&db, USER).await?;
        assert!(cart.lines.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
        assert_eq!(cart.count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_increase_and_decrease() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_menu_item(&db, MenuSection::Veg, "Dal Fry", dec!(6.50)).await?;
        let added = add_to_cart(&db, USER, MenuSection::Veg, item.id).await?;

        let outcome = update_quantity(&db, USER, added.line.id, CartAction::Increase).await?;
        let QuantityOutcome::Updated(line) = outcome else {
            panic!("expected line to persist");
        };
        assert_eq!(line.quantity, 2);

        let outcome = update_quantity(&db, USER, added.line.id, CartAction::Decrease).await?;
        let QuantityOutcome::Updated(line) = outcome else {
            panic!("expected line to persist");
        };
        assert_eq!(line.quantity, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_decrease_at_one_removes_line() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_menu_item(&db, MenuSection::Veg, "Dal Fry", dec!(6.50)).await?;
        let added = add_to_cart(&db, USER, MenuSection::Veg, item.id).await?;

        let outcome = update_quantity(&db, USER, added.line.id, CartAction::Decrease).await?;
        assert_eq!(outcome, QuantityOutcome::Removed);

        let cart = view_cart(&db, USER).await?;
        assert_eq!(cart.count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_deletes_regardless_of_quantity() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_menu_item(&db, MenuSection::Veg, "Dal Fry", dec!(6.50)).await?;
        let added = add_to_cart(&db, USER, MenuSection::Veg, item.id).await?;
        update_quantity(&db, USER, added.line.id, CartAction::Increase).await?;

        let outcome = update_quantity(&db, USER, added.line.id, CartAction::Remove).await?;
        assert_eq!(outcome, QuantityOutcome::Removed);
        assert_eq!(view_cart(&db, USER).await?.count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_no_cross_user_access() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_menu_item(&db, MenuSection::Veg, "Dal Fry", dec!(6.50)).await?;
        let added = add_to_cart(&db, USER, MenuSection::Veg, item.id).await?;

        let result = update_quantity(&db, "someone_else", added.line.id, CartAction::Remove).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::CartLineNotFound { .. }
        ));

        // The line is untouched
        let cart = view_cart(&db, USER).await?;
        assert_eq!(cart.count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_carts_are_per_user() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_menu_item(&db, MenuSection::Veg, "Dal Fry", dec!(6.50)).await?;

        add_to_cart(&db, USER, MenuSection::Veg, item.id).await?;
        add_to_cart(&db, "other_user", MenuSection::Veg, item.id).await?;

        assert_eq!(view_cart(&db, USER).await?.count, 1);
        assert_eq!(view_cart(&db, "other_user").await?.count, 1);

        let removed = clear_cart(&db, USER).await?;
        assert_eq!(removed, 1);
        assert_eq!(view_cart(&db, "other_user").await?.count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_clear_cart_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;

        assert_eq!(clear_cart(&db, USER).await?, 0);

        let item = create_test_menu_item(&db, MenuSection::Veg, "Dal Fry", dec!(6.50)).await?;
        add_to_cart(&db, USER, MenuSection::Veg, item.id).await?;

        assert_eq!(clear_cart(&db, USER).await?, 1);
        assert_eq!(clear_cart(&db, USER).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_line_insert_is_rejected_by_schema() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_menu_item(&db, MenuSection::Veg, "Dal Fry", dec!(6.50)).await?;
        add_to_cart(&db, USER, MenuSection::Veg, item.id).await?;

        // Bypass add_to_cart to simulate the racing duplicate insert
        let duplicate = cart_line::ActiveModel {
            user_id: Set(USER.to_string()),
            item_id: Set(item.id),
            section: Set(MenuSection::Veg),
            item_name: Set(item.name.clone()),
            item_image: Set(item.image_url.clone()),
            unit_price: Set(item.price),
            quantity: Set(1),
            added_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };
        let err = duplicate.insert(&db).await.unwrap_err();
        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        ));

        Ok(())
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!("increase".parse::<CartAction>().unwrap(), CartAction::Increase);
        assert_eq!("decrease".parse::<CartAction>().unwrap(), CartAction::Decrease);
        assert_eq!("remove".parse::<CartAction>().unwrap(), CartAction::Remove);
        assert!(matches!(
            "bogus".parse::<CartAction>().unwrap_err(),
            Error::InvalidAction { value } if value == "bogus"
        ));
    }
}
