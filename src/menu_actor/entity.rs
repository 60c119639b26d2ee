//! [`ActorEntity`] implementation for [`MenuItem`].
//!
//! Validation of admin input lives here, so the menu store never holds an item
//! with an empty name or a negative price. Stock mutations go through
//! [`Stock`](crate::model::Stock), which keeps `inStock` in step with `count`.

use super::actions::{MenuAction, MenuActionResult};
use super::error::MenuError;
use crate::framework::ActorEntity;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use rust_decimal::Decimal;

fn validate(name: &str, price: Decimal, category: &str) -> Result<(), MenuError> {
    if name.trim().is_empty() {
        return Err(MenuError::ValidationError("name must not be empty".to_string()));
    }
    if category.trim().is_empty() {
        return Err(MenuError::ValidationError(
            "category must not be empty".to_string(),
        ));
    }
    if price < Decimal::ZERO {
        return Err(MenuError::ValidationError(format!(
            "price must not be negative, got {price}"
        )));
    }
    Ok(())
}

impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = MenuActionResult;
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, MenuError> {
        validate(&params.name, params.price, &params.category)?;
        Ok(Self::new(
            id,
            params.name,
            params.price,
            params.category,
            params.count,
        ))
    }

    /// Replaces every editable field. `inStock` is recomputed from the new count.
    fn on_update(&mut self, update: MenuItemUpdate) -> Result<(), MenuError> {
        validate(&update.name, update.price, &update.category)?;
        self.name = update.name;
        self.price = update.price;
        self.category = update.category;
        self.stock.set(update.count);
        Ok(())
    }

    /// # Actions
    /// - `CheckStock`: returns the current count
    /// - `DecrementIfAvailable`: guarded decrement, fails without side effects on a shortfall
    /// - `Restock`: adds units back
    fn handle_action(&mut self, action: MenuAction) -> Result<MenuActionResult, MenuError> {
        match action {
            MenuAction::CheckStock => Ok(MenuActionResult::CheckStock(self.count())),
            MenuAction::DecrementIfAvailable(0) | MenuAction::Restock(0) => {
                Err(MenuError::InvalidQuantity(0))
            }
            MenuAction::DecrementIfAvailable(quantity) => self
                .stock
                .try_debit(quantity)
                .map(MenuActionResult::Decremented)
                .map_err(|s| MenuError::InsufficientStock {
                    requested: s.requested,
                    available: s.available,
                }),
            MenuAction::Restock(quantity) => {
                Ok(MenuActionResult::Restocked(self.stock.credit(quantity)))
            }
        }
    }
}
