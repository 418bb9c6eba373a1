//! Grocery list item domain model.
//!
//! # Responsibility
//! - Define the insert payload and the persisted record for one list line.
//!
//! # Invariants
//! - `id` is assigned by storage and never changes afterwards.
//! - `grocery_list_id`/`product_id` are opaque references; integrity is the
//!   caller's responsibility.

use serde::{Deserialize, Serialize};

/// Storage-assigned row identifier of a grocery list item.
pub type GroceryListItemId = i64;

/// Insert payload for a grocery list item that has no id yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroceryListItem {
    /// Grocery list this line belongs to.
    pub grocery_list_id: i64,
    /// Product referenced by this line.
    pub product_id: i64,
    /// Quantity of the product.
    pub amount: i64,
}

impl NewGroceryListItem {
    pub const fn new(grocery_list_id: i64, product_id: i64, amount: i64) -> Self {
        Self {
            grocery_list_id,
            product_id,
            amount,
        }
    }

    /// Attaches a storage-assigned id, producing the persisted shape.
    pub const fn with_id(self, id: GroceryListItemId) -> GroceryListItem {
        GroceryListItem {
            id,
            grocery_list_id: self.grocery_list_id,
            product_id: self.product_id,
            amount: self.amount,
        }
    }
}

/// Persisted grocery list item.
///
/// Serialized with camelCase field names (`groceryListId`, `productId`) to
/// match the external table naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryListItem {
    pub id: GroceryListItemId,
    pub grocery_list_id: i64,
    pub product_id: i64,
    pub amount: i64,
}

impl GroceryListItem {
    /// Returns the mutable fields without the id.
    pub const fn payload(&self) -> NewGroceryListItem {
        NewGroceryListItem::new(self.grocery_list_id, self.product_id, self.amount)
    }
}
