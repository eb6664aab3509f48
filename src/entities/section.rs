//! Menu section tag - the discriminator identifying which of the four menu
//! collections an item belongs to.
//!
//! The four collections share one `menu_items` table parameterized by this
//! tag rather than four identically-shaped tables.

use crate::errors::Error;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Menu section discriminator stored alongside each menu item and cart line
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum MenuSection {
    /// Non-vegetarian mains
    #[sea_orm(string_value = "nonveg")]
    NonVeg,
    /// Vegetarian mains
    #[sea_orm(string_value = "veg")]
    Veg,
    /// Starters
    #[sea_orm(string_value = "starter")]
    Starter,
    /// Cool drinks
    #[sea_orm(string_value = "cooldrink")]
    Cooldrink,
}

impl MenuSection {
    /// All sections in menu display order.
    pub const ALL: [Self; 4] = [Self::NonVeg, Self::Veg, Self::Starter, Self::Cooldrink];

    /// The stable tag string used in routes and stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NonVeg => "nonveg",
            Self::Veg => "veg",
            Self::Starter => "starter",
            Self::Cooldrink => "cooldrink",
        }
    }
}

impl fmt::Display for MenuSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuSection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nonveg" => Ok(Self::NonVeg),
            "veg" => Ok(Self::Veg),
            "starter" => Ok(Self::Starter),
            "cooldrink" => Ok(Self::Cooldrink),
            other => Err(Error::InvalidSection {
                value: other.to_string(),
            }),
        }
    }
}
