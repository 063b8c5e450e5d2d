use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CapacityGb, Manufacturer, OrderQuantity, ProductId, ProductName, ProductSlug, ResourceUrl,
    SpeedMt, TypeConstraintError,
};

/// Generates a closed enumeration with a canonical wire label per variant.
///
/// The label is used in query strings, JSON payloads and the database, and
/// `FromStr` accepts nothing else.
macro_rules! labeled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical label of the variant.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(TypeConstraintError::InvalidValue(other.to_string())),
                }
            }
        }
    };
}

labeled_enum!(
    /// Lifecycle status of a module.
    ProductStatus {
        Active => "Active",
        DesignDiscouraged => "Design-Discouraged",
        Discontinued => "Discontinued",
        LastBuyAvailable => "Last-Buy-Available",
    }
);

labeled_enum!(
    /// DRAM generation.
    MemoryType {
        Ddr5 => "DDR5",
        Ddr4 => "DDR4",
        Lpddr5 => "LPDDR5",
        Lpddr4 => "LPDDR4",
        Ddr3 => "DDR3",
        Ddr2 => "DDR2",
        Other => "Other",
    }
);

labeled_enum!(
    /// Physical module form factor.
    FormFactor {
        Udimm => "UDIMM",
        Sodimm => "SODIMM",
        Rdimm => "RDIMM",
        Lrdimm => "LRDIMM",
        Other => "Other",
    }
);

labeled_enum!(
    /// Operating temperature grade.
    TempGrade {
        Consumer => "Consumer",
        Industrial => "Industrial",
        Automotive => "Automotive",
        Unknown => "Unknown",
    }
);

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Active
    }
}

impl Default for TempGrade {
    fn default() -> Self {
        TempGrade::Consumer
    }
}

/// Category assigned when none is given.
pub const DEFAULT_CATEGORY: &str = "memory-module";

/// Free-form key/value line shown in the product spec table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSpec {
    pub key: String,
    pub value: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub slug: ProductSlug,
    pub name: ProductName,
    pub manufacturer: Manufacturer,
    pub category: String,
    pub status: ProductStatus,
    pub memory_type: MemoryType,
    pub form_factor: FormFactor,
    pub capacity_gb: CapacityGb,
    pub ecc: bool,
    pub speed_mt: SpeedMt,
    pub voltage_v: Option<f64>,
    pub temp_grade: TempGrade,
    pub lead_time_days: Option<i32>,
    pub stock_qty: i32,
    /// Minimum order quantity accepted by checkout.
    pub moq: OrderQuantity,
    pub datasheet_url: Option<ResourceUrl>,
    pub image_url: Option<ResourceUrl>,
    pub short_desc: String,
    pub specs: Vec<ProductSpec>,
    pub reference_price_jpy: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Editable product attributes.
///
/// Used both to insert a product and as the full replacement on update.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewProduct {
    pub slug: ProductSlug,
    pub name: ProductName,
    pub manufacturer: Manufacturer,
    pub category: String,
    pub status: ProductStatus,
    pub memory_type: MemoryType,
    pub form_factor: FormFactor,
    pub capacity_gb: CapacityGb,
    pub ecc: bool,
    pub speed_mt: SpeedMt,
    pub voltage_v: Option<f64>,
    pub temp_grade: TempGrade,
    pub lead_time_days: Option<i32>,
    pub stock_qty: i32,
    pub moq: OrderQuantity,
    pub datasheet_url: Option<ResourceUrl>,
    pub image_url: Option<ResourceUrl>,
    pub short_desc: String,
    pub specs: Vec<ProductSpec>,
    pub reference_price_jpy: Option<i32>,
}
