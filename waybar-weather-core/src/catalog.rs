//! Static tables shipped with the OpenWeatherMap condition taxonomy.
//!
//! Both catalogs are plain `static` data: built at compile time, never
//! mutated, safe to read from anywhere.

pub mod conditions;
pub mod icons;

pub use conditions::{Condition, describe};
pub use icons::icon;
