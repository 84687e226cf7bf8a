//! Civil calendar dates and day-number arithmetic.
//!
//! This crate provides:
//! - Julian Day Number ↔ proleptic Gregorian conversions
//! - `CivilDate` / `CivilDateTime`, validated on construction
//! - ISO-8601 style text parsing (`YYYY-MM-DD`, `YYYY-MM-DDThh:mm`)
//!
//! Nothing here knows about lunar months or stems and branches; those
//! live in `bazi_base`.

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{CivilDate, CivilDateTime};
pub use error::{DateField, TimeError};
pub use julian::{days_in_month, gregorian_to_jdn, is_leap_year, jdn_to_gregorian};
