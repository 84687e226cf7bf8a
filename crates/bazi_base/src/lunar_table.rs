//! Packed lunar-year table for 1900-2100.
//!
//! One `u32` per year:
//! - bits 15..4: month 1..12 is long (30 days) when set, short (29) otherwise
//! - bits 3..0: 1-based leap-month position, 0 when the year has none
//! - bit 16: the leap month is long
//!
//! A year therefore has `348 + long months` days, plus 29 or 30 when it has
//! a leap month.

use crate::error::BaziError;

/// First lunar year covered by the table.
pub const FIRST_YEAR: i32 = 1900;
/// Last lunar year covered by the table.
pub const LAST_YEAR: i32 = 2100;

const LUNAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5d0, 0x14573, 0x052d0, 0x0a9a8, 0x0e950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0,
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    0x05aa0, 0x076a3, 0x096d0, 0x04bd7, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    0x0d520,
];

/// Decoded view over one packed year record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarYearInfo(u32);

impl LunarYearInfo {
    /// Raw packed record.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// 1-based leap-month position, 0 when there is none.
    pub const fn leap_month(self) -> u8 {
        (self.0 & 0xf) as u8
    }

    /// Length of the leap month, 0 when there is none.
    pub const fn leap_month_days(self) -> u32 {
        if self.leap_month() == 0 {
            0
        } else if self.0 & 0x1_0000 != 0 {
            30
        } else {
            29
        }
    }

    /// Length of regular month `month` (1-12). The caller guarantees the range.
    pub const fn month_days(self, month: u8) -> u32 {
        if self.0 & (0x1_0000 >> month) != 0 { 30 } else { 29 }
    }

    /// Total days in the lunar year, leap month included.
    pub const fn year_days(self) -> u32 {
        // Long-month bits sit in 0xfff0; each adds one day to the 29-day base.
        348 + (self.0 & 0xfff0).count_ones() + self.leap_month_days()
    }
}

/// Packed record for `year`, or [`BaziError::DateOutOfRange`].
pub fn year_info(year: i32) -> Result<LunarYearInfo, BaziError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(BaziError::DateOutOfRange { year });
    }
    Ok(LunarYearInfo(LUNAR_INFO[(year - FIRST_YEAR) as usize]))
}

/// Total days in lunar `year`.
pub fn lunar_year_days(year: i32) -> Result<u32, BaziError> {
    Ok(year_info(year)?.year_days())
}

/// Leap-month position of `year` (0 = none).
pub fn leap_month(year: i32) -> Result<u8, BaziError> {
    Ok(year_info(year)?.leap_month())
}

/// Days in the leap month of `year` (0 = none).
pub fn leap_month_days(year: i32) -> Result<u32, BaziError> {
    Ok(year_info(year)?.leap_month_days())
}

/// Days in regular month `month` (1-12) of lunar `year`.
pub fn lunar_month_days(year: i32, month: u8) -> Result<u32, BaziError> {
    let info = year_info(year)?;
    if !(1..=12).contains(&month) {
        return Err(BaziError::InvalidLunarDate {
            field: bazi_time::DateField::Month,
            value: month as i64,
        });
    }
    Ok(info.month_days(month))
}
