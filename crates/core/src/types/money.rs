//! Kenyan shilling amounts using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Shillings spent per loyalty point earned on an order.
pub const KES_PER_POINT: u32 = 10;

/// An amount in Kenyan shillings.
///
/// Every brand bills in KES, so there is no currency field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kes(Decimal);

impl Kes {
    /// Zero shillings.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create an amount from a decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create an amount from whole shillings.
    #[must_use]
    pub fn whole(shillings: i64) -> Self {
        Self(Decimal::from(shillings))
    }

    /// The underlying decimal.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Loyalty points earned for spending this amount: one per
    /// [`KES_PER_POINT`] shillings, rounded down.
    ///
    /// `None` for negative amounts and for amounts whose points do not fit
    /// in a `u32`.
    #[must_use]
    pub fn points_earned(&self) -> Option<u32> {
        if self.is_negative() {
            return None;
        }
        (self.0 / Decimal::from(KES_PER_POINT)).floor().to_u32()
    }
}

/// Saturates at the decimal range instead of overflowing.
impl Add for Kes {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Kes {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Kes {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Decimal> for Kes {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// Formats as `KES 45,200` (or `KES 1,234.50` when there are cents).
impl fmt::Display for Kes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(2);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let abs = rounded.abs();
        let whole = abs.trunc();
        let cents = ((abs - whole) * Decimal::ONE_HUNDRED).to_u32().unwrap_or(0);

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if cents == 0 {
            write!(f, "KES {sign}{grouped}")
        } else {
            write!(f, "KES {sign}{grouped}.{cents:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Kes::whole(850).to_string(), "KES 850");
        assert_eq!(Kes::whole(45_200).to_string(), "KES 45,200");
        assert_eq!(Kes::whole(1_234_567).to_string(), "KES 1,234,567");
        assert_eq!(Kes::whole(0).to_string(), "KES 0");
    }

    #[test]
    fn test_display_cents() {
        let amount = Kes::new(Decimal::from_str("1234.5").unwrap_or_default());
        assert_eq!(amount.to_string(), "KES 1,234.50");
    }

    #[test]
    fn test_points_earned_rounds_down() {
        assert_eq!(Kes::whole(850).points_earned(), Some(85));
        assert_eq!(Kes::whole(2_405).points_earned(), Some(240));
        assert_eq!(Kes::whole(9).points_earned(), Some(0));
        assert_eq!(Kes::whole(-50).points_earned(), None);
    }

    #[test]
    fn test_points_out_of_range() {
        let huge = Kes::new(Decimal::from_str("50000000000000000000000000000").unwrap_or_default());
        assert_eq!(huge.points_earned(), None);
        assert_eq!(Kes::whole(42_949_672_959).points_earned(), Some(u32::MAX));
        assert_eq!(Kes::whole(42_949_672_960).points_earned(), None);
    }

    #[test]
    fn test_sum_saturates() {
        let total: Kes = [Kes::new(Decimal::MAX), Kes::new(Decimal::MAX)].iter().sum();
        assert_eq!(total, Kes::new(Decimal::MAX));
    }

    #[test]
    fn test_sum() {
        let total: Kes = [Kes::whole(850), Kes::whole(450)].iter().sum();
        assert_eq!(total, Kes::whole(1_300));
    }

    #[test]
    fn test_negative() {
        assert!(Kes::whole(-1).is_negative());
        assert!(!Kes::ZERO.is_negative());
    }
}
