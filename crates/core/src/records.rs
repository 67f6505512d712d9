//! Brand-scoped records and the static loyalty catalog.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{
    AccessOutcome, ActivityId, ActivityKind, Brand, CampaignId, CampaignStatus, CampaignType,
    CustomerId, Email, Kes, OrderId, OrderStatus, PaymentMethod, ReservationId,
    ReservationStatus, RewardId, Tier,
};

/// A loyalty-program member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub points: u32,
    pub spent: Kes,
    pub tier: Tier,
    pub join_date: NaiveDate,
    pub last_visit: Option<NaiveDate>,
    pub visits: u32,
    pub brand: Brand,
}

impl Customer {
    /// Initials for avatars, e.g. `SJ` for Sarah Johnson.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// A table or counter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_phone: String,
    pub table_number: String,
    pub items: Vec<String>,
    pub total: Kes,
    pub points_earned: u32,
    pub status: OrderStatus,
    pub order_time: NaiveDateTime,
    pub completed_time: Option<NaiveDateTime>,
    pub brand: Brand,
    pub payment_method: PaymentMethod,
}

/// A table booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: ReservationId,
    pub customer_name: String,
    pub phone: String,
    pub guests: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub brand: Brand,
    pub status: ReservationStatus,
}

/// A marketing campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub status: CampaignStatus,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    pub reach: u32,
    pub conversions: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub brand: Brand,
}

/// One rung of the loyalty ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyTier {
    pub name: Tier,
    pub min_points: u32,
    pub max_points: u32,
    pub benefits: Vec<String>,
    pub members: u32,
}

/// An item in the rewards catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: RewardId,
    pub name: String,
    pub cost: u32,
    pub category: String,
    pub description: String,
    pub available: bool,
    pub claimed: u32,
}

/// Program-wide headline numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramStats {
    pub total_members: u32,
    pub active_members: u32,
    pub points_issued: u32,
    pub points_redeemed: u32,
    pub redemption_rate: u32,
    pub average_points_per_member: u32,
}

/// Dashboard headline metrics for one brand (or the union of all brands).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandMetrics {
    pub total_users: u32,
    pub revenue: Kes,
    pub points_redeemed: u32,
    pub growth_percent: Decimal,
    pub today_orders: u32,
    pub average_spend: Kes,
    pub satisfaction: Decimal,
}

/// An entry in the dashboard activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub user: String,
    pub action: String,
    pub minutes_ago: u32,
    pub kind: ActivityKind,
}

/// Monthly revenue and sign-ups for the performance chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    pub month: String,
    pub revenue: Kes,
    pub customers: u32,
}

/// A security-relevant event shown on the security screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLogEntry {
    pub event: String,
    pub user: String,
    pub ip: String,
    pub time: NaiveDateTime,
    pub status: AccessOutcome,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_type_field_is_named_type() {
        let campaign = Campaign {
            id: CampaignId::new(1),
            name: "Weekday Brunch".to_owned(),
            description: "Two brunches for the price of one".to_owned(),
            status: CampaignStatus::Active,
            campaign_type: CampaignType::Bundle,
            reach: 0,
            conversions: 0,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            brand: Brand::Amka,
        };
        let json = serde_json::to_value(&campaign).unwrap();
        assert_eq!(json["type"], "Bundle");
        assert_eq!(json["startDate"], "2024-06-01");
    }

    #[test]
    fn test_customer_initials() {
        let customer = Customer {
            id: CustomerId::new(1),
            name: "Sarah Johnson".to_owned(),
            email: Email::parse("sarah.johnson@email.com").unwrap(),
            phone: "+254 712 345 678".to_owned(),
            points: 8540,
            spent: Kes::whole(45_200),
            tier: Tier::Gold,
            join_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            last_visit: None,
            visits: 47,
            brand: Brand::Amka,
        };
        assert_eq!(customer.initials(), "SJ");
    }
}
