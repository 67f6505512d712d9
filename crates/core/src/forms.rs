//! Validation for the add-record and staff-registration forms.
//!
//! Each form deserializes leniently (missing fields become empty), then
//! `validate` checks every field and reports all failures at once. A form
//! that fails validation must not touch any table.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::records::{Campaign, Customer, Order, Reservation};
use crate::types::{
    Brand, CampaignId, CampaignStatus, CampaignType, CustomerId, Email, Kes, OrderId,
    OrderStatus, PaymentMethod, ReservationId, ReservationStatus, Role, Tier,
};

/// One failing field and the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every failing field of a submitted form.
#[derive(thiserror::Error, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[error("validation failed on {} field(s)", .0.len())]
#[serde(transparent)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    fn check(&mut self, ok: bool, field: &'static str, message: &'static str) {
        if !ok {
            self.0.push(FieldError { field, message });
        }
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.0.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Largest total a single order may carry, in shillings.
pub const MAX_ORDER_TOTAL: i64 = 1_000_000;

/// Accepts a JSON string, number or null and keeps its text, so numeric
/// inputs are checked by `validate` like every other field.
fn number_or_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Signed(i64),
        Unsigned(u64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => String::new(),
        Some(Raw::Text(text)) => text,
        Some(Raw::Signed(n)) => n.to_string(),
        Some(Raw::Unsigned(n)) => n.to_string(),
        Some(Raw::Float(n)) => n.to_string(),
    })
}

fn min_chars(s: &str, min: usize) -> bool {
    s.trim().chars().count() >= min
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// 24-hour `H:MM` or `HH:MM`.
fn parse_clock(s: &str) -> Option<NaiveTime> {
    let (hour, minute) = s.trim().split_once(':')?;
    let digits = |part: &str, lens: &[usize]| {
        lens.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(hour, &[1, 2]) || !digits(minute, &[2]) {
        return None;
    }
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}

// =============================================================================
// Customer
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewCustomerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct ValidCustomer {
    name: String,
    email: Email,
    phone: String,
}

impl NewCustomerForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(self) -> Result<ValidCustomer, FieldErrors> {
        let mut errors = FieldErrors::default();
        let email = Email::parse(self.email.trim()).ok();

        errors.check(min_chars(&self.name, 2), "name", "Name must be at least 2 characters.");
        errors.check(email.is_some(), "email", "Please enter a valid email address.");
        errors.check(min_chars(&self.phone, 10), "phone", "A valid phone number is required.");

        match email {
            Some(email) => errors.finish(|| ValidCustomer {
                name: self.name.trim().to_owned(),
                email,
                phone: self.phone.trim().to_owned(),
            }),
            None => Err(errors),
        }
    }
}

impl ValidCustomer {
    /// A fresh Bronze member with no points or visits.
    #[must_use]
    pub fn into_customer(self, id: CustomerId, brand: Brand, today: NaiveDate) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            points: 0,
            spent: Kes::ZERO,
            tier: Tier::Bronze,
            join_date: today,
            last_visit: None,
            visits: 0,
            brand,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewOrderForm {
    pub customer_name: String,
    pub customer_phone: String,
    pub table_number: String,
    /// Comma-separated item names.
    pub items: String,
    /// Decimal shillings, as text or a number; empty means not yet priced.
    #[serde(deserialize_with = "number_or_text")]
    pub total: String,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone)]
pub struct ValidOrder {
    customer_name: String,
    customer_phone: String,
    table_number: String,
    items: Vec<String>,
    total: Kes,
    points_earned: u32,
    payment_method: PaymentMethod,
}

impl NewOrderForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(self) -> Result<ValidOrder, FieldErrors> {
        let mut errors = FieldErrors::default();

        let total = match self.total.trim() {
            "" => Some(Kes::ZERO),
            raw => raw.parse::<Decimal>().ok().map(Kes::new),
        };
        let points_earned = total.and_then(|t| t.points_earned());
        let items: Vec<String> = self
            .items
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect();

        errors.check(
            min_chars(&self.customer_name, 2),
            "customerName",
            "Customer name is required.",
        );
        errors.check(
            min_chars(&self.customer_phone, 10),
            "customerPhone",
            "A valid phone number is required.",
        );
        errors.check(
            min_chars(&self.table_number, 1),
            "tableNumber",
            "Table number is required.",
        );
        errors.check(
            min_chars(&self.items, 3) && !items.is_empty(),
            "items",
            "Please list at least one item.",
        );
        if total.is_some_and(|t| t > Kes::whole(MAX_ORDER_TOTAL)) {
            errors.check(false, "total", "Total cannot exceed KES 1,000,000.");
        } else {
            errors.check(
                points_earned.is_some(),
                "total",
                "Total must be a positive amount.",
            );
        }

        errors.finish(|| ValidOrder {
            customer_name: self.customer_name.trim().to_owned(),
            customer_phone: self.customer_phone.trim().to_owned(),
            table_number: self.table_number.trim().to_owned(),
            items,
            total: total.unwrap_or(Kes::ZERO),
            points_earned: points_earned.unwrap_or(0),
            payment_method: self.payment_method.unwrap_or_default(),
        })
    }
}

impl ValidOrder {
    /// A pending order placed at `now`, earning one point per ten shillings.
    #[must_use]
    pub fn into_order(self, id: OrderId, brand: Brand, now: NaiveDateTime) -> Order {
        Order {
            id,
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            table_number: self.table_number,
            items: self.items,
            points_earned: self.points_earned,
            total: self.total,
            status: OrderStatus::Pending,
            order_time: now,
            completed_time: None,
            brand,
            payment_method: self.payment_method,
        }
    }
}

// =============================================================================
// Reservation
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewReservationForm {
    pub customer_name: String,
    pub phone: String,
    /// Whole number, as text or a number.
    #[serde(deserialize_with = "number_or_text")]
    pub guests: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, 24-hour.
    pub time: String,
}

#[derive(Debug, Clone)]
pub struct ValidReservation {
    customer_name: String,
    phone: String,
    guests: u32,
    date: NaiveDate,
    time: NaiveTime,
}

impl NewReservationForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(self) -> Result<ValidReservation, FieldErrors> {
        let mut errors = FieldErrors::default();
        let guests = self
            .guests
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|g| *g >= 1);
        let date = parse_date(&self.date);
        let time = parse_clock(&self.time);

        errors.check(
            min_chars(&self.customer_name, 2),
            "customerName",
            "Name must be at least 2 characters.",
        );
        errors.check(min_chars(&self.phone, 10), "phone", "A valid phone number is required.");
        errors.check(guests.is_some(), "guests", "There must be at least 1 guest.");
        errors.check(date.is_some(), "date", "Invalid date");
        errors.check(time.is_some(), "time", "Invalid time format (HH:MM)");

        match (guests, date, time) {
            (Some(guests), Some(date), Some(time)) => errors.finish(|| ValidReservation {
                customer_name: self.customer_name.trim().to_owned(),
                phone: self.phone.trim().to_owned(),
                guests,
                date,
                time,
            }),
            _ => Err(errors),
        }
    }
}

impl ValidReservation {
    #[must_use]
    pub fn into_reservation(self, id: ReservationId, brand: Brand) -> Reservation {
        Reservation {
            id,
            customer_name: self.customer_name,
            phone: self.phone,
            guests: self.guests,
            date: self.date,
            time: self.time,
            brand,
            status: ReservationStatus::Confirmed,
        }
    }
}

// =============================================================================
// Campaign
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewCampaignForm {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub campaign_type: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone)]
pub struct ValidCampaign {
    name: String,
    description: String,
    campaign_type: CampaignType,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl NewCampaignForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(self) -> Result<ValidCampaign, FieldErrors> {
        let mut errors = FieldErrors::default();
        let campaign_type = self.campaign_type.trim().parse::<CampaignType>().ok();
        let start_date = parse_date(&self.start_date);
        let end_date = parse_date(&self.end_date);

        errors.check(
            min_chars(&self.name, 5),
            "name",
            "Campaign name must be at least 5 characters.",
        );
        errors.check(
            min_chars(&self.description, 10),
            "description",
            "Description must be at least 10 characters.",
        );
        errors.check(campaign_type.is_some(), "type", "Please select a campaign type.");
        errors.check(start_date.is_some(), "startDate", "Please enter a valid start date.");
        errors.check(end_date.is_some(), "endDate", "Please enter a valid end date.");
        if let (Some(start), Some(end)) = (start_date, end_date) {
            errors.check(end >= start, "endDate", "End date must be on or after the start date.");
        }

        match (campaign_type, start_date, end_date) {
            (Some(campaign_type), Some(start_date), Some(end_date)) => {
                errors.finish(|| ValidCampaign {
                    name: self.name.trim().to_owned(),
                    description: self.description.trim().to_owned(),
                    campaign_type,
                    start_date,
                    end_date,
                })
            }
            _ => Err(errors),
        }
    }
}

impl ValidCampaign {
    /// A campaign with no reach yet. It is `scheduled` when it starts after
    /// `today`, otherwise `active`.
    #[must_use]
    pub fn into_campaign(self, id: CampaignId, brand: Brand, today: NaiveDate) -> Campaign {
        let status = if self.start_date > today {
            CampaignStatus::Scheduled
        } else {
            CampaignStatus::Active
        };
        Campaign {
            id,
            name: self.name,
            description: self.description,
            status,
            campaign_type: self.campaign_type,
            reach: 0,
            conversions: 0,
            start_date: self.start_date,
            end_date: self.end_date,
            brand,
        }
    }
}

// =============================================================================
// Staff registration
// =============================================================================

/// Minimum password length for new staff accounts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StaffRegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub brand: String,
}

/// A validated registration. The password is checked but not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidStaff {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub role: Role,
    pub brand: Brand,
}

impl StaffRegistrationForm {
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(self) -> Result<ValidStaff, FieldErrors> {
        let mut errors = FieldErrors::default();
        let email = Email::parse(self.email.trim()).ok();
        let role = self
            .role
            .trim()
            .parse::<Role>()
            .ok()
            .filter(|role| Role::REGISTRABLE.contains(role));
        let brand = self.brand.trim().parse::<Brand>().ok();

        errors.check(min_chars(&self.first_name, 1), "firstName", "First name is required.");
        errors.check(min_chars(&self.last_name, 1), "lastName", "Last name is required.");
        errors.check(email.is_some(), "email", "Please enter a valid email address.");
        errors.check(
            self.password.chars().count() >= MIN_PASSWORD_LENGTH,
            "password",
            "Password must be at least 8 characters.",
        );
        errors.check(role.is_some(), "role", "Please select a role.");
        errors.check(brand.is_some(), "brand", "Please select a brand.");

        match (email, role, brand) {
            (Some(email), Some(role), Some(brand)) => errors.finish(|| ValidStaff {
                first_name: self.first_name.trim().to_owned(),
                last_name: self.last_name.trim().to_owned(),
                email,
                role,
                brand,
            }),
            _ => Err(errors),
        }
    }
}
