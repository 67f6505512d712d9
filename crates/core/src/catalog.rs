//! Seed data loaded into the console at boot.
//!
//! Rows are written as literals and parsed through the same constructors the
//! forms use. A literal that fails to parse is dropped rather than panicking;
//! the tests below pin the expected row counts.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::identity::Identity;
use crate::records::{
    AccessLogEntry, Activity, BrandMetrics, Campaign, Customer, LoyaltyTier, Order,
    PerformancePoint, ProgramStats, Reservation, Reward,
};
use crate::types::{
    AccessOutcome, AccountId, ActivityId, ActivityKind, Brand, BrandScope, CampaignId,
    CampaignStatus, CampaignType, CustomerId, Email, Kes, OrderId, OrderStatus, PaymentMethod,
    ReservationId, ReservationStatus, RewardId, Role, Tier,
};

fn date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn stamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").ok()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// The built-in console accounts. All of them log in with the shared password.
///
/// One global super admin, then an admin, a manager and a waiter per brand,
/// e.g. `manager@kasa.com` named "Kasa Manager".
#[must_use]
pub fn accounts() -> Vec<Identity> {
    let global = account(
        1,
        "super@loyaltysystem.com",
        Role::SuperAdmin,
        BrandScope::All,
        "Global",
        "Administrator",
    );
    let branded = [Role::Admin, Role::Manager, Role::Waiter]
        .into_iter()
        .flat_map(|role| Brand::ALL.into_iter().map(move |brand| (role, brand)))
        .zip(2..)
        .map(|((role, brand), id)| {
            let slug = brand.slug();
            let first: String = slug
                .chars()
                .take(1)
                .flat_map(char::to_uppercase)
                .chain(slug.chars().skip(1))
                .collect();
            account(
                id,
                &format!("{role}@{slug}.com"),
                role,
                BrandScope::Brand(brand),
                first,
                role.label(),
            )
        });

    std::iter::once(global)
        .chain(branded)
        .flatten()
        .collect()
}

fn account(
    id: u32,
    email: &str,
    role: Role,
    brand: BrandScope,
    first: impl Into<String>,
    last: impl Into<String>,
) -> Option<Identity> {
    Identity::new(AccountId::new(id), Email::parse(email).ok()?, role, brand, first, last).ok()
}

/// Loyalty members across all brands.
#[must_use]
pub fn customers() -> Vec<Customer> {
    let rows = [
        (1, "Sarah Johnson", "+254 712 345 678", 8540, 45_200, Tier::Gold, "2023-01-15", "2024-06-10", 47, Brand::Amka),
        (2, "Michael Chen", "+254 723 456 789", 7890, 42_100, Tier::Gold, "2023-02-22", "2024-06-12", 52, Brand::Mawimbi),
        (3, "Emma Davis", "+254 734 567 890", 6750, 38_900, Tier::Silver, "2023-03-10", "2024-06-11", 38, Brand::Kasa),
        (4, "David Wilson", "+254 745 678 901", 5620, 32_400, Tier::Silver, "2023-04-05", "2024-06-09", 34, Brand::Amka),
        (5, "Lisa Brown", "+254 756 789 012", 4890, 28_700, Tier::Bronze, "2023-05-18", "2024-06-13", 29, Brand::Mawimbi),
    ];

    rows.into_iter()
        .filter_map(|(id, name, phone, points, spent, tier, joined, last, visits, brand)| {
            let email = format!("{}@email.com", name.to_lowercase().replace(' ', "."));
            Some(Customer {
                id: CustomerId::new(id),
                name: name.to_owned(),
                email: Email::parse(&email).ok()?,
                phone: phone.to_owned(),
                points,
                spent: Kes::whole(spent),
                tier,
                join_date: date(joined)?,
                last_visit: date(last),
                visits,
                brand,
            })
        })
        .collect()
}

/// Orders across all brands.
#[must_use]
pub fn orders() -> Vec<Order> {
    use OrderStatus::{Cancelled, Completed, Pending, Preparing};
    use PaymentMethod::{Card, Cash};

    let rows = [
        (1, "Sarah Johnson", "+254 712 345 678", "T-05", &["Cappuccino", "Croissant", "Fresh Juice"][..], 850, Completed, "2024-06-13 09:30", Some("2024-06-13 09:45"), Brand::Amka, Card),
        (2, "Michael Chen", "+254 723 456 789", "T-12", &["Grilled Salmon", "Caesar Salad", "Wine"][..], 2400, Preparing, "2024-06-13 12:15", None, Brand::Mawimbi, Cash),
        (3, "Emma Davis", "+254 734 567 890", "Pool-03", &["Club Sandwich", "Smoothie", "Fruit Salad"][..], 1200, Pending, "2024-06-13 13:22", None, Brand::Kasa, Card),
        (4, "David Wilson", "+254 745 678 901", "T-08", &["Espresso", "Blueberry Muffin"][..], 450, Cancelled, "2024-06-13 10:00", None, Brand::Amka, Card),
        (5, "Lisa Brown", "+254 756 789 012", "T-15", &["Beef Steak", "Mashed Potatoes", "Red Wine"][..], 3200, Completed, "2024-06-13 19:30", Some("2024-06-13 20:45"), Brand::Mawimbi, Card),
    ];

    rows.into_iter()
        .filter_map(|(id, name, phone, table, items, total, status, placed, done, brand, payment)| {
            let total = Kes::whole(total);
            Some(Order {
                id: OrderId::new(id),
                customer_name: name.to_owned(),
                customer_phone: phone.to_owned(),
                table_number: table.to_owned(),
                items: strings(items),
                total,
                points_earned: total.points_earned()?,
                status,
                order_time: stamp(placed)?,
                completed_time: done.and_then(stamp),
                brand,
                payment_method: payment,
            })
        })
        .collect()
}

/// Upcoming table bookings.
#[must_use]
pub fn reservations() -> Vec<Reservation> {
    let rows = [
        (1, "Sarah Johnson", "+254 712 345 678", 2, "2024-06-15", (8, 30), Brand::Amka, ReservationStatus::Confirmed),
        (2, "Michael Chen", "+254 723 456 789", 4, "2024-06-15", (19, 0), Brand::Mawimbi, ReservationStatus::Confirmed),
        (3, "Emma Davis", "+254 734 567 890", 6, "2024-06-16", (13, 0), Brand::Kasa, ReservationStatus::Pending),
        (4, "Lisa Brown", "+254 756 789 012", 3, "2024-06-14", (20, 15), Brand::Mawimbi, ReservationStatus::Cancelled),
    ];

    rows.into_iter()
        .filter_map(|(id, name, phone, guests, day, (h, m), brand, status)| {
            Some(Reservation {
                id: ReservationId::new(id),
                customer_name: name.to_owned(),
                phone: phone.to_owned(),
                guests,
                date: date(day)?,
                time: NaiveTime::from_hms_opt(h, m, 0)?,
                brand,
                status,
            })
        })
        .collect()
}

/// Marketing campaigns across all brands.
#[must_use]
pub fn campaigns() -> Vec<Campaign> {
    use CampaignStatus::{Active, Completed, Scheduled};
    use CampaignType::{Bundle, Discount, Offer};

    let rows = [
        (1, "Morning Brew Rewards", "Double points on all coffee before 10am", Active, Offer, 1240, 312, "2024-06-01", "2024-06-30", Brand::Amka),
        (2, "Sunset Seafood Special", "15% off seafood platters every Friday evening", Active, Discount, 860, 145, "2024-06-07", "2024-07-05", Brand::Mawimbi),
        (3, "Poolside Weekend Bundle", "Lunch and two cocktails for members at a set price", Scheduled, Bundle, 0, 0, "2024-07-01", "2024-08-31", Brand::Kasa),
        (4, "Pastry Happy Hour", "Half-price pastries with any hot drink after 3pm", Completed, Discount, 2100, 530, "2024-05-01", "2024-05-31", Brand::Amka),
    ];

    rows.into_iter()
        .filter_map(|(id, name, description, status, kind, reach, conversions, start, end, brand)| {
            Some(Campaign {
                id: CampaignId::new(id),
                name: name.to_owned(),
                description: description.to_owned(),
                status,
                campaign_type: kind,
                reach,
                conversions,
                start_date: date(start)?,
                end_date: date(end)?,
                brand,
            })
        })
        .collect()
}

/// The tier ladder.
#[must_use]
pub fn loyalty_tiers() -> Vec<LoyaltyTier> {
    vec![
        LoyaltyTier {
            name: Tier::Bronze,
            min_points: 0,
            max_points: 999,
            benefits: strings(&[
                "1 point per KES 10 spent",
                "Birthday bonus: 100 points",
                "Welcome bonus: 50 points",
            ]),
            members: 145,
        },
        LoyaltyTier {
            name: Tier::Silver,
            min_points: 1000,
            max_points: 4999,
            benefits: strings(&[
                "1.5 points per KES 10 spent",
                "10% discount on weekdays",
                "Birthday bonus: 200 points",
                "Priority reservations",
            ]),
            members: 89,
        },
        LoyaltyTier {
            name: Tier::Gold,
            min_points: 5000,
            max_points: 99_999,
            benefits: strings(&[
                "2 points per KES 10 spent",
                "15% discount always",
                "Birthday bonus: 500 points",
                "Free dessert monthly",
                "VIP events access",
            ]),
            members: 34,
        },
    ]
}

/// The rewards catalog.
#[must_use]
pub fn rewards() -> Vec<Reward> {
    [
        (1, "Free Coffee", 100, "Beverages", "Any regular coffee or tea", 45),
        (2, "Free Dessert", 200, "Food", "Choice of cake slice or pastry", 28),
        (3, "10% Discount", 150, "Discounts", "On total bill (min KES 500)", 67),
        (4, "Free Meal", 500, "Food", "Main course up to KES 800", 12),
    ]
    .into_iter()
    .map(|(id, name, cost, category, description, claimed)| Reward {
        id: RewardId::new(id),
        name: name.to_owned(),
        cost,
        category: category.to_owned(),
        description: description.to_owned(),
        available: true,
        claimed,
    })
    .collect()
}

#[must_use]
pub const fn program_stats() -> ProgramStats {
    ProgramStats {
        total_members: 268,
        active_members: 189,
        points_issued: 45_670,
        points_redeemed: 12_340,
        redemption_rate: 27,
        average_points_per_member: 171,
    }
}

/// Dashboard headline metrics, one entry per brand.
#[must_use]
pub fn brand_metrics() -> Vec<(Brand, BrandMetrics)> {
    let row = |users, revenue, redeemed, growth: i64, orders, spend, satisfaction: i64| {
        BrandMetrics {
            total_users: users,
            revenue: Kes::whole(revenue),
            points_redeemed: redeemed,
            growth_percent: Decimal::new(growth, 1),
            today_orders: orders,
            average_spend: Kes::whole(spend),
            satisfaction: Decimal::new(satisfaction, 1),
        }
    };

    vec![
        (Brand::Amka, row(2847, 45_230, 18_492, 235, 127, 850, 48)),
        (Brand::Mawimbi, row(1923, 38_750, 12_847, 192, 89, 1200, 47)),
        (Brand::Kasa, row(3156, 67_890, 25_123, 318, 156, 2100, 49)),
    ]
}

/// The dashboard activity feed, newest first.
#[must_use]
pub fn activities() -> Vec<Activity> {
    [
        (1, "John Doe", "Redeemed 500 points", 2, ActivityKind::Redemption),
        (2, "Sarah Smith", "Earned 150 points", 5, ActivityKind::Earning),
        (3, "Mike Johnson", "Made reservation for 4", 12, ActivityKind::Booking),
        (4, "Emma Wilson", "Completed order #1847", 18, ActivityKind::Order),
        (5, "David Brown", "Joined loyalty program", 25, ActivityKind::Signup),
    ]
    .into_iter()
    .map(|(id, user, action, minutes_ago, kind)| Activity {
        id: ActivityId::new(id),
        user: user.to_owned(),
        action: action.to_owned(),
        minutes_ago,
        kind,
    })
    .collect()
}

/// Six months of revenue and sign-ups.
#[must_use]
pub fn performance() -> Vec<PerformancePoint> {
    [
        ("Jan", 4000, 240),
        ("Feb", 3000, 198),
        ("Mar", 5000, 290),
        ("Apr", 4500, 267),
        ("May", 6000, 345),
        ("Jun", 5500, 312),
    ]
    .into_iter()
    .map(|(month, revenue, customers)| PerformancePoint {
        month: month.to_owned(),
        revenue: Kes::whole(revenue),
        customers,
    })
    .collect()
}

/// Security events recorded before boot, newest first.
#[must_use]
pub fn access_log() -> Vec<AccessLogEntry> {
    [
        ("User Login", "admin@amka.com", "192.168.1.1", "2024-06-14 10:00", AccessOutcome::Success),
        ("Failed Login", "guest@test.com", "10.0.0.5", "2024-06-14 09:30", AccessOutcome::Failure),
        ("Password Change", "manager@mawimbi.com", "172.16.0.10", "2024-06-13 15:45", AccessOutcome::Success),
        ("API Key Generated", "super@loyaltysystem.com", "127.0.0.1", "2024-06-13 11:00", AccessOutcome::Success),
    ]
    .into_iter()
    .filter_map(|(event, user, ip, time, status)| {
        Some(AccessLogEntry {
            event: event.to_owned(),
            user: user.to_owned(),
            ip: ip.to_owned(),
            time: stamp(time)?,
            status,
        })
    })
    .collect()
}
