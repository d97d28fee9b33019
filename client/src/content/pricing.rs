//! Membership plans.

use super::IconName;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    /// Monthly price in whole rupees.
    pub price: u32,
    pub description: &'static str,
    pub icon: IconName,
    pub perks: &'static [&'static str],
    pub popular: bool,
}

impl Plan {
    /// Price as displayed on the card, e.g. `₹1499`.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("₹{}", self.price)
    }
}

pub const OFFER_TEXT: &str = "First month 50% off!";

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Basic",
        price: 999,
        description: "Perfect for beginners starting their fitness journey",
        icon: IconName::Zap,
        perks: &["Full gym access", "Locker room access", "Basic equipment usage", "Free WiFi", "2 guest passes/month"],
        popular: false,
    },
    Plan {
        name: "Pro",
        price: 1499,
        description: "Most popular choice for serious fitness enthusiasts",
        icon: IconName::Star,
        perks: &[
            "Everything in Basic",
            "All group classes",
            "2 personal training sessions",
            "Nutrition consultation",
            "Sauna & steam room",
            "Unlimited guest passes",
        ],
        popular: true,
    },
    Plan {
        name: "Elite",
        price: 1999,
        description: "Ultimate package for maximum transformation",
        icon: IconName::Crown,
        perks: &[
            "Everything in Pro",
            "Unlimited personal training",
            "Priority class booking",
            "Monthly body composition",
            "Recovery massage (2x/month)",
            "Exclusive member events",
            "Premium locker",
        ],
        popular: false,
    },
];
