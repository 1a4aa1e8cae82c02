//! Settings Page
//!
//! Linked profile and billing hint.

use super::text_or;
use crate::components::{Card, CardBody, Row};
use crate::state::DataSlots;

pub fn cards(slots: &DataSlots) -> Vec<Card> {
    let profile = slots.profile.get();

    let rows = vec![
        Row::new("User", text_or(profile.and_then(|p| p.username.as_ref()), "—")),
        Row::new("Tier", text_or(profile.and_then(|p| p.tier.as_ref()), "free")),
        Row::new("Badge", text_or(profile.and_then(|p| p.badge.as_ref()), "none")),
    ];

    vec![
        Card::new("Profile", CardBody::List(rows)).subtitle("Telegram-linked account"),
        Card::new(
            "Billing",
            CardBody::List(vec![Row::new("Upgrade", "Use Settings → Subscription in bot")]),
        )
        .subtitle("Manage subscription in bot"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_placeholders() {
        let cards = cards(&DataSlots::default());
        assert_eq!(
            cards[0].rows(),
            &[
                Row::new("User", "—"),
                Row::new("Tier", "free"),
                Row::new("Badge", "none"),
            ]
        );
    }

    #[test]
    fn test_profile_values() {
        let mut slots = DataSlots::default();
        slots.profile.fill(
            serde_json::from_value(json!({
                "user_id": 42, "username": "satoshi", "tier": "pro", "badge": ""
            }))
            .unwrap(),
        );

        let cards = cards(&slots);
        assert_eq!(
            cards[0].rows(),
            &[
                Row::new("User", "satoshi"),
                Row::new("Tier", "pro"),
                Row::new("Badge", "none"),
            ]
        );
    }
}
