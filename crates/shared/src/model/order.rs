use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

use super::PaymentStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InPreparation,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InPreparation => "in_preparation",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// The only transitions an order may take. Every status change, whether it
    /// comes from the kitchen or from a direct patch, is checked here.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;

        matches!(
            (self, next),
            (Pending, InPreparation)
                | (Pending, Cancelled)
                | (InPreparation, Ready)
                | (InPreparation, Cancelled)
                | (Ready, Delivered)
        )
    }

    /// Statuses of orders the kitchen still has to work on.
    pub const IN_KITCHEN: [OrderStatus; 2] = [OrderStatus::Pending, OrderStatus::InPreparation];
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub table_id: i32,
    pub user_id: i32,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::OrderStatus::{self, *};

    const ALL: [OrderStatus; 5] = [Pending, InPreparation, Ready, Delivered, Cancelled];

    #[test]
    fn allowed_transitions() {
        assert!(Pending.can_transition_to(InPreparation));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(InPreparation.can_transition_to(Ready));
        assert!(InPreparation.can_transition_to(Cancelled));
        assert!(Ready.can_transition_to(Delivered));
    }

    #[test]
    fn everything_else_is_rejected() {
        let allowed = [
            (Pending, InPreparation),
            (Pending, Cancelled),
            (InPreparation, Ready),
            (InPreparation, Cancelled),
            (Ready, Delivered),
        ];

        for from in ALL {
            for to in ALL {
                if allowed.contains(&(from, to)) {
                    continue;
                }
                assert!(
                    !from.can_transition_to(to),
                    "{from} -> {to} should be rejected"
                );
            }
        }
    }

    #[test]
    fn terminal_states_go_nowhere() {
        for to in ALL {
            assert!(!Delivered.can_transition_to(to));
            assert!(!Cancelled.can_transition_to(to));
        }
    }

    #[test]
    fn kitchen_statuses_are_the_cancellable_ones() {
        for status in ALL {
            assert_eq!(
                OrderStatus::IN_KITCHEN.contains(&status),
                status.can_transition_to(Cancelled),
                "{status}"
            );
        }
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(InPreparation.to_string(), "in_preparation");
        assert_eq!(
            serde_json::to_string(&InPreparation).unwrap(),
            "\"in_preparation\""
        );
    }
}
