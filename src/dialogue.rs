//! Conversation state for the QR generation flows.

use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

/// Represents which field a chat's conversation is currently awaiting.
///
/// Each variant carries the fields collected earlier in its flow, so the
/// terminal step has everything it needs without a side lookup. Values in
/// variants have already passed validation where the flow validates them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum QrDialogueState {
    #[default]
    Idle,
    AwaitingUrl,
    AwaitingSvgUrl,
    AwaitingText,
    AwaitingWifiSsid,
    AwaitingWifiPassword {
        ssid: String,
    },
    AwaitingVcardName,
    AwaitingVcardSurname {
        name: String,
    },
    AwaitingVcardPhone {
        name: String,
        surname: String,
    },
    AwaitingVcardEmail {
        name: String,
        surname: String,
        phone_number: String,
    },
    AwaitingVcardCompany {
        name: String,
        surname: String,
        phone_number: String,
        email: String,
    },
    AwaitingVcardTitle {
        name: String,
        surname: String,
        phone_number: String,
        email: String,
        company: String,
    },
    AwaitingVcardWebsite {
        name: String,
        surname: String,
        phone_number: String,
        email: String,
        company: String,
        title: String,
    },
}

/// Type alias for the per-chat QR dialogue
pub type QrDialogue = Dialogue<QrDialogueState, InMemStorage<QrDialogueState>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        assert!(matches!(QrDialogueState::default(), QrDialogueState::Idle));
    }

    #[test]
    fn test_wifi_state_carries_ssid() {
        let state = QrDialogueState::AwaitingWifiPassword {
            ssid: "HomeNetwork".to_string(),
        };

        match state {
            QrDialogueState::AwaitingWifiPassword { ssid } => {
                assert_eq!(ssid, "HomeNetwork");
            }
            _ => panic!("Unexpected dialogue state"),
        }
    }
}
