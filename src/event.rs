use near_sdk::serde::Serialize;
use near_sdk::{env, AccountId};

/// NEP-297 envelope wrapping every registry event.
#[derive(Serialize, Debug)]
#[serde(tag = "standard")]
#[must_use = "don't forget to `.emit()` this event"]
#[serde(rename_all = "snake_case")]
pub(crate) enum NearEvent<'a> {
    Nep297(Nep297Event<'a>),
}

impl<'a> NearEvent<'a> {
    fn to_json_event_string(&self) -> String {
        // Events cannot fail to serialize so fine to panic on error
        #[allow(clippy::redundant_closure)]
        let json = serde_json::to_string(self).ok().unwrap_or_else(|| env::abort());
        format!("EVENT_JSON:{}", json)
    }

    /// Logs the event to the host. This is required to ensure that the event is triggered
    /// and to consume the event.
    pub(crate) fn emit(self) {
        env::log_str(&self.to_json_event_string());
    }
}

#[derive(Serialize, Debug)]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
enum Nep297EventKind<'a> {
    OwnershipTransfer(&'a [OwnershipTransfer<'a>]),
}

#[derive(Serialize, Debug)]
pub struct Nep297Event<'a> {
    version: &'static str,
    #[serde(flatten)]
    event_kind: Nep297EventKind<'a>,
}

/// Emitted once for every successful owner change, self-transfers included.
#[must_use]
#[derive(Serialize, Debug, Clone)]
pub struct OwnershipTransfer<'a> {
    pub old_owner_id: &'a AccountId,
    pub new_owner_id: &'a AccountId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<&'a str>,
}

impl OwnershipTransfer<'_> {
    pub fn emit(self) {
        Self::emit_many(&[self])
    }

    pub fn emit_many(data: &[OwnershipTransfer<'_>]) {
        NearEvent::Nep297(Nep297Event {
            version: "1.0.0",
            event_kind: Nep297EventKind::OwnershipTransfer(data),
        })
        .emit()
    }
}
