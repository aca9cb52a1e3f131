mod errors;
mod event;
mod owner;
mod pause;
mod views;

use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{env, near_bindgen, AccountId, PanicOnDefault};

use crate::errors::*;
use crate::event::OwnershipTransfer;
use crate::owner::assert_valid_owner;

#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub enum RunningState {
    Running,
    Paused,
}

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    /// Owner of registry
    owner_id: AccountId,
    /// Running state
    state: RunningState,
}

#[near_bindgen]
impl Contract {
    /// Initialize the registry with its first owner
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        assert!(!env::state_exists(), "{}", ERR08_ALREADY_INITIALIZED);
        assert_valid_owner(&owner_id);

        Self {
            owner_id,
            state: RunningState::Running,
        }
    }
}
