use crate::*;

/// Reserved protocol account. It can never be created or controlled by a
/// user, so it plays the role of the null identity and may never hold
/// ownership of the registry.
pub(crate) const SYSTEM_ACCOUNT: &str = "system";

#[near_bindgen]
impl Contract {
    /// Hands the registry over to `owner_id`. Only the current owner may
    /// call this; the previous owner loses authorization immediately.
    pub fn set_owner(&mut self, owner_id: AccountId) {
        self.assert_owner();
        self.assert_not_paused();
        assert_valid_owner(&owner_id);

        let old_owner_id = std::mem::replace(&mut self.owner_id, owner_id);
        OwnershipTransfer {
            old_owner_id: &old_owner_id,
            new_owner_id: &self.owner_id,
            memo: None,
        }
        .emit();
    }

    pub(crate) fn assert_owner(&self) {
        assert_eq!(
            env::predecessor_account_id(),
            self.owner_id,
            "{}",
            ERR20_NOT_ALLOW
        );
    }
}

pub(crate) fn assert_valid_owner(owner_id: &AccountId) {
    assert_ne!(owner_id.as_str(), SYSTEM_ACCOUNT, "{}", ERR21_INVALID_OWNER);
}
