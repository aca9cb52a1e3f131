use crate::*;

#[near_bindgen]
impl Contract {
    pub fn get_owner(&self) -> AccountId { self.owner_id.clone() }

    pub fn get_running_state(&self) -> RunningState { self.state.clone() }
}
