use std::sync::Mutex;

use crate::directory::NgoDirectory;
use crate::users::UserStore;

pub struct AppState {
    pub directory: NgoDirectory,
    pub users: Mutex<UserStore>,
}
