use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "drones:user:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Insert user ID into session
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    ///
    /// A value that does not parse as a user id is treated as no login.
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .and_then(|SessionUserId(id_str)| match id_str.parse::<i32>() {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::warn!("Ignoring malformed session user id {:?}: {}", id_str, e);
                    None
                }
            });

        Ok(user_id)
    }

    /// Drop all session data, used on logout
    pub async fn clear(session: &Session) -> Result<(), Error> {
        session.flush().await?;

        Ok(())
    }
}
