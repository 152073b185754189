//! Identity types established by the social-auth wallet provider

use crate::wallet::Wallet;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Supported social login methods
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    Google,
    Twitter,
}

/// Profile of the logged-in user, as returned by the auth provider
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Provider-scoped identifier of the user
    pub uuid: String,

    /// Display name of the user
    pub name: String,

    /// Avatar URL, if the social account has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Identity and signing capability established by one login
///
/// The wallet is derived from the session key the auth provider returns and
/// lives only as long as the session.
#[derive(Clone, Debug)]
pub struct AuthSession {
    /// Profile of the logged-in user
    pub profile: UserProfile,

    /// Session signer bound to the logged-in identity
    pub wallet: Wallet,
}
