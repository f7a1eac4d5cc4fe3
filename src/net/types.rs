//! Request/response types for the runway API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Credentials submitted to the login endpoint.
#[derive(Clone, Debug, serde::Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token and access tier returned by a successful login. The login flow
/// persists both into the session repository; this crate only reads them
/// back.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "accessLevel")]
    pub access_level: Option<String>,
}

/// A queen as listed by the queens collection endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Queen {
    pub id: i64,
    pub name: String,
}

/// A runway as listed by the runways collection endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Runway {
    pub id: i64,
    pub name: String,
}

/// Display-name payload for the profile rename endpoint.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ProfileName {
    pub name: String,
}
