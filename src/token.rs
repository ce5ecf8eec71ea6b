use core::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::{
    decode, AnyClaims, Claim, DateTimeProvider, DecodeError, NumericDate, RegisteredClaimKind,
    SystemClock,
};

/// Decoded JSON Web Token.
///
/// Built by [`decode`]. The token is immutable and its signature has not been
/// verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    header: AnyClaims,
    payload: AnyClaims,
    signature: String,
    string: String,
}

impl Token {
    pub(crate) fn new(
        header: AnyClaims,
        payload: AnyClaims,
        signature: String,
        string: String,
    ) -> Self {
        Self {
            header,
            payload,
            signature,
            string,
        }
    }

    /// JOSE header.
    pub fn header(&self) -> &AnyClaims {
        &self.header
    }

    /// Claims set.
    pub fn body(&self) -> &AnyClaims {
        &self.payload
    }

    /// Alias for [`Self::body`].
    pub fn payload(&self) -> &AnyClaims {
        &self.payload
    }

    /// Signature segment, still base64url encoded.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Original compact representation of the token.
    pub fn as_str(&self) -> &str {
        &self.string
    }

    pub fn into_string(self) -> String {
        self.string
    }

    /// Payload claim named `name`.
    pub fn claim(&self, name: &str) -> Claim {
        self.payload.claim(name)
    }

    /// Header parameter named `name`.
    pub fn header_claim(&self, name: &str) -> Claim {
        self.header.claim(name)
    }

    pub fn registered_claim(&self, kind: RegisteredClaimKind) -> Claim {
        self.claim(kind.as_str())
    }

    /// Iterates over the registered claims present in the payload.
    pub fn registered_claims(
        &self,
    ) -> impl Iterator<Item = (RegisteredClaimKind, &Value)> + '_ {
        self.payload
            .iter()
            .filter_map(|(name, value)| Some((RegisteredClaimKind::new(name)?, value)))
    }

    /// Signing algorithm (`alg` header parameter).
    pub fn algorithm(&self) -> Option<&str> {
        self.header_claim("alg").string()
    }

    /// Media type (`typ` header parameter).
    pub fn token_type(&self) -> Option<&str> {
        self.header_claim("typ").string()
    }

    /// Key identifier (`kid` header parameter).
    pub fn key_id(&self) -> Option<&str> {
        self.header_claim("kid").string()
    }

    pub fn issuer(&self) -> Option<&str> {
        self.registered_claim(RegisteredClaimKind::Issuer).string()
    }

    pub fn subject(&self) -> Option<&str> {
        self.registered_claim(RegisteredClaimKind::Subject).string()
    }

    /// Audience, whether it is encoded as a single string or as an array.
    pub fn audience(&self) -> Option<Vec<String>> {
        self.registered_claim(RegisteredClaimKind::Audience).array()
    }

    pub fn expires_at(&self) -> Option<NumericDate> {
        self.registered_claim(RegisteredClaimKind::ExpirationTime).date()
    }

    pub fn issued_at(&self) -> Option<NumericDate> {
        self.registered_claim(RegisteredClaimKind::IssuedAt).date()
    }

    pub fn not_before(&self) -> Option<NumericDate> {
        self.registered_claim(RegisteredClaimKind::NotBefore).date()
    }

    /// JWT ID.
    pub fn identifier(&self) -> Option<&str> {
        self.registered_claim(RegisteredClaimKind::JwtId).string()
    }

    /// Checks if the token is expired according to the system clock.
    pub fn expired(&self) -> bool {
        self.expired_at(SystemClock)
    }

    /// Checks if the token is expired at the date given by `clock`.
    ///
    /// A token expiring exactly now is expired. A token without `exp` claim
    /// never expires.
    pub fn expired_at(&self, clock: impl DateTimeProvider) -> bool {
        match self.expires_at() {
            Some(exp) => exp <= NumericDate::from(clock.date_time()),
            None => false,
        }
    }

    /// Checks if the `nbf` claim is still in the future at the date given by
    /// `clock`.
    pub fn not_yet_valid_at(&self, clock: impl DateTimeProvider) -> bool {
        match self.not_before() {
            Some(nbf) => NumericDate::from(clock.date_time()) < nbf,
            None => false,
        }
    }
}

impl FromStr for Token {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl TryFrom<String> for Token {
    type Error = DecodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        decode(&value)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

impl serde::Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.string)
    }
}

impl<'de> serde::Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let string = <String as serde::Deserialize>::deserialize(deserializer)?;
        decode(&string).map_err(serde::de::Error::custom)
    }
}
