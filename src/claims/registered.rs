macro_rules! registered_claims {
    ($($(#[$meta:meta])* $name:literal: $variant:ident),*) => {
        /// Registered claim name.
        ///
        /// See: <https://datatracker.ietf.org/doc/html/rfc7519#section-4.1>
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum RegisteredClaimKind {
            $(
                $(#[$meta])*
                $variant
            ),*
        }

        impl RegisteredClaimKind {
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            pub fn new(s: &str) -> Option<Self> {
                match s {
                    $(
                        $name => Some(Self::$variant),
                    )*
                    _ => None
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $name,
                    )*
                }
            }
        }
    };
}

registered_claims! {
    /// Issuer (`iss`) claim.
    ///
    /// Principal that issued the JWT.
    "iss": Issuer,

    /// Subject (`sub`) claim.
    ///
    /// Principal that is the subject of the JWT.
    "sub": Subject,

    /// Audience (`aud`) claim.
    ///
    /// Recipients that the JWT is intended for, either a single string or
    /// an array of strings.
    "aud": Audience,

    /// Expiration Time (`exp`) claim.
    ///
    /// Expiration time on or after which the JWT MUST NOT be accepted for
    /// processing.
    "exp": ExpirationTime,

    /// Not Before (`nbf`) claim.
    ///
    /// Time before which the JWT MUST NOT be accepted for processing.
    "nbf": NotBefore,

    /// Issued At (`iat`) claim.
    "iat": IssuedAt,

    /// JWT ID (`jti`) claim.
    ///
    /// Unique identifier for the JWT.
    "jti": JwtId
}

impl std::fmt::Display for RegisteredClaimKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
