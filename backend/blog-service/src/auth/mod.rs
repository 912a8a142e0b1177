/// Authentication primitives: bearer tokens and password hashing.
///
/// Tokens are HS256-signed; the secret is loaded once at startup and held in
/// a `OnceCell`, immutable thereafter. This service both issues and
/// validates its own tokens, so no key distribution is involved.
pub mod jwt;
pub mod password;
