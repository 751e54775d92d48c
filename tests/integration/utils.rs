use jaws::dep::rsa::RsaPrivateKey;
use std::sync::OnceLock;

/// RSA key, generated once per test binary
pub(super) fn rsa_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| jaws::rsa::generate_private_key(2048).unwrap())
}

/// a second, unrelated RSA key
pub(super) fn other_rsa_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| jaws::rsa::generate_private_key(2048).unwrap())
}
