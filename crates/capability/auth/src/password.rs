use crate::AuthError;
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString,
};
use rand_core::OsRng;
use subtle::ConstantTimeEq;

/// 口令校验结果。
pub enum PasswordOutcome {
    /// 口令不匹配。
    Mismatch,
    /// 口令匹配，存储哈希已是 argon2。
    Match,
    /// 口令匹配，但存储的是历史明文，携带升级后的 argon2 哈希。
    MatchNeedsRehash(String),
}

/// 生成 argon2 口令哈希。
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| AuthError::Internal(err.to_string()))?;
    Ok(hash.to_string())
}

/// 校验口令。
///
/// 存储值以 `$argon2` 开头时走哈希校验；否则按历史明文用常量时间比较，
/// 匹配时返回升级哈希供调用方落库。
pub fn verify_password(stored: &str, password: &str) -> Result<PasswordOutcome, AuthError> {
    if stored.starts_with("$argon2") {
        let parsed =
            PasswordHash::new(stored).map_err(|err| AuthError::Internal(err.to_string()))?;
        let verified = Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok();
        return Ok(if verified {
            PasswordOutcome::Match
        } else {
            PasswordOutcome::Mismatch
        });
    }

    let matches: bool = stored.as_bytes().ct_eq(password.as_bytes()).into();
    if !matches {
        return Ok(PasswordOutcome::Mismatch);
    }
    Ok(PasswordOutcome::MatchNeedsRehash(hash_password(password)?))
}
