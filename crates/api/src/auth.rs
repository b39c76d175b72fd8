//! Argon2id hashing for stored usuario credentials.
//!
//! Hashes use the PHC string format so algorithm parameters and salt are
//! embedded in the stored value itself.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::AppError;

/// Hash a plaintext contraseña with Argon2id and a random salt.
///
/// Returns the PHC-formatted string stored in `usuarios.contrasena_hash`.
pub fn hash_contrasena(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("no se pudo generar el hash: {e}")))
}

/// Check a plaintext contraseña against a stored PHC hash.
///
/// Returns `Ok(true)` on a match, `Ok(false)` on a mismatch.
pub fn verify_contrasena(plain: &str, stored: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| AppError::InternalError(format!("hash almacenado inválido: {e}")))?;
    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::InternalError(format!(
            "no se pudo verificar el hash: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_contrasena("clave-segura-123").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_contrasena("clave-segura-123", &hash).unwrap());
    }

    #[test]
    fn wrong_contrasena_does_not_verify() {
        let hash = hash_contrasena("clave-correcta").expect("hashing should succeed");
        assert!(!verify_contrasena("clave-incorrecta", &hash).unwrap());
    }
}
