//! Staff authorization: a single static secret in the clinic code header.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AppState;

pub const STAFF_CODE_HEADER: &str = "x-clinic-code";

/// Extractor that gates staff-only routes. No session, no token issuance,
/// no expiry; the header is checked on every request.
pub struct StaffAuth;

impl FromRequestParts<Arc<AppState>> for StaffAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(STAFF_CODE_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        match verify_staff_code(presented, &state.settings.clinic_secret_code) {
            true => Ok(StaffAuth),
            false => Err(AppError::Unauthorized(
                "Access denied: invalid clinic code. Staff access only.".to_string(),
            )),
        }
    }
}

/// Both sides are hashed before comparison, so the check is constant-time
/// over the digests and blind to the secret's length.
pub fn verify_staff_code(presented: &str, expected: &str) -> bool {
    if presented.is_empty() {
        return false;
    }

    let presented = Sha256::digest(presented.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());
    presented.as_slice().ct_eq(expected.as_slice()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "MEDIFLOW-ADMIN-2024";

    #[test]
    fn test_correct_code_passes() {
        assert!(verify_staff_code(SECRET, SECRET));
    }

    #[test]
    fn test_wrong_code_rejected() {
        assert!(!verify_staff_code("WRONG-CODE", SECRET));
    }

    #[test]
    fn test_empty_code_rejected() {
        assert!(!verify_staff_code("", SECRET));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(!verify_staff_code("M", SECRET));
        assert!(!verify_staff_code(&SECRET.repeat(4), SECRET));
    }
}
