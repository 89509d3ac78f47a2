use argon2::password_hash::rand_core::{OsRng, RngCore};

const TOKEN_BYTES: usize = 32;

/// Random hex string stored on the user and redeemed through the verification link.
pub fn generate_verification_token() -> String {
    let mut buff = [0_u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut buff);
    hex::encode(buff)
}
