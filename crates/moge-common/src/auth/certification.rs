//! Email certification codes

use rand::Rng;

/// Number of digits in a certification code
pub const CODE_LENGTH: usize = 6;

/// Generate a zero-padded numeric certification code
#[must_use]
pub fn generate_verification_code() -> String {
    let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{n:0width$}", width = CODE_LENGTH)
}
