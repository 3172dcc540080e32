//! Display masks for Brazilian phone numbers and CPF identifiers.
//!
//! The registration form accepts free-form input; these helpers normalise
//! it to the canonical display shapes before a lead is stored, so the admin
//! list and CSV export always show consistent values.
//!
//! Inputs that do not carry the expected number of digits are stored as
//! typed (trimmed only) — masking is presentation, not validation.

/// Extracts the ASCII digits of a string.
fn digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Masks a phone number as `(NN) NNNNN-NNNN` (mobile, 11 digits) or
/// `(NN) NNNN-NNNN` (landline, 10 digits).
///
/// # Example
/// ```
/// use festa_web::model::mask::mask_phone;
///
/// assert_eq!(mask_phone("11987654321"), "(11) 98765-4321");
/// assert_eq!(mask_phone("1133334444"), "(11) 3333-4444");
/// ```
pub fn mask_phone(input: &str) -> String {
    let d = digits(input);
    match d.len() {
        11 => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
        10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => input.trim().to_string(),
    }
}

/// Masks a CPF as `NNN.NNN.NNN-NN` when the input has exactly 11 digits.
///
/// # Example
/// ```
/// use festa_web::model::mask::mask_cpf;
///
/// assert_eq!(mask_cpf("12345678900"), "123.456.789-00");
/// ```
pub fn mask_cpf(input: &str) -> String {
    let d = digits(input);
    if d.len() == 11 {
        format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
    } else {
        input.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_mobile_mask() {
        assert_eq!(mask_phone("11987654321"), "(11) 98765-4321");
        // already-masked input is idempotent
        assert_eq!(mask_phone("(11) 98765-4321"), "(11) 98765-4321");
    }

    #[test]
    fn phone_landline_mask() {
        assert_eq!(mask_phone("1133334444"), "(11) 3333-4444");
    }

    #[test]
    fn phone_unexpected_length_passes_through() {
        assert_eq!(mask_phone(" 12345 "), "12345");
        assert_eq!(mask_phone("+55 11 98765-4321"), "+55 11 98765-4321");
    }

    #[test]
    fn cpf_mask_and_idempotence() {
        assert_eq!(mask_cpf("12345678900"), "123.456.789-00");
        assert_eq!(mask_cpf("123.456.789-00"), "123.456.789-00");
    }

    #[test]
    fn cpf_unexpected_length_passes_through() {
        assert_eq!(mask_cpf("1234"), "1234");
        assert_eq!(mask_cpf(""), "");
    }
}
