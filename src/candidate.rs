//! Password input coercion.

use secrecy::{ExposeSecret, SecretString};

/// A password handed to a check, held as a secret.
///
/// Anything with a canonical textual form converts into a `Candidate`, so
/// `checker.check(1)` checks the password `"1"`.
#[derive(Debug)]
pub struct Candidate(SecretString);

impl Candidate {
    pub fn as_secret(&self) -> &SecretString {
        &self.0
    }
}

impl From<SecretString> for Candidate {
    fn from(secret: SecretString) -> Self {
        Candidate(secret)
    }
}

impl From<&SecretString> for Candidate {
    fn from(secret: &SecretString) -> Self {
        Candidate(SecretString::new(secret.expose_secret().to_owned().into()))
    }
}

impl From<String> for Candidate {
    fn from(password: String) -> Self {
        Candidate(SecretString::new(password.into()))
    }
}

impl From<&String> for Candidate {
    fn from(password: &String) -> Self {
        Self::from(password.as_str())
    }
}

impl From<&str> for Candidate {
    fn from(password: &str) -> Self {
        Self::from(password.to_owned())
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Candidate {
                fn from(value: $ty) -> Self {
                    Self::from(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(
    char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
