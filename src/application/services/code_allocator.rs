//! Random short code generation with bounded collision retry.

use rand::Rng;
use std::future::Future;
use tracing::debug;

use crate::domain::errors::ShortifyError;

/// Base62 alphabet: lowercase, uppercase, digits.
///
/// 62^6 ≈ 5.68e10 distinct 6-character codes.
pub const BASE62_ALPHABET: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Default number of candidates tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Produces short codes that are not yet present in the durable store.
#[derive(Debug, Clone, Copy)]
pub struct CodeAllocator {
    length: usize,
    max_attempts: u32,
}

impl CodeAllocator {
    pub fn new(length: usize, max_attempts: u32) -> Self {
        Self {
            length,
            max_attempts,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Generates a random code of the configured length.
    ///
    /// Characters are drawn uniformly from [`BASE62_ALPHABET`] using the thread-local
    /// CSPRNG, which is seeded and periodically reseeded from the operating system.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| BASE62_ALPHABET[rng.random_range(0..BASE62_ALPHABET.len())] as char)
            .collect()
    }

    /// Generates candidates until `check_exists` reports one as free.
    ///
    /// `check_exists` is a point lookup against the durable store; it returns `true`
    /// when the candidate is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`ShortifyError::CodeGenerationFailed`] after `max_attempts` taken
    /// candidates. Errors from `check_exists` are returned immediately.
    pub async fn allocate_unique<F, Fut>(&self, check_exists: F) -> Result<String, ShortifyError>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<bool, ShortifyError>>,
    {
        self.allocate_within(self.max_attempts, check_exists)
            .await
            .map(|allocation| allocation.code)
    }

    /// Like [`Self::allocate_unique`], but tries at most `budget` candidates and
    /// reports how many it used, so a caller retrying after a failed insert can
    /// keep every candidate under one bound.
    pub async fn allocate_within<F, Fut>(
        &self,
        budget: u32,
        mut check_exists: F,
    ) -> Result<Allocation, ShortifyError>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<bool, ShortifyError>>,
    {
        for attempt in 1..=budget {
            let code = self.generate();

            if !check_exists(code.clone()).await? {
                return Ok(Allocation {
                    code,
                    attempts: attempt,
                });
            }

            debug!("Short code collision detected: {}, attempt {}", code, attempt);
        }

        Err(ShortifyError::CodeGenerationFailed { attempts: budget })
    }
}

/// A free code and the number of candidates generated to find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub code: String,
    pub attempts: u32,
}

impl Default for CodeAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }
}
