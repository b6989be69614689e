/// Reed-Solomon error correction over GF(2^m)
/// Aztec uses four data fields (6, 8, 10 and 12 bit codewords), all with
/// generator base 1
use std::sync::OnceLock;

use crate::error::{DecodeError, Result};

/// GF(2^m) field operations using log/exp tables
#[derive(Debug)]
pub struct GenericGf {
    size: usize,
    primitive: u32,
    generator_base: usize,
    exp_table: Vec<u16>,
    log_table: Vec<u16>,
}

impl GenericGf {
    /// Build the field of `size` elements reduced by `primitive`
    pub fn new(primitive: u32, size: usize, generator_base: usize) -> Self {
        let mut exp_table = vec![0u16; size];
        let mut log_table = vec![0u16; size];
        let mut x = 1u32;
        for entry in exp_table.iter_mut() {
            *entry = x as u16;
            x <<= 1;
            if x as usize >= size {
                x ^= primitive;
                x &= size as u32 - 1;
            }
        }
        for i in 0..size - 1 {
            log_table[exp_table[i] as usize] = i as u16;
        }
        Self {
            size,
            primitive,
            generator_base,
            exp_table,
            log_table,
        }
    }

    /// Number of field elements
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reduction polynomial
    pub fn primitive(&self) -> u32 {
        self.primitive
    }

    /// Power of alpha of the generator polynomial's first root
    pub fn generator_base(&self) -> usize {
        self.generator_base
    }

    /// alpha^n, with `n` taken modulo the group order
    pub fn exp(&self, n: usize) -> u16 {
        self.exp_table[n % (self.size - 1)]
    }

    /// Discrete log of a nonzero element
    pub fn log(&self, a: u16) -> Result<usize> {
        if a == 0 {
            return Err(DecodeError::Checksum("log of zero in Galois field"));
        }
        Ok(self.log_table[a as usize] as usize)
    }

    /// Field product
    pub fn mul(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = self.log_table[a as usize] as usize;
        let log_b = self.log_table[b as usize] as usize;
        self.exp_table[(log_a + log_b) % (self.size - 1)]
    }

    /// Multiplicative inverse of a nonzero element
    pub fn inverse(&self, a: u16) -> Result<u16> {
        let log_a = self.log(a)?;
        Ok(self.exp_table[(self.size - 1 - log_a) % (self.size - 1)])
    }

    /// `a / b`; fails when `b` is zero
    pub fn div(&self, a: u16, b: u16) -> Result<u16> {
        Ok(self.mul(a, self.inverse(b)?))
    }

    /// Evaluate a polynomial with coefficients in descending order at `x`
    pub fn eval_descending(&self, coefficients: &[u16], x: u16) -> u16 {
        coefficients
            .iter()
            .fold(0u16, |acc, &c| self.mul(acc, x) ^ c)
    }

    /// Evaluate a polynomial with coefficients in ascending order at `x`
    pub fn eval_ascending(&self, coefficients: &[u16], x: u16) -> u16 {
        coefficients
            .iter()
            .rev()
            .fold(0u16, |acc, &c| self.mul(acc, x) ^ c)
    }
}

macro_rules! static_field {
    ($(#[$meta:meta])* $name:ident, $primitive:expr, $size:expr, $base:expr) => {
        $(#[$meta])*
        pub fn $name() -> &'static GenericGf {
            static FIELD: OnceLock<GenericGf> = OnceLock::new();
            FIELD.get_or_init(|| GenericGf::new($primitive, $size, $base))
        }
    };
}

static_field!(
    /// x^12 + x^6 + x^5 + x^3 + 1
    aztec_data_12, 0x1069, 4096, 1
);
static_field!(
    /// x^10 + x^3 + 1
    aztec_data_10, 0x409, 1024, 1
);
static_field!(
    /// x^6 + x + 1
    aztec_data_6, 0x43, 64, 1
);
static_field!(
    #[cfg(test)]
    /// x^4 + x + 1, the mode-message field
    aztec_param, 0x13, 16, 1
);
static_field!(
    /// x^8 + x^5 + x^3 + x^2 + 1, shared with Data Matrix
    aztec_data_8, 0x12D, 256, 1
);
static_field!(
    #[cfg(test)]
    /// x^8 + x^4 + x^3 + x^2 + 1 with generator base 0
    qr_code_field_256, 0x11D, 256, 0
);

/// Reed-Solomon decoder over one field
pub struct ReedSolomonDecoder<'f> {
    field: &'f GenericGf,
}

impl<'f> ReedSolomonDecoder<'f> {
    /// Decoder over `field`
    pub fn new(field: &'f GenericGf) -> Self {
        Self { field }
    }

    /// Correct `received` in place, returning the number of repaired codewords.
    ///
    /// `received[0]` is the highest-degree coefficient; the last
    /// `num_ec_codewords` entries are the check symbols.
    pub fn decode(&self, received: &mut [u16], num_ec_codewords: usize) -> Result<usize> {
        let n = received.len();
        if n >= self.field.size() {
            return Err(DecodeError::Format("codeword block longer than field"));
        }
        if num_ec_codewords == 0 {
            return Ok(0);
        }

        let syndrome = self.calculate_syndrome(received, num_ec_codewords);
        if syndrome.iter().all(|&s| s == 0) {
            return Ok(0);
        }

        let sigma = self.find_error_locator(&syndrome)?;
        let degree = sigma.len() - 1;
        if degree == 0 || degree > num_ec_codewords / 2 {
            return Err(DecodeError::Checksum("too many errors to correct"));
        }

        let positions = self.find_error_positions(&sigma, n)?;
        let values = self.find_error_values(&sigma, &syndrome, &positions, n)?;
        for (&pos, &value) in positions.iter().zip(&values) {
            received[pos] ^= value;
        }

        if self
            .calculate_syndrome(received, num_ec_codewords)
            .iter()
            .any(|&s| s != 0)
        {
            return Err(DecodeError::Checksum("uncorrectable codewords"));
        }

        Ok(positions.len())
    }

    fn calculate_syndrome(&self, received: &[u16], num_ec_codewords: usize) -> Vec<u16> {
        let base = self.field.generator_base();
        (0..num_ec_codewords)
            .map(|i| {
                self.field
                    .eval_descending(received, self.field.exp(base + i))
            })
            .collect()
    }

    /// Berlekamp-Massey; returns the locator with ascending coefficients,
    /// trailing zeros trimmed
    fn find_error_locator(&self, syndrome: &[u16]) -> Result<Vec<u16>> {
        let gf = self.field;
        let mut sigma = vec![1u16];
        let mut b = vec![1u16];
        let mut delta_b: u16 = 1;
        let mut l = 0usize;
        let mut m = 1usize;

        for i in 0..syndrome.len() {
            let mut delta = syndrome[i];
            for j in 1..=l.min(sigma.len() - 1) {
                delta ^= gf.mul(sigma[j], syndrome[i - j]);
            }

            if delta == 0 {
                m += 1;
                continue;
            }

            let previous = sigma.clone();
            let d = gf.div(delta, delta_b)?;
            if sigma.len() < b.len() + m {
                sigma.resize(b.len() + m, 0);
            }
            for (j, &bj) in b.iter().enumerate() {
                sigma[j + m] ^= gf.mul(d, bj);
            }

            if 2 * l <= i {
                l = i + 1 - l;
                b = previous;
                delta_b = delta;
                m = 1;
            } else {
                m += 1;
            }
        }

        while sigma.len() > 1 && sigma.last() == Some(&0) {
            sigma.pop();
        }
        Ok(sigma)
    }

    /// Chien search: position `p` is in error when sigma vanishes at
    /// alpha^-(n-1-p)
    fn find_error_positions(&self, sigma: &[u16], n: usize) -> Result<Vec<usize>> {
        let gf = self.field;
        let order = gf.size() - 1;
        let positions: Vec<usize> = (0..n)
            .filter(|&p| {
                let x_inv = gf.exp(order - (n - 1 - p) % order);
                gf.eval_ascending(sigma, x_inv) == 0
            })
            .collect();

        if positions.len() != sigma.len() - 1 {
            log::debug!(
                "locator of degree {} has {} roots",
                sigma.len() - 1,
                positions.len()
            );
            return Err(DecodeError::Checksum("error locator degree does not match roots"));
        }
        Ok(positions)
    }

    /// Forney: e = X^(1-b) * omega(X^-1) / sigma'(X^-1)
    fn find_error_values(
        &self,
        sigma: &[u16],
        syndrome: &[u16],
        positions: &[usize],
        n: usize,
    ) -> Result<Vec<u16>> {
        let gf = self.field;
        let order = gf.size() - 1;

        // omega = syndrome * sigma mod x^(2t)
        let mut omega = vec![0u16; syndrome.len()];
        for (i, slot) in omega.iter_mut().enumerate() {
            for j in 0..=i.min(sigma.len() - 1) {
                *slot ^= gf.mul(sigma[j], syndrome[i - j]);
            }
        }

        // sigma'(x) keeps the odd terms only in characteristic 2
        let sigma_prime: Vec<u16> = sigma
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| if i % 2 == 1 { c } else { 0 })
            .collect();

        let base = gf.generator_base() as i64;
        positions
            .iter()
            .map(|&pos| {
                let power = (n - 1 - pos) % order;
                let x_inv = gf.exp(order - power);
                let omega_val = gf.eval_ascending(&omega, x_inv);
                let sigma_prime_val = gf.eval_ascending(&sigma_prime, x_inv);
                if sigma_prime_val == 0 {
                    return Err(DecodeError::Checksum("sigma derivative is zero"));
                }
                let scale = gf.exp(((power as i64) * (1 - base)).rem_euclid(order as i64) as usize);
                Ok(gf.mul(scale, gf.div(omega_val, sigma_prime_val)?))
            })
            .collect()
    }
}
