//! MT19937 seeded the way CPython's `random.Random(int)` seeds it.
//!
//! The draw protocol is published together with the seed, so anyone holding
//! the participant file can replay the permutation with Python's `random`
//! module or with this crate and get the same winners.

use rand::{Error, RngCore};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

#[derive(Clone)]
pub struct Mt19937 {
    state: Box<[u32; N]>,
    index: usize,
}

impl Mt19937 {
    /// Seeds from a signed integer. The sign is dropped, as CPython does.
    pub fn from_seed(seed: i128) -> Self {
        Self::from_key(&seed_key(seed))
    }

    /// Reference `init_by_array`.
    pub fn from_key(key: &[u32]) -> Self {
        let mut mt = Self::from_u32(19_650_218);
        let state = &mut mt.state;
        let mut i = 1usize;
        let mut j = 0usize;
        let key_len = key.len().max(1);

        for _ in 0..N.max(key_len) {
            let prev = state[i - 1] ^ (state[i - 1] >> 30);
            let k = key.get(j).copied().unwrap_or(0);
            state[i] = (state[i] ^ prev.wrapping_mul(1_664_525))
                .wrapping_add(k)
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
            if j >= key_len {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            let prev = state[i - 1] ^ (state[i - 1] >> 30);
            state[i] = (state[i] ^ prev.wrapping_mul(1_566_083_941)).wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
        }
        state[0] = 0x8000_0000;
        mt
    }

    /// Reference `init_genrand`.
    fn from_u32(seed: u32) -> Self {
        let mut state = Box::new([0u32; N]);
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1] ^ (state[i - 1] >> 30);
            state[i] = 1_812_433_253u32.wrapping_mul(prev).wrapping_add(i as u32);
        }
        Self { state, index: N }
    }

    fn twist(&mut self) {
        let state = &mut self.state;
        for i in 0..N {
            let y = (state[i] & UPPER_MASK) | (state[(i + 1) % N] & LOWER_MASK);
            let mut next = state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            state[i] = next;
        }
        self.index = 0;
    }

    pub fn genrand_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }

    /// `k` random bits, `1 <= k <= 64`. Wider requests take 32-bit words
    /// least significant first and keep the top bits of the last word.
    pub fn getrandbits(&mut self, k: u32) -> u64 {
        debug_assert!((1..=64).contains(&k));
        if k <= 32 {
            return u64::from(self.genrand_u32() >> (32 - k));
        }
        let mut remaining = k;
        let mut shift = 0;
        let mut out = 0u64;
        while remaining > 0 {
            let mut word = self.genrand_u32();
            if remaining < 32 {
                word >>= 32 - remaining;
            }
            out |= u64::from(word) << shift;
            shift += 32;
            remaining = remaining.saturating_sub(32);
        }
        out
    }

    /// Uniform integer in `[0, n)` by rejection on `bit_length(n)` bits.
    pub fn randbelow(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        let k = u64::BITS - n.leading_zeros();
        loop {
            let r = self.getrandbits(k);
            if r < n {
                return r;
            }
        }
    }
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937").field("index", &self.index).finish()
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.genrand_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.getrandbits(64)
    }

    /// Same bytes as `random.randbytes(n)`: little-endian words, a short
    /// last chunk takes the top bits of its word.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.genrand_u32() >> (32 - 8 * chunk.len() as u32);
            chunk.copy_from_slice(&word.to_le_bytes()[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// In-place Fisher-Yates from the back, one `randbelow(i + 1)` per position.
/// Same sequence of draws as `random.shuffle`.
pub fn shuffle<T>(items: &mut [T], rng: &mut Mt19937) {
    for i in (1..items.len()).rev() {
        let j = rng.randbelow(i as u64 + 1) as usize;
        items.swap(i, j);
    }
}

/// `|seed|` as little-endian 32-bit words; zero becomes `[0]`.
fn seed_key(seed: i128) -> Vec<u32> {
    let mut magnitude = seed.unsigned_abs();
    let mut key = Vec::new();
    while magnitude > 0 {
        key.push(magnitude as u32);
        magnitude >>= 32;
    }
    if key.is_empty() {
        key.push(0);
    }
    key
}
