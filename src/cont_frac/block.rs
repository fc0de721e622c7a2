use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, One, Zero};
use std::mem::swap;

/// The last two convergents `p_(k-1)/q_(k-1)` and `p_(k-2)/q_(k-2)` of a
/// simple continued fraction, advanced one coefficient at a time.
#[derive(Debug, Clone, Copy)]
pub struct Block<T> {
    pm1: T, // p_(k-1)
    pm2: T, // p_(k-2)
    qm1: T, // q_(k-1)
    qm2: T, // q_(k-2)
}

impl<T> Block<T> {
    /// push the latest convergent to the block
    pub fn update(&mut self, p: T, q: T) {
        swap(&mut self.pm2, &mut self.pm1); // self.pm2 = self.pm1
        swap(&mut self.qm2, &mut self.qm1); // self.qm2 = self.qm1
        self.pm1 = p;
        self.qm1 = q;
    }
}

impl<T: Zero + One> Block<T> {
    /// create a block before any coefficient is consumed
    pub fn identity() -> Self {
        Block {
            pm1: T::one(),
            pm2: T::zero(),
            qm1: T::zero(),
            qm2: T::one(),
        }
    }
}

impl<T: Integer + CheckedAdd + CheckedMul> Block<T> {
    /// next convergent with coefficient `a`, `None` on overflow
    pub fn checked_rmove(&self, a: T) -> Option<(T, T)> {
        let p = a.checked_mul(&self.pm1).and_then(|v| v.checked_add(&self.pm2))?;
        let q = a.checked_mul(&self.qm1).and_then(|v| v.checked_add(&self.qm2))?;
        Some((p, q))
    }
}
