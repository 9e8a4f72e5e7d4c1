use crate::common::{Faces, UInt};
use rand::{rngs::OsRng, CryptoRng, Rng, RngCore};

/// A source of die rolls, uniform over `1..=faces`.
pub trait Roller {
    fn roll(&mut self, faces: Faces) -> UInt;

    fn roll_iter(&mut self, num: usize, faces: Faces) -> RollIter<'_, Self>
    where
        Self: Sized,
    {
        RollIter {
            roller: self,
            num,
            faces,
        }
    }
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, faces: Faces) -> UInt {
        self.gen_range(1..=faces.get())
    }
}

pub struct RollIter<'a, R> {
    roller: &'a mut R,
    num: usize,
    faces: Faces,
}

impl<R: Roller> Iterator for RollIter<'_, R> {
    type Item = UInt;

    fn next(&mut self) -> Option<Self::Item> {
        if self.num == 0 {
            None
        } else {
            self.num -= 1;
            Some(self.roller.roll(self.faces))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.num, Some(self.num))
    }
}

/// Rolls dice from raw bytes of a cryptographically secure generator.
///
/// Each roll draws the fewest bytes that can hold `faces` distinct values and
/// rejects samples at or above the largest multiple of `faces` those bytes
/// can represent, so the final reduction modulo `faces` carries no bias.
#[derive(Debug, Default, Copy, Clone)]
pub struct SecureRoller<R = OsRng> {
    rng: R,
}

impl<R: RngCore + CryptoRng> SecureRoller<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> Roller for SecureRoller<R> {
    fn roll(&mut self, faces: Faces) -> UInt {
        let range = u128::from(faces.get());
        if range == 1 {
            return 1;
        }

        let bits = UInt::BITS - faces.get().leading_zeros();
        let byte_count = ((bits + 7) / 8) as usize;
        let space = 1u128 << (8 * byte_count);
        let limit = space - space % range;

        let mut buf = [0u8; 8];
        loop {
            let bytes = &mut buf[..byte_count];
            self.rng.fill_bytes(bytes);
            let sample = bytes
                .iter()
                .fold(0u128, |acc, &b| (acc << 8) | u128::from(b));
            if sample < limit {
                return (sample % range) as UInt + 1;
            }
        }
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;
