//! Fixed-point multipliers.
//!
//! All negotiation factors (lifecycle, trait, mitigation) are stored in basis
//! points so the engine never touches floating point. Results are floored only
//! at the end of a formula.

use core::fmt;

/// A non-negative factor in basis points (`10_000` = ×1.0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Multiplier(u32);

impl Multiplier {
    /// Basis points per whole unit.
    pub const SCALE: u32 = 10_000;
    pub const ONE: Self = Self(Self::SCALE);

    pub const fn from_bps(bps: u32) -> Self {
        Self(bps)
    }

    /// Creates a multiplier from a whole percentage (130 = ×1.3).
    pub const fn percent(percent: u32) -> Self {
        Self(percent.saturating_mul(100))
    }

    #[inline]
    pub const fn bps(self) -> u32 {
        self.0
    }

    pub const fn is_identity(self) -> bool {
        self.0 == Self::SCALE
    }

    /// Multiplies two factors, truncating to basis-point precision.
    pub fn compose(self, other: Self) -> Self {
        let product = u64::from(self.0) * u64::from(other.0) / u64::from(Self::SCALE);
        Self(u32::try_from(product).unwrap_or(u32::MAX))
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x{}.{:04}",
            self.0 / Self::SCALE,
            self.0 % Self::SCALE
        )
    }
}

/// An exact product of [`Multiplier`]s, kept as a reduced fraction.
///
/// A chain of trait multipliers is floored once, where it is applied, not at
/// every step of the fold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Factor {
    numer: u128,
    denom: u128,
}

impl Factor {
    pub const ONE: Self = Self { numer: 1, denom: 1 };

    /// Folds in another multiplier. Drops to basis-point precision only if
    /// the exact fraction no longer fits in 128 bits.
    pub fn times(self, multiplier: Multiplier) -> Self {
        let exact = self
            .numer
            .checked_mul(u128::from(multiplier.bps()))
            .zip(self.denom.checked_mul(u128::from(Multiplier::SCALE)));
        match exact {
            Some((numer, denom)) => Self::reduced(numer, denom),
            None => Self::from(self.approximate().compose(multiplier)),
        }
    }

    pub fn is_identity(self) -> bool {
        self.numer == self.denom
    }

    /// The largest basis-point multiplier not above the exact value.
    pub fn approximate(self) -> Multiplier {
        let bps = self.numer.saturating_mul(u128::from(Multiplier::SCALE)) / self.denom;
        Multiplier::from_bps(u32::try_from(bps).unwrap_or(u32::MAX))
    }

    /// `⌊value / divisor × self⌋` with a single rounding step.
    ///
    /// `divisor` must be non-zero.
    pub fn floor_of(self, value: u128, divisor: u128) -> u128 {
        match self.exact(value, divisor) {
            Some((numer, denom)) => numer / denom,
            None => self.scale_whole(value / divisor),
        }
    }

    /// Signed [`floor_of`](Self::floor_of), rounding toward negative infinity.
    pub fn floor_of_signed(self, value: i128, divisor: u128) -> i128 {
        let magnitude = value.unsigned_abs();
        let scaled = match self.exact(magnitude, divisor) {
            Some((numer, denom)) if value < 0 => numer.div_ceil(denom),
            Some((numer, denom)) => numer / denom,
            None => self.scale_whole(magnitude / divisor),
        };
        let scaled = i128::try_from(scaled).unwrap_or(i128::MAX);
        if value < 0 { -scaled } else { scaled }
    }

    fn exact(self, value: u128, divisor: u128) -> Option<(u128, u128)> {
        Some((value.checked_mul(self.numer)?, divisor.checked_mul(self.denom)?))
    }

    fn scale_whole(self, whole: u128) -> u128 {
        let (quotient, remainder) = (whole / self.denom, whole % self.denom);
        quotient
            .saturating_mul(self.numer)
            .saturating_add(remainder.saturating_mul(self.numer) / self.denom)
    }

    fn reduced(numer: u128, denom: u128) -> Self {
        let divisor = gcd(numer, denom);
        Self {
            numer: numer / divisor,
            denom: denom / divisor,
        }
    }
}

impl Default for Factor {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<Multiplier> for Factor {
    fn from(multiplier: Multiplier) -> Self {
        Self::reduced(u128::from(multiplier.bps()), u128::from(Multiplier::SCALE))
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.approximate().fmt(f)
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
