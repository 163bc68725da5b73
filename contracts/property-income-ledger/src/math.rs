use crate::error::LedgerError;

/// Fixed-point scale of the income accumulator.
pub const SCALE: i128 = 1_000_000_000_000_000_000;
pub const BPS_DENOMINATOR: i128 = 10_000;
/// 2%, the rate charged on rental distributions.
pub const DEFAULT_FEE_BPS: u32 = 200;
pub const MAX_FEE_BPS: u32 = 1_000;

/// Income per share, stored as an integer scaled by [`SCALE`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct FixedPoint(i128);

impl FixedPoint {
    pub const ZERO: FixedPoint = FixedPoint(0);

    pub fn from_raw(raw: i128) -> Self {
        FixedPoint(raw)
    }

    pub fn raw(self) -> i128 {
        self.0
    }

    /// `amount / shares`, rounded down at `SCALE` precision.
    pub fn ratio(amount: i128, shares: i128) -> Result<Self, LedgerError> {
        if shares <= 0 {
            return Err(LedgerError::NoShares);
        }
        let scaled = amount
            .checked_mul(SCALE)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(FixedPoint(scaled / shares))
    }

    pub fn checked_add(self, other: FixedPoint) -> Result<Self, LedgerError> {
        self.0
            .checked_add(other.0)
            .map(FixedPoint)
            .ok_or(LedgerError::MathOverflow)
    }

    pub fn checked_sub(self, other: FixedPoint) -> Result<Self, LedgerError> {
        self.0
            .checked_sub(other.0)
            .map(FixedPoint)
            .ok_or(LedgerError::MathOverflow)
    }

    /// `shares * self`, converted back to whole token units (rounded down).
    pub fn mul_floor(self, shares: i128) -> Result<i128, LedgerError> {
        let product = self
            .0
            .checked_mul(shares)
            .ok_or(LedgerError::MathOverflow)?;
        Ok(product / SCALE)
    }
}

/// Splits a deposit into `(net, fee)`.
pub fn split_fee(amount: i128, fee_bps: u32) -> Result<(i128, i128), LedgerError> {
    let fee = amount
        .checked_mul(fee_bps as i128)
        .ok_or(LedgerError::MathOverflow)?
        / BPS_DENOMINATOR;
    let net = amount.checked_sub(fee).ok_or(LedgerError::MathOverflow)?;
    Ok((net, fee))
}

pub fn add_i128(a: i128, b: i128) -> Result<i128, LedgerError> {
    a.checked_add(b).ok_or(LedgerError::MathOverflow)
}

pub fn sub_i128(a: i128, b: i128) -> Result<i128, LedgerError> {
    a.checked_sub(b).ok_or(LedgerError::MathOverflow)
}
