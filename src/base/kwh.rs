/// Non-negative energy quantity in kilowatt-hours.
///
/// Addition saturates at `u64::MAX` instead of wrapping.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
)]
pub struct Kwh(pub u64);

impl Kwh {
    /// Returns `kwh.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        self.0.checked_ilog10().map_or(1, |d| d as usize + 1)
    }

    /// Returns a displayable form with comma thousands separators.
    pub fn grouped(self) -> Grouped {
        Grouped(self)
    }

    /// Returns `kwh.grouped().to_string().len()` without actually building a
    /// string.
    pub fn grouped_charlen(self) -> usize {
        let len = self.charlen();
        len + (len - 1) / 3
    }
}

impl std::ops::Add for Kwh {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Kwh {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Kwh {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0), std::ops::Add::add)
    }
}

impl std::fmt::Display for Kwh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Kwh {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// See [`Kwh::grouped`].
#[derive(Debug, Clone, Copy)]
pub struct Grouped(Kwh);

impl std::fmt::Display for Grouped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut n = self.0.0;
        let mut bytes = Vec::<u8>::with_capacity(self.0.grouped_charlen());
        let mut i = 0;
        loop {
            if i > 0 && i % 3 == 0 {
                bytes.push(b',');
            }
            bytes.push(b'0' + (n % 10) as u8);
            n /= 10;
            i += 1;
            if n == 0 {
                break;
            }
        }
        bytes.reverse();
        let s = std::str::from_utf8(&bytes).map_err(|_| std::fmt::Error)?;
        f.write_str(s)
    }
}
