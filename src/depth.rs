//! Traversal limit shared by every scan.

use derive_more::{Display, From};

/// How many directory levels below the scan root a scan may descend.
///
/// A negative value means no limit, zero keeps the scan to the root itself and
/// a positive `n` allows `n` further levels. Plain integers convert into a
/// `Depth`, so `read(dir, -1)` and `read(dir, Depth::UNLIMITED)` are the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
pub struct Depth(i32);

impl Depth {
    pub const UNLIMITED: Depth = Depth(-1);
    pub const CURRENT: Depth = Depth(0);

    pub fn levels(levels: u16) -> Self {
        Depth(i32::from(levels))
    }

    pub fn is_unlimited(self) -> bool {
        self.0 < 0
    }

    /// Whether subdirectories at this level may still be descended into.
    pub fn can_descend(self) -> bool {
        self.0 != 0
    }

    /// The depth left for the next level down. Unlimited stays unlimited.
    pub fn descend(self) -> Self {
        if self.is_unlimited() {
            self
        } else {
            Depth(self.0.saturating_sub(1).max(0))
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth::UNLIMITED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(-1, true, true)]
    #[case(i32::MIN, true, true)]
    #[case(0, false, false)]
    #[case(3, false, true)]
    fn classification(#[case] raw: i32, #[case] unlimited: bool, #[case] can_descend: bool) {
        let depth = Depth::from(raw);
        assert_eq!(depth.is_unlimited(), unlimited);
        assert_eq!(depth.can_descend(), can_descend);
    }

    #[test]
    fn descend_counts_down_to_current() {
        let depth = Depth::levels(2);
        assert_eq!(depth.descend(), Depth::from(1));
        assert_eq!(depth.descend().descend(), Depth::CURRENT);
        assert_eq!(Depth::CURRENT.descend(), Depth::CURRENT);
    }

    #[test]
    fn unlimited_never_runs_out() {
        assert_eq!(Depth::UNLIMITED.descend(), Depth::UNLIMITED);
        assert_eq!(Depth::from(-7).descend(), Depth::from(-7));
        assert_eq!(Depth::default(), Depth::UNLIMITED);
    }

    #[test]
    fn displays_raw_value() {
        assert_eq!(Depth::from(-1).to_string(), "-1");
        assert_eq!(Depth::levels(4).to_string(), "4");
    }
}
