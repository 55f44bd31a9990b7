use super::super::domain::CertificationTier;
use serde::Serialize;

/// The next tier above the current standing and how far away it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierGap {
    pub tier: CertificationTier,
    pub points_needed: u32,
}

/// Highest tier whose threshold the score meets, scanning from the top.
///
/// `tiers` must be ascending by `min_score`. Thresholds are inclusive; when two tiers
/// share a threshold the later one in the list wins.
pub(crate) fn current_tier(tiers: &[CertificationTier], total_score: u32) -> CertificationTier {
    tiers
        .iter()
        .rev()
        .find(|tier| tier.min_score <= total_score)
        .copied()
        .unwrap_or(CertificationTier::UNCERTIFIED)
}

pub(crate) fn next_tier(tiers: &[CertificationTier], total_score: u32) -> Option<TierGap> {
    tiers
        .iter()
        .find(|tier| tier.min_score > total_score)
        .map(|tier| TierGap {
            tier: *tier,
            points_needed: tier.min_score - total_score,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certification::domain::TierLevel;

    fn ladder() -> Vec<CertificationTier> {
        [
            (TierLevel::Certified, 40),
            (TierLevel::Silver, 50),
            (TierLevel::Gold, 65),
            (TierLevel::Platinum, 75),
        ]
        .into_iter()
        .map(|(level, min_score)| CertificationTier {
            level,
            min_score,
            color: "#000000",
        })
        .collect()
    }

    #[test]
    fn thresholds_are_inclusive() {
        let tiers = ladder();
        assert_eq!(current_tier(&tiers, 39).level, TierLevel::Uncertified);
        assert_eq!(current_tier(&tiers, 40).level, TierLevel::Certified);
        assert_eq!(current_tier(&tiers, 64).level, TierLevel::Silver);
        assert_eq!(current_tier(&tiers, 75).level, TierLevel::Platinum);
        assert_eq!(current_tier(&tiers, 200).level, TierLevel::Platinum);
    }

    #[test]
    fn empty_tier_list_reports_uncertified() {
        assert_eq!(current_tier(&[], 90), CertificationTier::UNCERTIFIED);
        assert_eq!(next_tier(&[], 90), None);
    }

    #[test]
    fn colliding_thresholds_resolve_deterministically() {
        let mut tiers = ladder();
        tiers[2].min_score = 50;
        assert_eq!(current_tier(&tiers, 55).level, TierLevel::Gold);
        assert_eq!(current_tier(&tiers, 55).level, TierLevel::Gold);
    }

    #[test]
    fn next_tier_reports_remaining_points() {
        let tiers = ladder();
        let gap = next_tier(&tiers, 47).expect("silver is next");
        assert_eq!(gap.tier.level, TierLevel::Silver);
        assert_eq!(gap.points_needed, 3);
        assert_eq!(next_tier(&tiers, 75), None);
    }
}
