//! Hero banner stats.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat { value: "100+", label: "Active Members" },
    HeroStat { value: "10+", label: "Expert Trainers" },
    HeroStat { value: "24/7", label: "Access Hours" },
    HeroStat { value: "98%", label: "Satisfaction Rate" },
];
