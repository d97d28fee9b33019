//! Trainer roster.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainerSocial {
    pub instagram: &'static str,
    pub twitter: &'static str,
    pub linkedin: &'static str,
}

const PLACEHOLDER_SOCIAL: TrainerSocial = TrainerSocial { instagram: "#", twitter: "#", linkedin: "#" };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trainer {
    pub name: &'static str,
    pub specialty: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
    pub social: TrainerSocial,
}

pub const TRAINERS: &[Trainer] = &[
    Trainer {
        name: "Dummy Name",
        specialty: "Strength & Conditioning",
        image: "https://images.unsplash.com/photo-1567013127542-490d757e51fc?w=400&h=500&fit=crop",
        bio: "10+ years experience. Former Olympic athlete.",
        social: PLACEHOLDER_SOCIAL,
    },
    Trainer {
        name: "Dummy Name",
        specialty: "HIIT & Functional Training",
        image: "https://images.unsplash.com/photo-1594381898411-846e7d193883?w=400&h=500&fit=crop",
        bio: "Certified CrossFit L3. Nutrition specialist.",
        social: PLACEHOLDER_SOCIAL,
    },
    Trainer {
        name: "Dummy Name",
        specialty: "Boxing & MMA",
        image: "https://images.unsplash.com/photo-1583454110551-21f2fa2afe61?w=400&h=500&fit=crop",
        bio: "Pro boxing coach. 15 years combat sports.",
        social: PLACEHOLDER_SOCIAL,
    },
    Trainer {
        name: "Dummy Name",
        specialty: "Yoga & Mindfulness",
        image: "https://images.unsplash.com/photo-1518611012118-696072aa579a?w=400&h=500&fit=crop",
        bio: "RYT-500. Holistic wellness practitioner.",
        social: PLACEHOLDER_SOCIAL,
    },
];
