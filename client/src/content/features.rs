//! "Why choose us" feature list.

use super::IconName;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconName,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: IconName::Dumbbell,
        title: "Personal Training",
        description: "One-on-one sessions with certified trainers who craft personalized workout plans for your goals.",
    },
    Feature {
        icon: IconName::HeartPulse,
        title: "Modern Equipment",
        description: "State-of-the-art machines and free weights from leading fitness brands worldwide.",
    },
    Feature {
        icon: IconName::Apple,
        title: "Nutrition Plans",
        description: "Expert nutritionists create customized meal plans to fuel your transformation.",
    },
    Feature {
        icon: IconName::Users,
        title: "Group Classes",
        description: "High-energy classes from HIIT to yoga, led by motivating instructors.",
    },
    Feature {
        icon: IconName::Clock,
        title: "24/7 Access",
        description: "Train on your schedule with round-the-clock access to all facilities.",
    },
    Feature {
        icon: IconName::Waves,
        title: "Sauna & Recovery",
        description: "Premium recovery amenities including sauna, steam room, and massage services.",
    },
];
