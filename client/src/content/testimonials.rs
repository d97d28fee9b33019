//! Member testimonials for the carousel.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    /// Star rating, 1..=5.
    pub rating: u8,
    pub text: &'static str,
}

pub const MAX_RATING: u8 = 5;

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Candidate 1",
        role: "Lost 30 lbs in 4 months",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop",
        rating: 5,
        text: "11 Fitness completely transformed my life. The trainers are incredibly supportive, and the community here pushes you to be your best. I've never felt stronger!",
    },
    Testimonial {
        name: "Candidate 2",
        role: "Gained 15 lbs muscle",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop",
        rating: 5,
        text: "Best gym I've ever been to. The equipment is top-notch, and having 24/7 access means I can work out on my schedule. The results speak for themselves.",
    },
    Testimonial {
        name: "Candidate 3",
        role: "Marathon runner",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop",
        rating: 5,
        text: "The personalized training program helped me shave 20 minutes off my marathon time. The nutrition guidance was a game-changer for my performance.",
    },
    Testimonial {
        name: "Candidate 4",
        role: "Business executive",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop",
        rating: 5,
        text: "As a busy professional, I needed a gym that fits my schedule. 11 Fitness's 24/7 access and efficient training programs are exactly what I needed.",
    },
];
