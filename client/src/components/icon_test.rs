use super::*;

#[test]
fn catalog_icons_have_paths() {
    let icons = [
        IconName::Dumbbell,
        IconName::HeartPulse,
        IconName::Apple,
        IconName::Users,
        IconName::Clock,
        IconName::Waves,
        IconName::Zap,
        IconName::Star,
        IconName::Crown,
        IconName::MapPin,
        IconName::Phone,
        IconName::Mail,
    ];
    for icon in icons {
        assert!(!icon_paths(icon).is_empty(), "{icon:?}");
    }
}

#[test]
fn path_data_starts_with_move_command() {
    for d in icon_paths(IconName::Quote).iter().chain(icon_paths(IconName::Send)) {
        assert!(d.starts_with('M') || d.starts_with('m'), "{d}");
    }
}
