//! Contact cards and opening hours.

use super::IconName;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub icon: IconName,
    pub title: &'static str,
    pub content: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo { icon: IconName::MapPin, title: "Address", content: "11 Fitness Guwahati Assam" },
    ContactInfo { icon: IconName::Phone, title: "Phone", content: "+9112300-45678" },
    ContactInfo { icon: IconName::Mail, title: "Email", content: "Dummy@Gmail.com" },
    ContactInfo { icon: IconName::Clock, title: "Hours", content: "Open 24/7" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpeningHours {
    pub day: &'static str,
    pub hours: &'static str,
}

pub const OPENING_HOURS: &[OpeningHours] = &[
    OpeningHours { day: "Monday - Friday", hours: "24 Hours" },
    OpeningHours { day: "Saturday", hours: "24 Hours" },
    OpeningHours { day: "Sunday", hours: "24 Hours" },
];
