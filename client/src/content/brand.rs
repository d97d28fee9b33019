//! Business identity shared by the navbar, footer and outbound links.

pub const NAME: &str = "11 Fitness";

/// Upper-cased wordmark shown in the navbar.
pub const WORDMARK: &str = "11 FITNESS";

pub const TAGLINE: &str = "Transform your body and mind at the city's premier fitness destination. \
     State-of-the-art equipment, expert trainers, and a community that inspires.";

/// WhatsApp number in the form `wa.me` expects it, passed through verbatim.
pub const WHATSAPP_NUMBER: &str = "+917479109758";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3579.7296270752295!2d91.85513807354495!3d26.205472139481937!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x375af776c6d6e9cf%3A0x4ed7fbb5a4298149!2s11%20Fitness!5e0!3m2!1sen!2sin!4v1770089166955!5m2!1sen!2sin";

pub const COPYRIGHT: &str = "© 2024 11 Fitness. All rights reserved.";
