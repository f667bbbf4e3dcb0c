//! Static contact channels shown beside the form.

use crate::i18n::LanguageStrings;
use serde::Serialize;

/// Icon of a contact or social channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactIcon {
    Phone,
    Email,
    Location,
    Schedule,
    Whatsapp,
    Instagram,
    Facebook,
    Tiktok,
}

impl ContactIcon {
    /// Text glyph used when no icon font is available.
    pub fn glyph(&self) -> &'static str {
        match self {
            ContactIcon::Phone => "📞",
            ContactIcon::Email => "✉️",
            ContactIcon::Location => "📍",
            ContactIcon::Schedule => "🕒",
            ContactIcon::Whatsapp => "💬",
            ContactIcon::Instagram => "📷",
            ContactIcon::Facebook => "👍",
            ContactIcon::Tiktok => "🎵",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub icon: ContactIcon,
    pub title: &'static str,
    pub content: &'static str,
    /// Empty when the entry is informational only
    pub link: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: ContactIcon,
    pub url: &'static str,
}

pub fn contact_channels(strings: &LanguageStrings) -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            icon: ContactIcon::Phone,
            title: strings.contact_phone_title,
            content: "+34 987 654 321",
            link: "tel:+34987654321",
        },
        ContactChannel {
            icon: ContactIcon::Email,
            title: strings.contact_email_title,
            content: "info@empresa.com",
            link: "mailto:info@empresa.com",
        },
        ContactChannel {
            icon: ContactIcon::Location,
            title: strings.contact_location_title,
            content: strings.contact_location_content,
            link: "https://maps.google.com/?q=Cancún+Quintana+Roo+México",
        },
        ContactChannel {
            icon: ContactIcon::Schedule,
            title: strings.contact_schedule_title,
            content: strings.contact_schedule_content,
            link: "",
        },
    ]
}

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            name: "Instagram",
            icon: ContactIcon::Instagram,
            url: "https://instagram.com",
        },
        SocialLink {
            name: "Facebook",
            icon: ContactIcon::Facebook,
            url: "https://facebook.com",
        },
        SocialLink {
            name: "WhatsApp",
            icon: ContactIcon::Whatsapp,
            url: "https://wa.me/123456789",
        },
        SocialLink {
            name: "TikTok",
            icon: ContactIcon::Tiktok,
            url: "https://tiktok.com",
        },
    ]
}
