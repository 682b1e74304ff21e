//! Front-page lists and contact form choices.

use serde::Serialize;

pub const BOOK_TITLE: &str = "Arkitektur som kod";

pub const BOOK_TAGLINE: &str = "En omfattande bok om Architecture as Code på svenska";

pub static THEMES: [&str; 7] = [
    "Grundläggande Architecture as Code-principer",
    "Infrastructure as Code som praktiskt exempel",
    "Molnarkitektur som kod",
    "Säkerhet och compliance",
    "CI/CD och automatisering",
    "Organisatorisk transformation",
    "Praktiska fallstudier",
];

pub static TARGET_AUDIENCE: [&str; 5] = [
    "Systemarkitekter",
    "DevOps-ingenjörer",
    "Utvecklare",
    "Projektledare",
    "IT-chefer",
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Author {
    pub name: &'static str,
    pub title: &'static str,
}

pub static AUTHORS: [Author; 1] = [Author {
    name: "Gunnar Nordqvist",
    title: "Certifierad Chefsarkitekt och IT-säkerhetsspecialist",
}];

/// A selectable reason for contacting the authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InquiryType {
    /// Form value.
    pub value: &'static str,
    pub label: &'static str,
}

pub static INQUIRY_TYPES: [InquiryType; 6] = [
    InquiryType { value: "general", label: "Allmän förfrågan" },
    InquiryType { value: "licensing", label: "Licensiering och användning" },
    InquiryType { value: "training", label: "Utbildning och workshops" },
    InquiryType { value: "consulting", label: "Konsulttjänster" },
    InquiryType { value: "speaking", label: "Föreläsningar och presentationer" },
    InquiryType { value: "media", label: "Media och press" },
];

/// Looks up an inquiry type by form value.
#[must_use]
pub fn inquiry_type(value: &str) -> Option<&'static InquiryType> {
    INQUIRY_TYPES.iter().find(|t| t.value == value)
}
