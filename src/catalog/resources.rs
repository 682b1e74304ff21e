//! Downloadable material listed on the resources page.

use chrono::NaiveDate;
use serde::Serialize;

/// Kind of downloadable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    BookFormat,
    Whitepaper,
    Presentation,
    CodeExample,
}

impl ResourceKind {
    /// Section heading on the resources page.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::BookFormat => "Bokformat",
            Self::Whitepaper => "Whitepapers och guider",
            Self::Presentation => "Presentationer",
            Self::CodeExample => "Kodexempel och templates",
        }
    }
}

/// One downloadable item.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Resource {
    pub kind: ResourceKind,
    pub title: &'static str,
    pub description: &'static str,
    /// File format, or language for code examples.
    pub format: &'static str,
    pub category: Option<&'static str>,
    /// Human-readable size, slide count or similar.
    pub detail: Option<&'static str>,
    pub audience: Option<&'static str>,
    pub download_url: &'static str,
    /// Release or last-updated date, `YYYY-MM-DD`.
    pub date: &'static str,
}

impl Resource {
    /// Parsed release date; `None` if the literal is malformed.
    #[must_use]
    pub fn released(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }
}

pub static RESOURCES: [Resource; 13] = [
    Resource {
        kind: ResourceKind::BookFormat,
        title: "PDF Version",
        description: "Fullständig bok i PDF-format med alla diagram och illustrationer",
        format: "PDF",
        category: None,
        detail: Some("~95KB"),
        audience: None,
        download_url: "#",
        date: "2024-03-15",
    },
    Resource {
        kind: ResourceKind::Whitepaper,
        title: "Svenska Compliance-krav för Architecture as Code",
        description: "Omfattande guide till GDPR, MSB säkerhetskrav och andra svenska regleringar som påverkar Architecture as Code-implementationer.",
        format: "PDF",
        category: Some("Compliance"),
        detail: Some("2.1 MB"),
        audience: None,
        download_url: "#",
        date: "2024-03-01",
    },
    Resource {
        kind: ResourceKind::Whitepaper,
        title: "ROI Calculator för Architecture as Code-projekt",
        description: "Excel-mall för att beräkna avkastning på investering i Architecture as Code-initiativ, anpassad för svenska organisationer.",
        format: "XLSX",
        category: Some("Business Case"),
        detail: Some("450 KB"),
        audience: None,
        download_url: "#",
        date: "2024-02-15",
    },
    Resource {
        kind: ResourceKind::Whitepaper,
        title: "Architecture as Code Security Checklist",
        description: "Detaljerad säkerhetschecklista för Architecture as Code med fokus på svenska säkerhetsstandarder och best practices.",
        format: "PDF",
        category: Some("Säkerhet"),
        detail: Some("1.8 MB"),
        audience: None,
        download_url: "#",
        date: "2024-01-20",
    },
    Resource {
        kind: ResourceKind::Whitepaper,
        title: "Team Readiness Assessment",
        description: "Verktyg för att bedöma organisationens mognad och redo för Architecture as Code-transformation.",
        format: "PDF",
        category: Some("Assessment"),
        detail: Some("650 KB"),
        audience: None,
        download_url: "#",
        date: "2024-01-10",
    },
    Resource {
        kind: ResourceKind::Presentation,
        title: "Architecture as Code för svenska organisationer - Introduktion",
        description: "Grundläggande presentation om Architecture as Code och dess relevans för svenska organisationer.",
        format: "PPTX",
        category: Some("Introduktion"),
        detail: Some("45 bilder"),
        audience: Some("Ledning och IT-arkitekter"),
        download_url: "#",
        date: "2024-03-10",
    },
    Resource {
        kind: ResourceKind::Presentation,
        title: "Teknisk implementation av Architecture as Code",
        description: "Djupgående teknisk presentation för utvecklare och DevOps-team om praktisk implementation.",
        format: "PPTX",
        category: Some("Teknisk"),
        detail: Some("78 bilder"),
        audience: Some("Utvecklare och DevOps"),
        download_url: "#",
        date: "2024-02-28",
    },
    Resource {
        kind: ResourceKind::Presentation,
        title: "Säkerhet i Architecture as Code",
        description: "Specialiserad presentation om säkerhetsaspekter och compliance i Architecture as Code-miljöer.",
        format: "PPTX",
        category: Some("Säkerhet"),
        detail: Some("56 bilder"),
        audience: Some("Säkerhetsspecialister"),
        download_url: "#",
        date: "2024-02-05",
    },
    Resource {
        kind: ResourceKind::Presentation,
        title: "Organisatorisk förändring och Architecture as Code",
        description: "Presentation om change management och organisatoriska aspekter av Architecture as Code-transformation.",
        format: "PPTX",
        category: Some("Change Management"),
        detail: Some("42 bilder"),
        audience: Some("Projektledare och chefer"),
        download_url: "#",
        date: "2024-01-15",
    },
    Resource {
        kind: ResourceKind::CodeExample,
        title: "Terraform Templates för Azure Sverige",
        description: "Färdiga Terraform-templates för vanliga svenska cloud-scenarion i Azure Sverige-regioner.",
        format: "HCL",
        category: Some("Templates"),
        detail: None,
        audience: None,
        download_url: "#",
        date: "2024-03-12",
    },
    Resource {
        kind: ResourceKind::CodeExample,
        title: "AWS CloudFormation för GDPR-compliance",
        description: "CloudFormation templates som säkerställer GDPR-compliance för svenska organisationer.",
        format: "YAML",
        category: Some("Compliance"),
        detail: None,
        audience: None,
        download_url: "#",
        date: "2024-03-08",
    },
    Resource {
        kind: ResourceKind::CodeExample,
        title: "Kubernetes Manifests med svensk lokalisering",
        description: "Kubernetes deployment manifests anpassade för svenska språk- och tidszonsinsställningar.",
        format: "YAML",
        category: Some("Kubernetes"),
        detail: None,
        audience: None,
        download_url: "#",
        date: "2024-02-25",
    },
    Resource {
        kind: ResourceKind::CodeExample,
        title: "Ansible Playbooks för svenska servrar",
        description: "Ansible playbooks för konfiguration av svenska språkinställningar och tidszoner.",
        format: "YAML",
        category: Some("Configuration"),
        detail: None,
        audience: None,
        download_url: "#",
        date: "2024-02-10",
    },
];

/// Resources of one kind, newest first.
#[must_use]
pub fn by_kind(kind: ResourceKind) -> Vec<&'static Resource> {
    let mut items: Vec<&'static Resource> = RESOURCES.iter().filter(|r| r.kind == kind).collect();
    items.sort_by(|a, b| b.released().cmp(&a.released()));
    items
}

/// Date of the most recently updated resource.
#[must_use]
pub fn last_updated() -> Option<NaiveDate> {
    RESOURCES.iter().filter_map(Resource::released).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_dates_parse() {
        for resource in &RESOURCES {
            assert!(resource.released().is_some(), "bad date on {}", resource.title);
        }
    }

    #[test]
    fn by_kind_sorts_newest_first() {
        let papers = by_kind(ResourceKind::Whitepaper);
        assert_eq!(papers.len(), 4);
        assert!(papers.windows(2).all(|w| w[0].released() >= w[1].released()));
    }

    #[test]
    fn last_updated_is_book_release() {
        assert_eq!(last_updated(), NaiveDate::from_ymd_opt(2024, 3, 15));
    }
}
