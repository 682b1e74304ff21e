//! The chapter catalogue.
//!
//! Chapters are hardcoded in book order. A chapter's index is its position
//! in [`CHAPTERS`]; nothing else links chapters together.

use serde::Serialize;

/// Publication status of a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChapterStatus {
    /// Outlined but not yet written.
    Planned,
    /// Written and available under `/docs/`.
    Published,
}

impl ChapterStatus {
    /// Swedish label shown on status badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Planned => "Planerad",
            Self::Published => "Klar",
        }
    }
}

/// One markdown-backed section of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chapter {
    /// Two-digit identifier, e.g. `"07"`.
    pub id: &'static str,
    pub title: &'static str,
    /// Thematic area the chapter belongs to.
    pub area: &'static str,
    /// Markdown file under `/docs/`.
    pub filename: &'static str,
    /// Short description shown on the chapter list.
    pub summary: &'static str,
    pub key_topics: &'static [&'static str],
    pub status: ChapterStatus,
}

impl Chapter {
    /// Route of the chapter detail page.
    #[must_use]
    pub fn route(&self) -> String {
        format!("/chapter/{}", self.id)
    }

    /// Slug used for the chapter's diagram image.
    ///
    /// Taken from the filename segment after the first `_`, up to the
    /// extension: `03_versionhantering.md` gives `versionhantering`.
    /// Falls back to `kapitel` when the filename has no such segment.
    #[must_use]
    pub fn diagram_slug(&self) -> &'static str {
        self.filename
            .split('_')
            .nth(1)
            .and_then(|segment| segment.split('.').next())
            .filter(|slug| !slug.is_empty())
            .unwrap_or("kapitel")
    }

    /// Relative path of the chapter's overview diagram.
    #[must_use]
    pub fn diagram_path(&self) -> String {
        format!("images/diagram_{}_{}.png", self.id, self.diagram_slug())
    }
}

const fn chapter(
    id: &'static str,
    title: &'static str,
    area: &'static str,
    filename: &'static str,
    summary: &'static str,
    key_topics: &'static [&'static str],
) -> Chapter {
    Chapter {
        id,
        title,
        area,
        filename,
        summary,
        key_topics,
        status: ChapterStatus::Published,
    }
}

/// All chapters of "Arkitektur som kod", in reading order.
pub static CHAPTERS: [Chapter; 27] = [
    chapter(
        "01",
        "Inledning till arkitektur som kod",
        "Grundläggande koncept",
        "01_inledning.md",
        "En introduktion till Infrastructure as Code och dess fundamentala principer. Täcker bakgrund, motivation och definierar omfattningen för kodbaserad infrastruktur.",
        &["IaC definition", "Traditionella utmaningar", "Svenska drivkrafter", "Compliance krav"],
    ),
    chapter(
        "02",
        "Grundläggande principer för Architecture as Code",
        "Grundläggande koncept",
        "02_grundlaggande_principer.md",
        "Fundamentala principer som säkerställer framgångsrik IaC-implementation. Fokus på deklarativ approach, versionskontroll och automatisering.",
        &["Deklarativ vs imperativ", "Versionskontroll", "Automatisering", "Reproducerbarhet"],
    ),
    chapter(
        "03",
        "Versionhantering och kodstruktur",
        "Grundläggande koncept",
        "03_versionhantering.md",
        "Best practices för att strukturera och versionshantera infrastrukturkod. Inkluderar Git workflows och kodorganisation.",
        &["Git workflows", "Kodstruktur", "Branching strategies", "Collaboration"],
    ),
    chapter(
        "04",
        "Architecture Decision Records (ADR)",
        "Grundläggande koncept",
        "04_adr.md",
        "Strukturerad metod för att dokumentera viktiga arkitekturbeslut. Täcker ADR-format, verktyg och integration med Infrastructure as Code.",
        &["Decision documentation", "ADR structure", "Architectural governance", "Compliance tracking"],
    ),
    chapter(
        "05",
        "Automatisering, DevOps och CI/CD för Infrastructure as Code",
        "Systemutveckling",
        "05_automatisering_devops_cicd.md",
        "Implementering av automatiserade CI/CD-pipelines för infrastrukturkod. Täcker testing, validation och deployment strategies.",
        &["CI/CD pipelines", "Automated testing", "Deployment strategies", "Quality gates"],
    ),
    chapter(
        "06",
        "Molnarkitektur som kod",
        "Arkitektur",
        "06_molnarkitektur.md",
        "Designprinciper för molnbaserad infrastruktur som kod. Fokus på skalbarhet, resiliens och multi-cloud strategier.",
        &["Cloud design patterns", "Multi-cloud", "Skalbarhet", "Resiliens"],
    ),
    chapter(
        "07",
        "Containerisering och orkestrering som kod",
        "Arkitektur",
        "07_containerisering.md",
        "Hur containrar och orkestreringsplattformar beskrivs deklarativt. Täcker Kubernetes-manifest, Helm och GitOps-flöden.",
        &["Containerisering", "Kubernetes", "Helm charts", "GitOps"],
    ),
    chapter(
        "08",
        "Microservices-arkitektur som kod",
        "Arkitektur",
        "08_microservices.md",
        "Att definiera tjänstegränser, kommunikation och driftmiljö för microservices i kod.",
        &["Service boundaries", "Service mesh", "API-kontrakt", "Distribuerad drift"],
    ),
    chapter(
        "09",
        "Säkerhet i Architecture as Code",
        "Säkerhet",
        "09_sakerhet.md",
        "Säkerhetsaspekter och best practices för IaC. Inkluderar secrets management, compliance och security scanning.",
        &["Security by design", "Secrets management", "Compliance", "Vulnerability scanning"],
    ),
    chapter(
        "10",
        "Policy och säkerhet som kod i detalj",
        "Säkerhet",
        "10_policy_sakerhet.md",
        "Policy as Code i detalj: regler som versionshanteras, testas och verkställs automatiskt i pipelines.",
        &["Policy as Code", "Open Policy Agent", "Guardrails", "Automatiserad granskning"],
    ),
    chapter(
        "11",
        "Compliance och regelefterlevnad",
        "Säkerhet",
        "11_compliance.md",
        "Säkerställande av compliance med svenska och europeiska regleringar genom kodbaserad infrastruktur.",
        &["GDPR compliance", "Regulatory requirements", "Audit trails", "Data sovereignty"],
    ),
    chapter(
        "12",
        "Teststrategier för infrastruktukod",
        "Systemutveckling",
        "12_teststrategier.md",
        "Omfattande teststrategier för att säkerställa kvalitet och tillförlitlighet i infrastrukturkod.",
        &["Testing strategies", "Test automation", "Quality gates", "Validation frameworks"],
    ),
    chapter(
        "13",
        "Architecture as Code i praktiken",
        "Systemutveckling",
        "13_praktisk_implementation.md",
        "Praktisk implementation steg för steg, från första pilotprojekt till förvaltning i stor skala.",
        &["Implementation roadmap", "Pilotprojekt", "Verktygsval", "Förvaltning"],
    ),
    chapter(
        "14",
        "Kostnadsoptimering och resurshantering",
        "Arkitektur",
        "14_kostnadsoptimering.md",
        "Strategier för kostnadsoptimering och effektiv resurshantering genom IaC.",
        &["Cost optimization", "Resource management", "Budget control", "ROI measurement"],
    ),
    chapter(
        "15",
        "Migration från traditionell infrastruktur",
        "Arkitektur",
        "15_migration.md",
        "Planering och genomförande av migrering från manuellt hanterad infrastruktur till kod.",
        &["Migrationsstrategier", "Inventering", "Stegvis övergång", "Riskhantering"],
    ),
    chapter(
        "16",
        "Organisatorisk förändring och teamstrukturer",
        "Organisationsutveckling",
        "16_organisatorisk_forandring.md",
        "Hantering av organisatoriska förändringar vid IaC-implementation. Fokus på team dynamics och cultural change.",
        &["Change management", "Team structures", "Cultural transformation", "Skills development"],
    ),
    chapter(
        "17",
        "Team-struktur och kompetensutveckling för IaC",
        "Organisationsutveckling",
        "17_team_struktur.md",
        "Hur team organiseras och kompetens byggs upp för att arbeta effektivt med infrastruktur som kod.",
        &["Teamtopologier", "Kompetensutveckling", "Roller och ansvar", "Kunskapsdelning"],
    ),
    chapter(
        "18",
        "Digitalisering genom kodbaserad infrastruktur",
        "Digitalisering",
        "18_digitalisering.md",
        "Hur IaC möjliggör och accelererar digital transformation inom svenska organisationer.",
        &["Digital transformation", "Innovation", "Business agility", "Competitive advantage"],
    ),
    chapter(
        "19",
        "Använd Lovable för att skapa mockups för svenska organisationer",
        "Produkt- och tjänstutveckling",
        "19_lovable_mockups.md",
        "Att snabbt ta fram klickbara mockups med Lovable och förankra dem i svenska organisationers krav.",
        &["Lovable", "Prototyping", "Användartester", "Tillgänglighet"],
    ),
    chapter(
        "20",
        "Framtida trender och teknologier",
        "Innovation",
        "20_framtida_trender.md",
        "Emerging technologies och framtida trender inom Infrastructure as Code.",
        &["Emerging technologies", "Future trends", "Technology roadmaps", "Industry evolution"],
    ),
    chapter(
        "21",
        "Best practices och lärda läxor",
        "Systemutveckling",
        "21_best_practices.md",
        "Sammanställning av best practices och viktiga lärdomar från framgångsrika IaC-implementationer.",
        &["Best practices", "Lessons learned", "Success factors", "Common pitfalls"],
    ),
    chapter(
        "22",
        "Slutsats",
        "Sammanfattning",
        "22_slutsats.md",
        "Sammanfattning av bokens huvudbudskap och rekommendationer för framtida IaC-arbete.",
        &["Key takeaways", "Future recommendations", "Action items", "Next steps"],
    ),
    chapter(
        "23",
        "Ordlista",
        "Referenser",
        "23_ordlista.md",
        "Omfattande ordlista med definitioner av termer och begrepp inom Infrastructure as Code.",
        &["Terminology", "Definitions", "Glossary", "Technical terms"],
    ),
    chapter(
        "24",
        "Om författarna",
        "Referenser",
        "24_om_forfattarna.md",
        "Information om bokens författare och deras bakgrund inom Infrastructure as Code.",
        &["Author bios", "Professional background", "Expertise", "Contributions"],
    ),
    chapter(
        "25",
        "Framtida utveckling och trender",
        "Innovation",
        "25_framtida_utveckling.md",
        "En blick framåt på hur arkitektur som kod utvecklas med AI-stöd och nya plattformar.",
        &["AI-assisterad utveckling", "Plattformsteam", "Standardisering", "Hållbarhet"],
    ),
    chapter(
        "26",
        "Appendix: Kodexempel och tekniska implementationer",
        "Referenser",
        "26_appendix_kodexempel.md",
        "Samlade kodexempel och tekniska implementationer som refereras genom hela boken.",
        &["Kodexempel", "Terraform", "CloudFormation", "Pipelines"],
    ),
    chapter(
        "27",
        "Teknisk uppbyggnad för bokproduktion",
        "Teknik",
        "27_teknisk_uppbyggnad.md",
        "Hur boken själv byggs som kod: markdown, diagram och automatiserad publicering.",
        &["Pandoc", "Mermaid-diagram", "GitHub Actions", "Publiceringsflöde"],
    ),
];

/// Sentinel area value meaning "no area filter".
pub const ALL_AREAS: &str = "all";

/// Returns the full catalogue.
#[must_use]
pub fn all() -> &'static [Chapter] {
    &CHAPTERS
}

/// Finds a chapter by its two-digit id, returning its index and descriptor.
#[must_use]
pub fn find(id: &str) -> Option<(usize, &'static Chapter)> {
    CHAPTERS.iter().enumerate().find(|(_, c)| c.id == id)
}

/// Returns the chapter at `index`, if any.
#[must_use]
pub fn get(index: usize) -> Option<&'static Chapter> {
    CHAPTERS.get(index)
}

/// Route of the chapter before `index`, or `None` on the first chapter.
#[must_use]
pub fn previous_route(index: usize) -> Option<String> {
    index
        .checked_sub(1)
        .and_then(get)
        .map(Chapter::route)
}

/// Route of the chapter after `index`, or `None` on the last chapter.
#[must_use]
pub fn next_route(index: usize) -> Option<String> {
    get(index + 1).map(Chapter::route)
}

/// Distinct areas in first-seen order.
#[must_use]
pub fn areas() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for chapter in &CHAPTERS {
        if !seen.contains(&chapter.area) {
            seen.push(chapter.area);
        }
    }
    seen
}

/// Filters the catalogue by a free-text query and an area.
///
/// The query matches title, summary or area case-insensitively; an empty
/// query matches everything. `area` of [`ALL_AREAS`] disables the area filter.
#[must_use]
pub fn filter(query: &str, area: &str) -> Vec<&'static Chapter> {
    let needle = query.trim().to_lowercase();
    CHAPTERS
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.title.to_lowercase().contains(&needle)
                || c.summary.to_lowercase().contains(&needle)
                || c.area.to_lowercase().contains(&needle)
        })
        .filter(|c| area == ALL_AREAS || c.area == area)
        .collect()
}

/// Suggests the closest chapter id for a mistyped one.
#[must_use]
pub fn suggest(id: &str) -> Option<&'static str> {
    CHAPTERS
        .iter()
        .map(|c| (c.id, strsim::levenshtein(id, c.id)))
        .filter(|(_, distance)| *distance <= 1)
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_two_digit_and_sequential() {
        for (i, chapter) in CHAPTERS.iter().enumerate() {
            assert_eq!(chapter.id.len(), 2);
            assert_eq!(chapter.id, format!("{:02}", i + 1));
            assert!(chapter.filename.starts_with(chapter.id));
            assert!(chapter.filename.ends_with(".md"));
        }
    }

    #[test]
    fn find_returns_index() {
        let (index, chapter) = find("04").unwrap();
        assert_eq!(index, 3);
        assert_eq!(chapter.filename, "04_adr.md");
        assert!(find("99").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn neighbours_stop_at_the_ends() {
        assert_eq!(previous_route(0), None);
        assert_eq!(next_route(0).as_deref(), Some("/chapter/02"));
        assert_eq!(previous_route(26).as_deref(), Some("/chapter/26"));
        assert_eq!(next_route(26), None);
    }

    #[test]
    fn diagram_slug_uses_second_segment() {
        let (_, chapter) = find("05").unwrap();
        assert_eq!(chapter.diagram_slug(), "automatisering");
        assert_eq!(
            chapter.diagram_path(),
            "images/diagram_05_automatisering.png"
        );
    }

    #[test]
    fn diagram_slug_falls_back() {
        let chapter = Chapter {
            filename: "appendix.md",
            ..CHAPTERS[0]
        };
        assert_eq!(chapter.diagram_slug(), "kapitel");
    }

    #[test]
    fn areas_are_distinct_in_first_seen_order() {
        let areas = areas();
        assert_eq!(areas[0], "Grundläggande koncept");
        assert_eq!(areas[1], "Systemutveckling");
        let mut sorted = areas.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), areas.len());
    }

    #[test]
    fn filter_by_query_and_area() {
        assert_eq!(filter("", ALL_AREAS).len(), CHAPTERS.len());

        let security = filter("", "Säkerhet");
        assert_eq!(security.len(), 3);

        let hits = filter("MOLN", ALL_AREAS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "06");

        let hits = filter("GitOps", ALL_AREAS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "07");

        assert!(filter("moln", "Säkerhet").is_empty());
    }

    #[test]
    fn query_matches_summary_only_text() {
        let (_, chapter) = find("04").unwrap();
        assert!(!chapter.title.to_lowercase().contains("arkitekturbeslut"));
        let hits = filter("arkitekturbeslut", ALL_AREAS);
        assert_eq!(hits.iter().map(|c| c.id).collect::<Vec<_>>(), ["04"]);
    }

    #[test]
    fn every_chapter_has_summary_and_topics() {
        for chapter in &CHAPTERS {
            assert!(!chapter.summary.is_empty(), "{}", chapter.id);
            assert!(!chapter.key_topics.is_empty(), "{}", chapter.id);
        }
    }

    #[test]
    fn suggest_close_ids() {
        assert_eq!(suggest("4"), Some("04"));
        assert_eq!(suggest("271"), Some("27"));
        assert_eq!(suggest("zzz"), None);
    }
}
