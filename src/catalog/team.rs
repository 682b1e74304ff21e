//! The AI agent team that produces the book.

use serde::Serialize;

/// A specialist role in the agent team.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Role {
    pub name: &'static str,
    pub focus: &'static str,
    pub description: &'static str,
    pub responsibilities: &'static [&'static str],
}

/// A recurring team meeting.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ceremony {
    pub name: &'static str,
    pub participants: &'static str,
    pub frequency: &'static str,
    pub outcome: &'static str,
}

/// A recurring report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Report {
    pub title: &'static str,
    pub description: &'static str,
}

/// A communication channel.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Channel {
    pub name: &'static str,
    pub purpose: &'static str,
    pub tools: &'static str,
}

pub static ROLES: [Role; 8] = [
    Role {
        name: "Project Manager",
        focus: "Central agent",
        description: "Översätter projektägarens mål till konkreta sprintmål, prioriterar backloggen och koordinerar specialistrollerna.",
        responsibilities: &[
            "Bryter ned mål till sprintplaner och uppgifter",
            "Koordinerar dagliga synkar och eskalerar blockerare",
            "Sammanställer status, risker och rekommendationer till projektägaren",
        ],
    },
    Role {
        name: "Architect",
        focus: "Systemstruktur",
        description: "Säkerställer skalbar och robust systemdesign genom arkitekturprinciper, riktlinjer och visualiseringar.",
        responsibilities: &[
            "Definierar referensarkitekturer och tekniska riktlinjer",
            "Granskar tekniska förslag från Requirements Analyst och Developer",
            "Samarbetar med Graphic Designer för arkitekturdiagram",
        ],
    },
    Role {
        name: "Requirements Analyst",
        focus: "Kravhantering",
        description: "Fångar, prioriterar och spårar funktionella och icke-funktionella krav genom hela leveransflödet.",
        responsibilities: &[
            "Dokumenterar user stories, acceptanskriterier och prioriteringar",
            "Säkerställer spårbarhet mellan krav, design, implementation och test",
            "Genomför gap-analyser och uppdaterar kravbasen vid förändringar",
        ],
    },
    Role {
        name: "Designer",
        focus: "UI/UX",
        description: "Tar fram användarupplevelser, wireframes och interaktionsflöden som harmoniserar med varumärkesriktlinjer.",
        responsibilities: &[
            "Skapar wireframes och interaktionsflöden",
            "Synkar med Developer och Quality Control för att minimera iterationer",
            "Dokumenterar designbeslut och komponentbibliotek",
        ],
    },
    Role {
        name: "Developer",
        focus: "Implementation",
        description: "Implementerar funktionalitet enligt arkitektur, design och kodstandarder med fokus på kvalitet och automation.",
        responsibilities: &[
            "Levererar kod och tester i små, granskbara leveranser",
            "Integrerar lösningar med CI/CD-pipelines",
            "Rapporterar tekniska risker och hinder",
        ],
    },
    Role {
        name: "Quality Control",
        focus: "Kvalitetssäkring",
        description: "Etablerar teststrategi, driver kvalitetsgranskningar och följer upp nyckeltal för leveranskvalitet.",
        responsibilities: &[
            "Underhåller enhetstest, integrationstest och e2e-test",
            "Genomför granskningar av kod, dokumentation och leveranser",
            "Rapporterar testresultat, defekter och kvalitetsindikatorer",
        ],
    },
    Role {
        name: "Editor",
        focus: "Dokumentation",
        description: "Förvaltar dokumentationens struktur, språkstandard och versionering i hela projektet.",
        responsibilities: &[
            "Uppdaterar README, API-specifikationer och release-noteringar",
            "Synkroniserar med krav- och designroller för att hålla artefakter aktuella",
            "Publicerar sprintanteckningar och kunskapsbasmaterial",
        ],
    },
    Role {
        name: "Graphic Designer",
        focus: "Visualisering",
        description: "Producerar diagram och grafiska element som stödjer arkitektur- och designkommunikation.",
        responsibilities: &[
            "Skapar visuella diagram i Mermaid eller PlantUML",
            "Säkerställer korrekthet i samarbete med Architect och Editor",
            "Håller ett versionshanterat bibliotek av grafiska komponenter",
        ],
    },
];

pub static WORKFLOW_STEPS: [&str; 4] = [
    "Projektägaren definierar mål, prioriteringar och accepterar leveranser.",
    "Project Manager bryter ned mål till uppgifter och koordinerar teamet.",
    "Specialistroller producerar artefakter och rapporterar status.",
    "Project Manager konsoliderar status, kvalitet och rekommendationer till projektägaren.",
];

pub static CEREMONIES: [Ceremony; 4] = [
    Ceremony {
        name: "Sprintplanering",
        participants: "Projektägare, Project Manager, alla specialistroller",
        frequency: "Varannan vecka",
        outcome: "Sprintmål, åtaganden och uppdaterad backlog",
    },
    Ceremony {
        name: "Daglig synk",
        participants: "Project Manager och relevanta specialistroller",
        frequency: "Dagligen",
        outcome: "Status, hinder och nästa steg",
    },
    Ceremony {
        name: "Demonstration",
        participants: "Project Manager, Developer, Designer, Quality Control",
        frequency: "Varannan vecka",
        outcome: "Leveransgenomgång och demo för projektägaren",
    },
    Ceremony {
        name: "Retrospektiv",
        participants: "Project Manager och hela teamet",
        frequency: "Varannan vecka",
        outcome: "Förbättringslista och åtgärdsplan",
    },
];

pub static REPORTING: [Report; 4] = [
    Report {
        title: "Dagliga statuskort",
        description: "Kort sammanfattning (max 5 punkter) från varje roll till Project Manager.",
    },
    Report {
        title: "Veckovisa kvalitetsrapporter",
        description: "Quality Control levererar testresultat, defekter och kvalitetsindikatorer.",
    },
    Report {
        title: "Sprintrapport",
        description: "Project Manager sammanställer leveranser, KPI:er och rekommenderade beslut.",
    },
    Report {
        title: "Dokumentationslogg",
        description: "Editor uppdaterar versionslogg i docs/README.md för kunskapsspårning.",
    },
];

pub static CHANNELS: [Channel; 4] = [
    Channel {
        name: "Projektkanal",
        purpose: "Övergripande information, sprintmål och beslut",
        tools: "Slack eller Microsoft Teams",
    },
    Channel {
        name: "Designforum",
        purpose: "UI/UX-iterationer och diagramfeedback",
        tools: "FigJam eller Miro",
    },
    Channel {
        name: "Tekniksync",
        purpose: "Kod- och arkitekturfrågor",
        tools: "GitHub Projects eller Linear",
    },
    Channel {
        name: "Kvalitetsrapportering",
        purpose: "Testresultat och releasegodkännanden",
        tools: "Notion eller Confluence",
    },
];

pub static KPIS: [&str; 4] = [
    "Ledtid från krav till release under två sprintar",
    "Testtäckning för kritiska komponenter på minst 85%",
    "Dokumentationsuppdateringar inom 24 timmar efter beslut",
    "Färre än tre blockerare per sprint",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_responsibilities() {
        for role in &ROLES {
            assert!(!role.responsibilities.is_empty(), "{} has none", role.name);
        }
    }

    #[test]
    fn project_manager_leads() {
        assert_eq!(ROLES[0].name, "Project Manager");
        assert!(WORKFLOW_STEPS.iter().any(|s| s.contains("Project Manager")));
    }
}
