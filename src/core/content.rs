//! Static page content — everything the sections render is data here, so
//! the widgets stay purely presentational.

/// Accent palette carried over from the site design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Orange,
    Green,
}

/// The page sections, in document order.  Also the nav targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Work,
    Projects,
    Skills,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: &[Section] = &[
        Section::Hero,
        Section::About,
        Section::Work,
        Section::Projects,
        Section::Skills,
        Section::Contact,
        Section::Footer,
    ];

    /// Entries shown in the header nav (the hero and footer are not targets).
    pub const NAV: &[Section] = &[Section::Work, Section::About, Section::Skills, Section::Contact];

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Work => "Work",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
            Section::Footer => "Footer",
        }
    }
}

pub struct TimelineEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

/// "My Journey" — drives the scroll-synchronized timeline.
pub const TIMELINE: &[TimelineEvent] = &[
    TimelineEvent {
        year: "2023",
        title: "Started CS Journey",
        description: "Began exploring programming with Python and discovered the power of automation.",
        accent: Accent::Green,
    },
    TimelineEvent {
        year: "2024",
        title: "First AI Project",
        description: "Built my first machine learning model for text classification, sparking my passion for AI.",
        accent: Accent::Orange,
    },
    TimelineEvent {
        year: "2024",
        title: "Full Stack Development",
        description: "Mastered React, Next.js, and FastAPI while building TrendWise and SmartChat applications.",
        accent: Accent::Green,
    },
    TimelineEvent {
        year: "2025",
        title: "IBM Hackathon Participant",
        description: "Created AccessMap - AI-enhanced accessibility mapping tool, recognized at IBM showcase.",
        accent: Accent::Orange,
    },
    TimelineEvent {
        year: "2025",
        title: "Chairperson – Technova (College Technical Festival)",
        description: "Led a team of 70+ members to organize a college-wide technical fest with 1800+ participants.",
        accent: Accent::Green,
    },
];

pub struct CaseStudy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub problem: &'static str,
    pub approach: &'static str,
    pub impact: &'static str,
    pub tech: &'static [&'static str],
    pub demo_url: &'static str,
    pub github_url: &'static str,
    pub accent: Accent,
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "ClauseIQ",
        subtitle: "AI Legal Document Analysis",
        problem: "Contracts are dense, and non-experts miss critical clauses.",
        approach: "FastAPI + React pipeline using PyMuPDF for extraction and Mistral via OpenRouter for clause classification and plain-English explanation, with multi-agent verification and risk scoring.",
        impact: "~5s average analysis time; user-facing demo at clause-iq.vercel.app.",
        tech: &["React", "FastAPI", "PyMuPDF", "OpenRouter", "Tailwind", "Vercel", "Render"],
        demo_url: "https://clause-iq.vercel.app/",
        github_url: "https://github.com/Asmith-M/ClauseIQ",
        accent: Accent::Orange,
    },
    CaseStudy {
        title: "TrendWise",
        subtitle: "AI SEO Blog Generator",
        problem: "Content creators struggle to consistently generate SEO-friendly posts.",
        approach: "Next.js app with OpenRouter for AI generation, MongoDB persistence, and NextAuth Google OAuth.",
        impact: "Generates SEO-ready drafts instantly; live demo at trend-wise-nu.vercel.app.",
        tech: &["Next.js", "Tailwind", "MongoDB", "OpenRouter", "Vercel"],
        demo_url: "https://trend-wise-nu.vercel.app",
        github_url: "https://github.com/Asmith-M/TrendWise",
        accent: Accent::Green,
    },
    CaseStudy {
        title: "AccessMap",
        subtitle: "Accessibility-Focused Navigation",
        problem: "Urban navigation is challenging for differently-abled users due to lack of accessibility information.",
        approach: "IBM Hackathon entry — an accessibility-focused map application to improve urban navigation for differently-abled users.",
        impact: "Enhanced navigation with accessibility features and barrier identification for inclusive urban mobility.",
        tech: &["React", "Node.js", "Google Maps API", "MongoDB", "Express"],
        demo_url: "",
        github_url: "https://github.com/0Ankit0-0/Access-Map0",
        accent: Accent::Green,
    },
];

pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub accent: Accent,
    pub coming_soon: bool,
}

pub const OTHER_PROJECTS: &[Project] = &[
    Project {
        title: "SmartChat",
        subtitle: "Dual AI-powered Chatbots",
        description: "AI-powered chatbots for customer support and sales, powered by OpenAI and LangChain.",
        tech: &["React", "Node.js", "Express", "MongoDB", "OpenRouter API", "JWT"],
        accent: Accent::Green,
        coming_soon: false,
    },
    Project {
        title: "Signature Pad",
        subtitle: "Digital Signing Tool",
        description: "Clean, responsive digital signature capture with export functionality and customizable styling.",
        tech: &["React", "HTML5 Canvas", "JavaScript", "CSS3", "Netlify"],
        accent: Accent::Orange,
        coming_soon: false,
    },
    Project {
        title: "PPTQ",
        subtitle: "Presentation Quiz Tool",
        description: "Interactive quiz platform for presentations with real-time scoring and audience engagement.",
        tech: &["React", "Next.js", "Tailwind"],
        accent: Accent::Green,
        coming_soon: false,
    },
    Project {
        title: "Noetic Vault",
        subtitle: "Coming Soon",
        description: "AI-powered knowledge management system with intelligent categorization and retrieval.",
        tech: &["React", "FastAPI", "Vector DB", "OpenAI"],
        accent: Accent::Orange,
        coming_soon: true,
    },
];

pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, drives the gauge width.
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub accent: Accent,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        accent: Accent::Green,
        skills: &[
            Skill { name: "React/Next.js", level: 85 },
            Skill { name: "JavaScript", level: 80 },
            Skill { name: "Tailwind CSS", level: 92 },
            Skill { name: "Framer Motion", level: 70 },
        ],
    },
    SkillCategory {
        title: "Backend & APIs",
        accent: Accent::Orange,
        skills: &[
            Skill { name: "Node.js", level: 88 },
            Skill { name: "Python/FastAPI", level: 85 },
            Skill { name: "REST/GraphQL", level: 90 },
            Skill { name: "WebSockets", level: 80 },
        ],
    },
    SkillCategory {
        title: "AI & Machine Learning",
        accent: Accent::Green,
        skills: &[
            Skill { name: "API creation", level: 75 },
            Skill { name: "API integration", level: 70 },
            Skill { name: "LangChain", level: 65 },
            Skill { name: "Prompt Engineering", level: 80 },
        ],
    },
    SkillCategory {
        title: "Database & Cloud",
        accent: Accent::Orange,
        skills: &[
            Skill { name: "PostgreSQL", level: 85 },
            Skill { name: "MongoDB", level: 80 },
            Skill { name: "SQLite", level: 75 },
            Skill { name: "Vercel/AWS", level: 85 },
        ],
    },
    SkillCategory {
        title: "Tools & Workflow",
        accent: Accent::Orange,
        skills: &[
            Skill { name: "Git/GitHub", level: 75 },
            Skill { name: "Postman", level: 70 },
            Skill { name: "N8N", level: 65 },
            Skill { name: "Slack", level: 60 },
        ],
    },
];

/// Risk severity in the clause-analysis demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::High => "HIGH RISK",
        }
    }
}

pub struct ClauseRisk {
    pub level: RiskLevel,
    pub text: &'static str,
}

pub struct SampleClause {
    pub title: &'static str,
    pub text: &'static str,
    pub risks: &'static [ClauseRisk],
    pub suggestions: &'static [&'static str],
}

/// Canned contract clauses for the ClauseIQ demo popup.
pub const SAMPLE_CLAUSES: &[SampleClause] = &[
    SampleClause {
        title: "Termination Clause",
        text: "Either party may terminate this agreement with 30 days written notice. Upon termination, all confidential information must be returned within 5 business days.",
        risks: &[
            ClauseRisk {
                level: RiskLevel::Medium,
                text: "Short notice period may not allow adequate transition time",
            },
            ClauseRisk {
                level: RiskLevel::Low,
                text: "Confidential information return timeline is reasonable",
            },
        ],
        suggestions: &[
            "Consider extending notice period to 60 days for better transition planning",
            "Add specific procedures for confidential information return",
        ],
    },
    SampleClause {
        title: "Liability Limitation",
        text: "In no event shall either party be liable for any indirect, incidental, special, or consequential damages, regardless of the form of action or the basis of the claim.",
        risks: &[
            ClauseRisk {
                level: RiskLevel::High,
                text: "Broad liability exclusion may not be enforceable in all jurisdictions",
            },
            ClauseRisk {
                level: RiskLevel::Medium,
                text: "No cap on direct damages specified",
            },
        ],
        suggestions: &[
            "Add specific monetary cap on direct damages",
            "Include carve-outs for gross negligence and willful misconduct",
        ],
    },
];

pub struct DemoStep {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

/// The rotating "how I work" widget in the hero section.
pub const DEMO_STEPS: &[DemoStep] = &[
    DemoStep {
        title: "Creative Builder",
        description: "Building cool ideas into reality",
        accent: Accent::Orange,
    },
    DemoStep {
        title: "Full-Stack Development",
        description: "End-to-end application development",
        accent: Accent::Green,
    },
    DemoStep {
        title: "Clear Communication",
        description: "Explaining complex things simply",
        accent: Accent::Orange,
    },
];

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", url: "https://github.com/Asmith-M" },
    SocialLink { name: "LinkedIn", url: "https://www.linkedin.com/in/asmith-mahendrakar-955204311" },
    SocialLink { name: "Twitter", url: "https://x.com/asmith__M" },
];

pub const OWNER_NAME: &str = "Asmith Mahendrakar";

/// Shown in the send-failure notification so visitors always have a way in.
pub const FALLBACK_EMAIL: &str = "asmithmahendrakar@gmail.com";

/// Static asset: downloadable résumé, referenced by path only.
pub const RESUME_PATH: &str = "assets/Asmith_Mahendrakar_Resume.pdf";
