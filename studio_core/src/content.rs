//! Copy and catalog data rendered by the landing page sections.

/// Headline rotation in the hero, one every [`crate::rotation::HERO_ROTATE_INTERVAL`].
pub static HERO_CAPABILITIES: [&str; 32] = [
    "Event Coverage",
    "AI Product Videos",
    "Launch Campaigns",
    "Monthly Partnerships",
    "Personal Brand Videos",
    "Cinematic AI Clips",
    "Talking Head Avatars",
    "Professional Editing",
    "Long-Form to Clips",
    "On-Location Filming",
    "Stream Setup",
    "UGC Content Creation",
    "Podcast Production",
    "Full Recording Services",
    "Ambassador Programs",
    "Product Explainers",
    "Conference Activations",
    "Social Media Packages",
    "Podcast Repurposing",
    "Multi-Camera Production",
    "Content Strategy",
    "Platform Adaptation",
    "Documentary Storytelling",
    "Founder Interview Series",
    "Text-to-Video Content",
    "Hybrid AI + Live-Action",
    "Green Screen Filming",
    "Quarterly Strategy",
    "Brand Narrative Films",
    "Seasonal Campaigns",
    "Media Audits",
    "Narrative Development",
];

pub static TICKER_CAPABILITIES: [&str; 33] = [
    "Event Coverage & Recaps",
    "AI Product Videos",
    "Product Videos",
    "Launch Campaign Content",
    "Monthly Media Partnership",
    "Personal Brand Videos",
    "Cinematic AI Clips",
    "AI Video Generation",
    "Talking Head Avatars",
    "Editing Your Footage",
    "Creating Clips from Long-Form",
    "On-Location Filming",
    "Stream Setup",
    "UGC Content Creation",
    "Podcast Production",
    "Full Recording Services",
    "Ambassador Content Programs",
    "Product Explainer Videos",
    "Conference Activations",
    "Social Media Packages",
    "Podcast Repurposing",
    "Multi-Camera Production",
    "Content Strategy",
    "Platform Adaptation",
    "Documentary Storytelling",
    "Founder Interview Series",
    "Text-to-Video Content",
    "Hybrid AI + Live-Action",
    "Green Screen Filming",
    "Quarterly Strategy",
    "Brand Narrative Films",
    "Seasonal Campaigns",
    "Media Audits",
];

/// The ticker list twice in a row; translating the strip by -50% loops it seamlessly.
pub fn ticker_sequence() -> impl Iterator<Item = &'static str> {
    TICKER_CAPABILITIES
        .iter()
        .chain(TICKER_CAPABILITIES.iter())
        .copied()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 3] = [
    Stat {
        value: "500+",
        label: "Videos Produced",
    },
    Stat {
        value: "5",
        label: "Years in Crypto",
    },
    Stat {
        value: "Solana",
        label: "Ecosystem Trusted",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    /// Icon key, rendered as a CSS class (`icon-<key>`)
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub services: &'static [Service],
}

const fn svc(title: &'static str, icon: &'static str) -> Service {
    Service { title, icon }
}

pub static SERVICE_CATEGORIES: [ServiceCategory; 4] = [
    ServiceCategory {
        name: "Video Production",
        icon: "video",
        services: &[
            svc("Event coverage & recap videos", "camera"),
            svc("AI product videos", "sparkles"),
            svc("Product videos", "play"),
            svc("Personal brand videos for founders", "mic"),
            svc("Cinematic AI clips & AI video generation", "film"),
            svc("Talking head avatars", "users"),
            svc("On-location filming (we travel to you)", "globe"),
            svc("Multi-camera production", "layers"),
            svc("Documentary-style storytelling", "book"),
            svc("Green screen setup and filming", "video"),
            svc("Brand narrative films", "award"),
        ],
    },
    ServiceCategory {
        name: "Content & Strategy",
        icon: "target",
        services: &[
            svc("Launch campaign content", "rocket"),
            svc("Content strategy and narrative development", "file"),
            svc("Platform-specific content adaptation", "megaphone"),
            svc("Quarterly content strategy", "calendar"),
            svc("Seasonal campaign series", "trending"),
            svc("Media audit and positioning", "chart"),
            svc("Social media content packages", "message"),
        ],
    },
    ServiceCategory {
        name: "Editing & Post",
        icon: "edit",
        services: &[
            svc("Editing your existing footage", "scissors"),
            svc("Creating clips from long-form content", "scissors"),
            svc("Repurposing podcast episodes", "zap"),
            svc("Text-to-video content", "pen"),
            svc("Hybrid AI + live-action content", "sparkles"),
        ],
    },
    ServiceCategory {
        name: "Ongoing Partnership",
        icon: "handshake",
        services: &[
            svc("Monthly media partnership", "calendar"),
            svc("Help you start a podcast", "mic"),
            svc("Record you talking (we handle everything)", "video"),
            svc("Ambassador content programs", "users"),
            svc("Setting up your stream", "play"),
            svc("UGC content creation", "camera"),
            svc("Conference activations", "megaphone"),
            svc("Founder interview series", "mic"),
        ],
    },
];

pub const STUDIO_NAME: &str = "ATH Creative Studio";

pub const PROBLEM_PARAGRAPHS: [&str; 2] = [
    "You work hard to generate hype, but between shipping code and managing communities, the narrative often breaks.",
    "Silence doesn't just breed FUD; it drains liquidity. When communication drops, potential investors become passive observers. You are letting your most valuable asset (attention) leak away to louder, less capable competitors.",
];
