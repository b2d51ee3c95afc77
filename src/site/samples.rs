use super::normalize::{RawLink, RawProfile};

/// A ready-made starter profile.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub id: &'static str,
    pub summary: &'static str,
    build: fn() -> RawProfile,
}

impl Sample {
    pub fn profile(&self) -> RawProfile {
        (self.build)()
    }
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "student",
        summary: "dark, blue, minimal editorial",
        build: student,
    },
    Sample {
        id: "professional",
        summary: "light, teal, split focus",
        build: professional,
    },
    Sample {
        id: "creator",
        summary: "dark, pink, bold statement",
        build: creator,
    },
    Sample {
        id: "writer",
        summary: "light, red, serif, minimal editorial",
        build: writer,
    },
    Sample {
        id: "minimalist",
        summary: "dark, green, mono, timeline story",
        build: minimalist,
    },
];

pub fn all() -> &'static [Sample] {
    SAMPLES
}

pub fn find(id: &str) -> Option<&'static Sample> {
    let id = id.trim();
    SAMPLES
        .iter()
        .find(|sample| sample.id.eq_ignore_ascii_case(id))
}

fn profile(
    name: &str,
    profession: &str,
    education: &str,
    bio: &str,
    style: [&str; 4],
    links: &[&str],
) -> RawProfile {
    let [theme, accent, font, layout] = style;
    RawProfile {
        full_name: Some(name.to_string()),
        profession: Some(profession.to_string()),
        education: Some(education.to_string()),
        bio: Some(bio.to_string()),
        profile_photo: None,
        theme: Some(theme.to_string()),
        accent_color: Some(accent.to_string()),
        font_style: Some(font.to_string()),
        layout_style: Some(layout.to_string()),
        custom_sections: links.iter().map(|title| RawLink::new(title, "#")).collect(),
    }
}

fn student() -> RawProfile {
    profile(
        "Alex Chen",
        "Computer Science Student",
        "B.S. Computer Science, Stanford University (2026)",
        "Passionate about building accessible web/mobile apps. Currently looking for summer internships in frontend development.",
        ["dark", "#2563eb", "inter", "minimal-editorial"],
        &["Resume PDF", "GitHub", "LinkedIn"],
    )
}

fn professional() -> RawProfile {
    profile(
        "Sarah Jenkins",
        "Senior Product Designer",
        "",
        "I craft digital products that humanize technology. 8+ years of experience leading design teams at rapid-growth startups.",
        ["light", "#0d9488", "inter", "split-focus"],
        &["Portfolio", "Book a Call", "Email Me"],
    )
}

fn creator() -> RawProfile {
    profile(
        "JAX",
        "Digital Artist & Streamer",
        "",
        "Creating 3D worlds and teaching blender on YouTube. Join the community ↯",
        ["dark", "#db2777", "inter", "bold-statement"],
        &["YouTube Channel", "Twitch Stream", "Shop Prints", "Discord Server"],
    )
}

fn writer() -> RawProfile {
    profile(
        "Elena Fisher",
        "Freelance Journalist",
        "",
        "Stories about culture, technology, and the future of work. Published in The Atlantic, Wired, and The Verge.",
        ["light", "#dc2626", "crimson", "minimal-editorial"],
        &["Selected Work", "Substack Newsletter", "Twitter / X"],
    )
}

fn minimalist() -> RawProfile {
    profile(
        "David R.",
        "Developer",
        "",
        "shipping code. building systems. exploring ai.",
        ["dark", "#16a34a", "mono", "timeline-story"],
        &["projects", "notes", "contact"],
    )
}
