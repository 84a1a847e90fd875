pub const PROFILE_IMAGE: &str = "/assets/profile-image.png";

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    pub short_summary: &'static str,
    pub tagline: &'static str,
    pub availability: &'static str,
    pub copyright_year: u16,
}

pub static PROFILE: Profile = Profile {
    name: "Ali Haider",
    role: "Full Stack MERN Developer & AI Chatbot Specialist",
    summary: "Hi, I'm Ali Haider, a Full Stack MERN Developer and AI Chatbot Automation Specialist with 1 year of experience. I build modern, scalable web applications and smart AI-driven chatbot solutions that improve user experience and automate business processes.",
    short_summary: "Hi, I'm Ali Haider, a Full Stack MERN Developer and AI Chatbot Automation Specialist with 1 year of experience. I build modern, scalable web applications and smart AI-driven chatbot solutions.",
    tagline: "Full Stack MERN Developer & AI Chatbot Specialist. Building modern, scalable web applications and intelligent automation solutions.",
    availability: "Available for freelance work",
    copyright_year: 2025,
};

pub struct Headline {
    pub line1: &'static str,
    pub line2: &'static str,
}

pub static HEADLINES: [Headline; 2] = [
    Headline {
        line1: "FULL STACK",
        line2: "DEVELOPER",
    },
    Headline {
        line1: "AI CHAT",
        line2: "BOT",
    },
];

pub struct Skill {
    pub index: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub color: &'static str,
}

pub static SKILLS: [Skill; 6] = [
    Skill {
        index: "01",
        title: "FRONTEND",
        subtitle: "React, Next.js, TypeScript",
        color: "#61DAFB",
    },
    Skill {
        index: "02",
        title: "BACKEND",
        subtitle: "Node.js, APIs",
        color: "#68A063",
    },
    Skill {
        index: "03",
        title: "STYLING",
        subtitle: "Tailwind, CSS",
        color: "#06B6D4",
    },
    Skill {
        index: "04",
        title: "DATABASE",
        subtitle: "MongoDB, PostgreSQL",
        color: "#4DB33D",
    },
    Skill {
        index: "05",
        title: "TOOLS",
        subtitle: "Git, Docker",
        color: "#F05032",
    },
    Skill {
        index: "06",
        title: "MOBILE",
        subtitle: "React Native",
        color: "#61DAFB",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat {
        value: "1",
        label: "Year Experience",
        icon: "⚡",
    },
    Stat {
        value: "15+",
        label: "Projects Done",
        icon: "🚀",
    },
    Stat {
        value: "10+",
        label: "Happy Clients",
        icon: "😊",
    },
    Stat {
        value: "24/7",
        label: "Support",
        icon: "🔧",
    },
];

pub static ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm Ali Haider, a passionate Full Stack MERN Developer and AI Chatbot Automation Specialist. Currently pursuing my Bachelor's in Computer Science, I combine academic knowledge with 1 year of hands-on experience to create modern, scalable web applications and intelligent chatbot solutions that enhance user experience and streamline business processes.",
    "I love turning complex problems into simple, beautiful solutions. When I'm not coding or studying, you'll find me exploring new technologies, contributing to open-source projects, or learning about the latest trends in AI and web development. My academic foundation in computer science helps me approach development challenges with both theoretical understanding and practical expertise.",
];

pub struct Experience {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static EXPERIENCES: [Experience; 3] = [
    Experience {
        title: "Full Stack Developer",
        organization: "Metosys",
        period: "2025 - 2026",
        description: "Building modern web applications using MERN stack with focus on performance and user experience",
        icon: "💻",
    },
    Experience {
        title: "AI Chatbot Specialist",
        organization: "Various Clients",
        period: "2025 - Present",
        description: "Creating intelligent chatbot solutions for businesses to automate customer support",
        icon: "🤖",
    },
    Experience {
        title: "Web Developer",
        organization: "Personal Projects",
        period: "2025 - 2026",
        description: "Learning and building various web applications to master modern technologies",
        icon: "🚀",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub icon: &'static str,
    pub image_url: &'static str,
    pub side: Side,
}

/// Technologies shown on a card before the rest collapse into a `+N` chip.
pub const VISIBLE_TECHNOLOGIES: usize = 3;

impl Project {
    pub fn visible_technologies(&self) -> &'static [&'static str] {
        &self.technologies[..self.technologies.len().min(VISIBLE_TECHNOLOGIES)]
    }

    pub fn hidden_technology_count(&self) -> usize {
        self.technologies.len().saturating_sub(VISIBLE_TECHNOLOGIES)
    }
}

pub static PROJECTS: [Project; 8] = [
    Project {
        id: 1,
        title: "E-Commerce Business Website",
        description: "Complete e-commerce platform with product catalog, shopping cart, payment gateway, order management, and admin dashboard",
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "Express"],
        icon: "🛒",
        image_url: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=400&h=250&fit=crop&crop=center",
        side: Side::Left,
    },
    Project {
        id: 2,
        title: "Full Business Website",
        description: "Professional business website with CMS, contact forms, service pages, testimonials, and SEO optimization",
        technologies: &["Next.js", "TypeScript", "Tailwind", "Prisma", "PostgreSQL"],
        icon: "🏢",
        image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=250&fit=crop&crop=center",
        side: Side::Right,
    },
    Project {
        id: 3,
        title: "AI ChatBot like WhatsApp",
        description: "Intelligent messaging system with AI responses, real-time chat, file sharing, and WhatsApp-like interface",
        technologies: &["React", "Socket.io", "OpenAI", "Node.js", "MongoDB"],
        icon: "💬",
        image_url: "https://images.unsplash.com/photo-1587560699334-cc4ff634909a?w=400&h=250&fit=crop&crop=center",
        side: Side::Left,
    },
    Project {
        id: 4,
        title: "Portfolio Websites",
        description: "Modern portfolio websites with 3D animations, responsive design, and interactive elements for professionals",
        technologies: &["Next.js", "Framer Motion", "Three.js", "Tailwind"],
        icon: "🎨",
        image_url: "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d?w=400&h=250&fit=crop&crop=center",
        side: Side::Right,
    },
    Project {
        id: 5,
        title: "Food Delivery Website",
        description: "Complete food ordering platform with restaurant management, menu system, order tracking, and delivery integration",
        technologies: &["MERN", "Redux", "Cloudinary", "Stripe", "Google Maps"],
        icon: "🍕",
        image_url: "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=400&h=250&fit=crop&crop=center",
        side: Side::Left,
    },
    Project {
        id: 6,
        title: "Mobile App Development",
        description: "Cross-platform mobile applications with native performance, push notifications, and offline capabilities",
        technologies: &["React Native", "Expo", "Firebase", "Redux Toolkit"],
        icon: "📱",
        image_url: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=400&h=250&fit=crop&crop=center",
        side: Side::Right,
    },
    Project {
        id: 7,
        title: "Invoice Generator Web App",
        description: "Professional invoice generation system with PDF export, client management, and payment tracking",
        technologies: &["React", "Node.js", "PDF-lib", "MongoDB", "Express"],
        icon: "📄",
        image_url: "https://images.unsplash.com/photo-1554224155-6726b3ff858f?w=400&h=250&fit=crop&crop=center",
        side: Side::Left,
    },
    Project {
        id: 8,
        title: "RBAC System Application",
        description: "Role-Based Access Control system with user management, permissions, and secure authentication",
        technologies: &["Next.js", "JWT", "Prisma", "PostgreSQL", "NextAuth"],
        icon: "🔐",
        image_url: "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=400&h=250&fit=crop&crop=center",
        side: Side::Right,
    },
];

/// Height of one project row on the timeline spine.
pub const PROJECT_ROW_HEIGHT_PX: usize = 240;

pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub link: Option<&'static str>,
}

pub static CONTACT_METHODS: [ContactMethod; 4] = [
    ContactMethod {
        label: "Email",
        value: "aleehaider045@gmail.com",
        description: "Send me an email anytime",
        icon: "📧",
        link: Some("mailto:aleehaider045@gmail.com"),
    },
    ContactMethod {
        label: "Phone",
        value: "+923144202998",
        description: "Call me for urgent matters",
        icon: "📱",
        link: Some("tel:+923144202998"),
    },
    ContactMethod {
        label: "Location",
        value: "Lahore, Pakistan",
        description: "Available for local meetings",
        icon: "📍",
        link: None,
    },
    ContactMethod {
        label: "LinkedIn",
        value: "www.linkedin.com/in/alihaider-dev",
        description: "Connect with me professionally",
        icon: "💼",
        link: Some("https://www.linkedin.com/in/alihaider-dev"),
    },
];

pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/alihaider-dev",
    },
    SocialLink {
        name: "Email",
        url: "mailto:aleehaider045@gmail.com",
    },
    SocialLink {
        name: "Phone",
        url: "tel:+923144202998",
    },
];

pub static TECHNOLOGIES: [&str; 10] = [
    "React",
    "Next.js",
    "TypeScript",
    "Node.js",
    "MongoDB",
    "Express",
    "Tailwind CSS",
    "Framer Motion",
    "AI/ML",
    "MERN Stack",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::LinkKind;

    #[test]
    fn projects_alternate_sides_with_unique_ids() {
        for (index, project) in PROJECTS.iter().enumerate() {
            let expected = if index % 2 == 0 { Side::Left } else { Side::Right };
            assert_eq!(project.side, expected, "{}", project.title);
            assert_eq!(project.id as usize, index + 1);
        }
    }

    #[test]
    fn project_cards_collapse_extra_technologies() {
        let commerce = &PROJECTS[0];
        assert_eq!(commerce.visible_technologies(), &["React", "Node.js", "MongoDB"]);
        assert_eq!(commerce.hidden_technology_count(), 2);

        let mobile = &PROJECTS[5];
        assert_eq!(mobile.visible_technologies().len(), 3);
        assert_eq!(mobile.hidden_technology_count(), 1);
    }

    #[test]
    fn contact_links_use_expected_schemes() {
        let kinds: Vec<_> = CONTACT_METHODS
            .iter()
            .map(|method| method.link.map(LinkKind::classify))
            .collect();

        assert_eq!(
            kinds,
            vec![
                Some(LinkKind::Mail),
                Some(LinkKind::Phone),
                None,
                Some(LinkKind::External),
            ]
        );
    }

    #[test]
    fn skills_are_numbered_in_order_with_hex_colors() {
        for (index, skill) in SKILLS.iter().enumerate() {
            assert_eq!(skill.index, format!("{:02}", index + 1));
            assert!(skill.color.starts_with('#') && skill.color.len() == 7);
        }
    }
}
