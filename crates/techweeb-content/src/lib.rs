//! Static page content for the techweeb portfolio.
//!
//! Everything a page renders that is not animation lives here: the profile
//! header, the experience timeline, project cards, skills, languages,
//! education and the intro greeting list.

use techweeb_core::Greeting;

/// Site owner profile.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub summary: &'static str,
}

/// One entry of the professional journey timeline.
#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub date: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub description: &'static str,
}

/// One project card.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: &'static str,
    pub link: &'static str,
}

/// Spoken language and proficiency.
#[derive(Debug, Clone, Copy)]
pub struct Language {
    pub name: &'static str,
    pub level: &'static str,
}

/// One education entry.
#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub years: &'static str,
    pub degree: &'static str,
    pub field: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "LONG NGUYEN",
    brand: "TheTechWeeb",
    tagline: "Crafting engaging front-end experiences for 3+ years. \
              Full-stack capable, with a passion for cloud and DevOps.",
    email: "ngytrhoanglong61@gmail.com",
    summary: "Full-stack developer with 3+ years of experience building web2 and \
              web3 applications. Specializing in Next.js, React, Python, and \
              Tailwind CSS, with proficiency in containerization (Docker) and \
              Kubernetes. Passionate about problem-solving and continuous \
              learning, with a keen interest in exploring DevOps roles.",
};

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        date: "Mar 2024 - Present",
        title: "Core Engineer",
        company: "Gear Indigo",
        description: "Core engineer in a startup team, planning, design and \
                      implement core features of Gear Indigo (an AI-based business \
                      starter) including svg editor, chat function, streaming data, \
                      directory builder for reverse engineering, and product \
                      deployment.",
    },
    Experience {
        date: "Jul 2024 - Feb 2025",
        title: "Middle Engineer",
        company: "API Integration Solutions",
        description: "Developed API integration solutions for mapping legacy \
                      systems to modern APIs and enterprise solutions. Specialized \
                      in conversion mapping functionality for external ecosystems \
                      and SaaS tools integration.",
    },
    Experience {
        date: "Dec 2023 - Jul 2024",
        title: "Founding Developer",
        company: "Web3 Project",
        description: "One of two founding developers, built complete UI from \
                      scratch with blockchain (Ethereum) integration, handling \
                      real-time data, web3 transactions, and smart contract \
                      interactions.",
    },
    Experience {
        date: "Dec 2022 - Jun 2023",
        title: "Full Stack Developer",
        company: "Tech Solutions",
        description: "Leveraged GraphQL, Jest, WebRTC, and Kubernetes across \
                      diverse projects: desktop applications, OKR management \
                      systems, and architected a cloud-based surveillance solution \
                      on GCP. Configured Machine Learning API for camera systems \
                      using Python.",
    },
    Experience {
        date: "Jan 2022 - Jun 2023",
        title: "Frontend Developer",
        company: "Web Agency",
        description: "Crafted captivating web experiences from landing pages to \
                      web3 applications (Near, Polkadot) using React, Astro, \
                      Material UI, and Node.js. Developed backend solutions with \
                      Python. Delivered 2-3 projects monthly.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Gear Indigo",
        description: "An AI-based business starter that helps SMEs generate product \
                      ideas and code. Features include SVG editor, chat \
                      functionality, streaming data processing, and product \
                      deployment.",
        technologies: &["React", "Next.js", "TypeScript", "Node.js", "AI/ML", "Tailwind CSS"],
        category: "AI/Machine Learning",
        link: "https://gearindigo.app/",
    },
    Project {
        title: "Spine Finance",
        description: "A decentralized marketplace for lending and borrowing tokens \
                      with blockchain integration, real-time data handling, and \
                      web3 transaction processing.",
        technologies: &["React", "Web3.js", "Ethereum", "Solidity", "TypeScript", "Tailwind CSS"],
        category: "Blockchain",
        link: "https://app.spine.finance/",
    },
    Project {
        title: "ELMS Learning System",
        description: "A comprehensive learning management system with features for \
                      authentication, attendance tracking, meeting scheduling, \
                      class enrollment, and exam management.",
        technologies: &["React", "Next.js", "MongoDB", "Node.js", "Express", "Tailwind CSS"],
        category: "Full Stack",
        link: "https://elms-xi.vercel.app/",
    },
];

/// Work page filter categories: "All" plus each project category once,
/// in first-appearance order.
pub const CATEGORIES: &[&str] = &["All", "AI/Machine Learning", "Blockchain", "Full Stack"];

pub const SKILLS: &[&str] = &[
    "React.js",
    "Next.js",
    "Python",
    "Node.js",
    "MongoDB",
    "Angular.js",
    "Docker",
    "Kubernetes",
];

pub const LANGUAGES: &[Language] = &[
    Language {
        name: "English",
        level: "Professional (IELTS 7.0)",
    },
    Language {
        name: "Japanese",
        level: "Fluent",
    },
    Language {
        name: "Vietnamese",
        level: "Native",
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        years: "2019 - 2023",
        degree: "Bachelor's Degree",
        field: "Computer Science",
    },
    Education {
        years: "2021 - 2022",
        degree: "Specialized Training",
        field: "Web Development",
    },
];

/// Greetings cycled by the intro sequence, in display order.
pub const GREETINGS: &[Greeting] = &[
    Greeting {
        text: "Hello",
        lang: "en",
    },
    Greeting {
        text: "Bonjour",
        lang: "fr",
    },
    Greeting {
        text: "おい",
        lang: "ja",
    },
    Greeting {
        text: "Xin Chào",
        lang: "vi",
    },
    Greeting {
        text: "Guten tag",
        lang: "de",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_cover_all_projects() {
        for project in PROJECTS {
            assert!(
                CATEGORIES.contains(&project.category),
                "missing category {}",
                project.category
            );
        }
        assert_eq!(CATEGORIES[0], "All");
    }

    #[test]
    fn test_greeting_list() {
        assert_eq!(GREETINGS.len(), 5);
        assert_eq!(GREETINGS[0].text, "Hello");
        assert_eq!(GREETINGS[4].lang, "de");
    }
}
