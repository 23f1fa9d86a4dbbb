pub struct SkillGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILL_GROUPS: [SkillGroup; 7] = [
    SkillGroup {
        title: "Frontend Web Development",
        icon: "</>",
        accent: "linear-gradient(90deg, #3b82f6, #06b6d4)",
        skills: &["ReactJS", "HTML/CSS", "jQuery", "PHP"],
    },
    SkillGroup {
        title: "Backend Development",
        icon: "🗄",
        accent: "linear-gradient(90deg, #22c55e, #10b981)",
        skills: &["NodeJS", "Springboot", "Python/Django", "Postman", "C/C++", "PHP/Laravel"],
    },
    SkillGroup {
        title: "Data Science",
        icon: "⚡",
        accent: "linear-gradient(90deg, #eab308, #f97316)",
        skills: &["scikit-learn", "pandas", "matplotlib"],
    },
    SkillGroup {
        title: "Adobe Creative",
        icon: "🎨",
        accent: "linear-gradient(90deg, #a855f7, #ec4899)",
        skills: &["Photoshop", "Illustrator", "InDesign", "Fireworks"],
    },
    SkillGroup {
        title: "Mobile Programming",
        icon: "📱",
        accent: "linear-gradient(90deg, #f97316, #ef4444)",
        skills: &["Android - Java", "React Native"],
    },
    SkillGroup {
        title: "Content Management Systems",
        icon: "🌐",
        accent: "linear-gradient(90deg, #6366f1, #a855f7)",
        skills: &["Wordpress", "Joomla", "Mailchimp"],
    },
    SkillGroup {
        title: "Database Management",
        icon: "🗄",
        accent: "linear-gradient(90deg, #ef4444, #f43f5e)",
        skills: &["MySQL", "Oracle", "MsSQL", "MongoDB"],
    },
];

pub static SERVICES: [&str; 6] = [
    "Full-stack web development",
    "Mobile app development",
    "UI/UX design and prototyping",
    "Cloud architecture and deployment",
    "Performance optimization",
    "Technical consulting",
];

// (figure, caption)
pub static HIGHLIGHTS: [(&str, &str); 3] = [
    ("50+", "Projects Completed"),
    ("5+", "Years Experience"),
    ("20+", "Happy Clients"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_group_lists_skills() {
        for group in SKILL_GROUPS.iter() {
            assert!(!group.skills.is_empty(), "{} has no skills", group.title);
        }
    }

    #[test]
    fn group_titles_are_unique() {
        let mut titles: Vec<&str> = SKILL_GROUPS.iter().map(|g| g.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), SKILL_GROUPS.len());
    }
}
