//! Static display content: the academic/professional timeline and skill
//! groups rendered on the profile page. Defined at load time, never mutated.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineIcon {
    GraduationCap,
    Briefcase,
    Code,
}

impl TimelineIcon {
    /// Icon-font class, same scheme as the other `extra-*` glyphs.
    pub fn class(&self) -> &'static str {
        match self {
            Self::GraduationCap => "extra-graduation-cap",
            Self::Briefcase => "extra-briefcase",
            Self::Code => "extra-code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: TimelineIcon,
    pub side: Side,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

static TIMELINE: [TimelineEvent; 6] = [
    TimelineEvent {
        year: "2024",
        title: "Freelance Developer",
        description: "Bus reservation application with Next.js, MySQL, and Prisma",
        icon: TimelineIcon::Code,
        side: Side::Right,
    },
    TimelineEvent {
        year: "2023",
        title: "Web Development Internship",
        description: "Training management app (PERN Stack) at Etablissement Ralaivao",
        icon: TimelineIcon::Briefcase,
        side: Side::Left,
    },
    TimelineEvent {
        year: "2023",
        title: "Master's Degree",
        description: "Software Engineering at ENI",
        icon: TimelineIcon::GraduationCap,
        side: Side::Right,
    },
    TimelineEvent {
        year: "2022",
        title: "Software Development Internship",
        description: "EPI management application at Bionexx using PyQt5",
        icon: TimelineIcon::Briefcase,
        side: Side::Left,
    },
    TimelineEvent {
        year: "2020-2023",
        title: "Bachelor's Degree",
        description: "Computer Science at ENI",
        icon: TimelineIcon::GraduationCap,
        side: Side::Right,
    },
    TimelineEvent {
        year: "2019",
        title: "High School Diploma",
        description: "Series D with honors",
        icon: TimelineIcon::GraduationCap,
        side: Side::Left,
    },
];

static SKILL_GROUPS: [SkillGroup; 5] = [
    SkillGroup {
        category: "frontend",
        skills: &["React", "HTML5", "CSS3", "JavaScript"],
    },
    SkillGroup {
        category: "backend",
        skills: &["Node.js", "Python", "Express"],
    },
    SkillGroup {
        category: "database",
        skills: &["MySQL", "PostgreSQL"],
    },
    SkillGroup {
        category: "ui/ux",
        skills: &["Figma"],
    },
    SkillGroup {
        category: "project management",
        skills: &["Trello"],
    },
];

static SOFT_SKILLS: [&str; 7] = [
    "Interpersonal skills and communication",
    "Patience, understanding, and stress management",
    "Team spirit and adaptability",
    "Autonomy and versatility",
    "Result-oriented work mode",
    "Managing client expectations and requirements",
    "Passion for art and computing",
];

pub fn timeline() -> &'static [TimelineEvent] {
    &TIMELINE
}

pub fn skill_groups() -> &'static [SkillGroup] {
    &SKILL_GROUPS
}

pub fn soft_skills() -> &'static [&'static str] {
    &SOFT_SKILLS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_alternates_sides() {
        let events = timeline();
        assert!(!events.is_empty());
        for pair in events.windows(2) {
            assert_ne!(pair[0].side, pair[1].side);
        }
    }

    #[test]
    fn skill_groups_are_non_empty() {
        for group in skill_groups() {
            assert!(!group.category.is_empty());
            assert!(!group.skills.is_empty());
        }
    }
}
