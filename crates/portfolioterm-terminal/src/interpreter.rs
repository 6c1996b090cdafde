//! Content command interpreter.
//!
//! Free text is matched case-insensitively against a small fixed grammar.
//! Rules are tried in a fixed order and the first match wins, so
//! `"projects about node"` is a project filter, not an about request.
//! Built-in session commands never reach this module.

use crate::intent::{Intent, IntentKind, SkillCategory};

/// Technology keywords in match priority order, with their display names.
///
/// `javascript` precedes `java` so the longer keyword wins.
const TECHNOLOGIES: &[(&str, &str)] = &[
    ("python", "Python"),
    ("react", "React"),
    ("node", "Node.js"),
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("mysql", "MySQL"),
    ("mongodb", "MongoDB"),
    ("aws", "AWS"),
    ("angular", "Angular"),
    ("php", "PHP"),
    ("java", "Java"),
    ("neo4j", "Neo4j"),
];

/// Skill category rules in match priority order.
const CATEGORY_RULES: &[(&[&str], SkillCategory)] = &[
    (&["programming", "language"], SkillCategory::Programming),
    (&["server", "backend"], SkillCategory::Server),
    (&["client", "frontend"], SkillCategory::Client),
    (&["cloud", "aws"], SkillCategory::Cloud),
    (&["database", "db"], SkillCategory::Database),
    (&["tool"], SkillCategory::Tools),
];

/// Interpret `raw` as a content command.
///
/// Returns `None` when no rule matches; the caller reports the command as
/// not found.
pub fn interpret(raw: &str) -> Option<Intent> {
    let command = raw.trim();
    let lower = command.to_lowercase();

    // "project" covers the exact `project(s)` and `show project` forms.
    if lower.contains("project") {
        let intent = Intent::new(IntentKind::FilterProjects, command);
        return Some(match find_technology(&lower) {
            Some(tech) => intent.with_technology(tech),
            None => intent,
        });
    }

    if lower.contains("skill") {
        let intent = Intent::new(IntentKind::ShowSkills, command);
        return Some(match find_category(&lower) {
            Some(category) => intent.with_category(category),
            None => intent,
        });
    }

    if lower.contains("about") || lower.contains("who are you") {
        return Some(Intent::new(IntentKind::ShowAbout, command));
    }

    if ["contact", "reach", "email"]
        .iter()
        .any(|word| lower.contains(word))
    {
        return Some(Intent::new(IntentKind::ShowContact, command));
    }

    None
}

fn find_technology(lower: &str) -> Option<&'static str> {
    TECHNOLOGIES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|&(_, name)| name)
}

fn find_category(lower: &str) -> Option<SkillCategory> {
    CATEGORY_RULES
        .iter()
        .find(|(words, _)| words.iter().any(|w| lower.contains(w)))
        .map(|&(_, category)| category)
}
