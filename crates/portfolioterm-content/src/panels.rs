//! Display panels. Each panel listens for intents of its own kind and
//! renders itself as plain text lines.

use portfolioterm_terminal::{Intent, IntentKind, IntentListener, SkillCategory};

use crate::model::{About, ContactLink, Portfolio, Project, Skill};

/// Width of a skill proficiency bar, in cells.
const BAR_WIDTH: usize = 20;

/// A content panel.
pub trait Panel: IntentListener {
    /// The intent kind that shows this panel.
    fn kind(&self) -> IntentKind;

    /// Render the panel's current state.
    fn render(&self) -> Vec<String>;
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

pub struct AboutPanel {
    about: About,
}

impl AboutPanel {
    pub fn new(about: About) -> Self {
        Self { about }
    }
}

impl IntentListener for AboutPanel {
    fn on_intent(&mut self, _intent: &Intent) {}
}

impl Panel for AboutPanel {
    fn kind(&self) -> IntentKind {
        IntentKind::ShowAbout
    }

    fn render(&self) -> Vec<String> {
        let about = &self.about;
        let mut lines = vec!["$ cat about.txt".to_string(), String::new(), about.summary.clone()];
        if !about.philosophy.is_empty() {
            lines.push(String::new());
            lines.push("$ leadership_philosophy".to_string());
            lines.push(about.philosophy.clone());
        }
        if !about.achievements.is_empty() {
            lines.push(String::new());
            lines.push("$ achievements".to_string());
            lines.extend(about.achievements.iter().map(|a| format!("  ▸ {a}")));
        }
        if !about.education.is_empty() {
            lines.push(String::new());
            lines.push(format!("Education: {}", about.education.join(", ")));
        }
        if !about.certifications.is_empty() {
            lines.push(format!("Certification: {}", about.certifications.join(", ")));
        }
        lines
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

pub struct ProjectsPanel {
    projects: Vec<Project>,
    filter: Option<String>,
}

impl ProjectsPanel {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            filter: None,
        }
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Projects passing the current filter, or all of them when unfiltered.
    pub fn visible(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| self.filter.as_deref().is_none_or(|t| p.uses(t)))
            .collect()
    }
}

impl IntentListener for ProjectsPanel {
    fn on_intent(&mut self, intent: &Intent) {
        if intent.kind == IntentKind::FilterProjects {
            self.filter = intent.payload.technology.clone();
        }
    }
}

impl Panel for ProjectsPanel {
    fn kind(&self) -> IntentKind {
        IntentKind::FilterProjects
    }

    fn render(&self) -> Vec<String> {
        let mut lines = vec!["$ ls projects/".to_string()];
        if let Some(tech) = &self.filter {
            lines.push(format!("$ Filter: {tech}"));
        }
        lines.push(String::new());

        let visible = self.visible();
        if visible.is_empty() {
            lines.push("  (no matching projects)".to_string());
        }
        for project in visible {
            lines.push(format!("▸ {}", project.title));
            lines.push(format!("  {}", project.description));
            if !project.technologies.is_empty() {
                let tags: Vec<String> = project
                    .technologies
                    .iter()
                    .map(|t| format!("[{t}]"))
                    .collect();
                lines.push(format!("  {}", tags.join(" ")));
            }
            if let Some(link) = &project.link {
                lines.push(format!("  [live] {link}"));
            }
            if let Some(github) = &project.github {
                lines.push(format!("  [code] {github}"));
            }
            lines.push(String::new());
        }
        lines
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

pub struct SkillsPanel {
    skills: Vec<Skill>,
    category: Option<SkillCategory>,
}

impl SkillsPanel {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self {
            skills,
            category: None,
        }
    }

    pub fn category(&self) -> Option<SkillCategory> {
        self.category
    }

    /// Skills in the current category, or all of them.
    pub fn visible(&self) -> Vec<&Skill> {
        self.skills
            .iter()
            .filter(|s| self.category.is_none_or(|c| s.category == c))
            .collect()
    }
}

fn level_bar(level: u8) -> String {
    let filled = usize::from(level.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

impl IntentListener for SkillsPanel {
    fn on_intent(&mut self, intent: &Intent) {
        if intent.kind == IntentKind::ShowSkills {
            self.category = intent.payload.category;
        }
    }
}

impl Panel for SkillsPanel {
    fn kind(&self) -> IntentKind {
        IntentKind::ShowSkills
    }

    fn render(&self) -> Vec<String> {
        let mut lines = vec!["$ cat skills.txt".to_string()];
        if let Some(category) = self.category {
            lines.push(format!("$ Category: {category}"));
        }
        lines.push(String::new());
        lines.extend(self.visible().iter().map(|s| {
            format!("  {:<18} [{}] {:>3}%", s.name, level_bar(s.level), s.level)
        }));
        lines
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

pub struct ContactPanel {
    links: Vec<ContactLink>,
}

impl ContactPanel {
    pub fn new(links: Vec<ContactLink>) -> Self {
        Self { links }
    }
}

impl IntentListener for ContactPanel {
    fn on_intent(&mut self, _intent: &Intent) {}
}

impl Panel for ContactPanel {
    fn kind(&self) -> IntentKind {
        IntentKind::ShowContact
    }

    fn render(&self) -> Vec<String> {
        let mut lines = vec!["$ cat contact.txt".to_string(), String::new()];
        lines.extend(self.links.iter().map(|link| {
            format!("  $ {:<10} {}  <{}>", link.label.to_lowercase(), link.value, link.href)
        }));
        lines
    }
}

// ---------------------------------------------------------------------------
// board
// ---------------------------------------------------------------------------

/// All four panels. Forwards every intent to each panel and renders the
/// one matching the session's active kind.
pub struct PanelBoard {
    panels: Vec<Box<dyn Panel>>,
}

impl PanelBoard {
    pub fn new(portfolio: &Portfolio) -> Self {
        Self {
            panels: vec![
                Box::new(AboutPanel::new(portfolio.about.clone())),
                Box::new(ProjectsPanel::new(portfolio.projects.clone())),
                Box::new(SkillsPanel::new(portfolio.skills.clone())),
                Box::new(ContactPanel::new(portfolio.contact.clone())),
            ],
        }
    }

    /// Lines for the panel of kind `active`, or nothing when no panel is
    /// active.
    pub fn render(&self, active: Option<IntentKind>) -> Vec<String> {
        let Some(kind) = active else {
            return Vec::new();
        };
        self.panels
            .iter()
            .find(|p| p.kind() == kind)
            .map(|p| p.render())
            .unwrap_or_default()
    }
}

impl IntentListener for PanelBoard {
    fn on_intent(&mut self, intent: &Intent) {
        for panel in &mut self.panels {
            panel.on_intent(intent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn portfolio() -> Portfolio {
        Portfolio::builtin().unwrap()
    }

    #[test]
    fn about_renders_all_sections() {
        let lines = AboutPanel::new(portfolio().about).render();
        assert_eq!(lines[0], "$ cat about.txt");
        assert!(lines.iter().any(|l| l == "$ leadership_philosophy"));
        assert_eq!(lines.iter().filter(|l| l.starts_with("  ▸ ")).count(), 5);
        assert!(lines.iter().any(|l| l.starts_with("Education: M.S. Computer Science")));
        assert!(lines.last().unwrap().starts_with("Certification: Google Cloud"));
    }

    #[test]
    fn projects_filter_follows_intent() {
        let mut panel = ProjectsPanel::new(portfolio().projects);
        assert_eq!(panel.visible().len(), 10);

        panel.on_intent(&Intent::new(IntentKind::FilterProjects, "projects node").with_technology("Node.js"));
        assert_eq!(panel.filter(), Some("Node.js"));
        assert_eq!(panel.visible().len(), 2);
        let lines = panel.render();
        assert_eq!(lines[1], "$ Filter: Node.js");
        assert!(lines.contains(&"▸ MustMotivate Platform".to_string()));

        panel.on_intent(&Intent::new(IntentKind::FilterProjects, "projects"));
        assert_eq!(panel.filter(), None);
        assert_eq!(panel.visible().len(), 10);
    }

    fn filtered_titles(technology: &str) -> Vec<String> {
        let mut panel = ProjectsPanel::new(portfolio().projects);
        panel.on_intent(&Intent::new(IntentKind::FilterProjects, "projects").with_technology(technology));
        panel.visible().iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn node_filter_matches_node_projects() {
        assert_eq!(
            filtered_titles("Node.js"),
            vec!["MustMotivate Platform", "Sci-IoT Web Application"]
        );
    }

    #[test]
    fn java_filter_also_matches_javascript() {
        let titles = filtered_titles("Java");
        assert!(titles.iter().any(|t| t == "PetersenDean Portal"));
        assert!(titles.iter().any(|t| t == "Active Rules for Graph Databases"));
    }

    #[test]
    fn projects_ignore_other_intents() {
        let mut panel = ProjectsPanel::new(portfolio().projects);
        panel.on_intent(&Intent::new(IntentKind::FilterProjects, "projects aws").with_technology("AWS"));
        panel.on_intent(&Intent::new(IntentKind::ShowSkills, "skills"));
        assert_eq!(panel.filter(), Some("AWS"));
    }

    #[test]
    fn projects_render_links() {
        let panel = ProjectsPanel::new(portfolio().projects);
        let lines = panel.render();
        assert!(lines.contains(&"  [live] https://bharry29.github.io".to_string()));
        assert_eq!(lines.iter().filter(|l| l.starts_with("  [code] ")).count(), 10);
    }

    #[test]
    fn projects_with_no_match_say_so() {
        let mut panel = ProjectsPanel::new(portfolio().projects);
        panel.on_intent(&Intent::new(IntentKind::FilterProjects, "projects cobol").with_technology("COBOL"));
        assert!(panel.render().contains(&"  (no matching projects)".to_string()));
    }

    #[test]
    fn skills_category_follows_intent() {
        let mut panel = SkillsPanel::new(portfolio().skills);
        panel.on_intent(
            &Intent::new(IntentKind::ShowSkills, "database skills").with_category(SkillCategory::Database),
        );
        assert_eq!(panel.category(), Some(SkillCategory::Database));
        assert_eq!(panel.visible().len(), 4);
        let lines = panel.render();
        assert_eq!(lines[1], "$ Category: database");

        let names: Vec<_> = panel.visible().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["MySQL", "SQL Server", "MongoDB", "Neo4j"]);

        panel.on_intent(&Intent::new(IntentKind::ShowSkills, "skills"));
        assert_eq!(panel.visible().len(), 43);
    }

    #[test]
    fn skill_bar_scales_with_level() {
        assert_eq!(level_bar(0), " ".repeat(BAR_WIDTH));
        assert_eq!(level_bar(100), "#".repeat(BAR_WIDTH));
        assert_eq!(level_bar(50).matches('#').count(), 10);
        assert_eq!(level_bar(255).len(), BAR_WIDTH);
    }

    #[test]
    fn skill_line_layout() {
        let panel = SkillsPanel::new(portfolio().skills);
        let lines = panel.render();
        assert_eq!(
            lines[2],
            format!("  {:<18} [{}]  90%", "Python", "#".repeat(18) + "  ")
        );
    }

    #[test]
    fn contact_lists_links() {
        let lines = ContactPanel::new(portfolio().contact).render();
        assert_eq!(lines.len(), 7);
        assert!(lines[3].starts_with("  $ email"));
        assert!(lines[3].contains("mailto:bharry29@gmail.com"));
    }

    #[test]
    fn board_renders_active_panel_only() {
        let board = PanelBoard::new(&portfolio());
        assert!(board.render(None).is_empty());
        assert_eq!(board.render(Some(IntentKind::ShowAbout))[0], "$ cat about.txt");
        assert_eq!(board.render(Some(IntentKind::FilterProjects))[0], "$ ls projects/");
        assert_eq!(board.render(Some(IntentKind::ShowSkills))[0], "$ cat skills.txt");
        assert_eq!(board.render(Some(IntentKind::ShowContact))[0], "$ cat contact.txt");
    }

    #[test]
    fn board_forwards_intents() {
        let mut board = PanelBoard::new(&portfolio());
        board.on_intent(&Intent::new(IntentKind::FilterProjects, "projects react").with_technology("React"));
        let lines = board.render(Some(IntentKind::FilterProjects));
        assert_eq!(lines[1], "$ Filter: React");
    }

    proptest! {
        #[test]
        fn filter_keeps_exactly_the_matching_projects(tech in "[a-zA-Z. ]{0,10}") {
            let all = portfolio().projects;
            let mut panel = ProjectsPanel::new(all.clone());
            panel.on_intent(&Intent::new(IntentKind::FilterProjects, "projects").with_technology(&tech));
            let kept = panel.visible();
            let expected = all.iter().filter(|proj| proj.uses(&tech)).count();
            prop_assert_eq!(kept.len(), expected);
            let lower = tech.to_lowercase();
            for proj in kept {
                prop_assert!(proj.technologies.iter().any(|t| t.to_lowercase().contains(&lower)));
            }
        }
    }
}
