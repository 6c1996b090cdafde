//! Intents: what a recognized content command asks the display to do.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use portfolioterm_types::error::Result;
use serde::{Deserialize, Serialize};

/// Which content panel an intent targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntentKind {
    ShowAbout,
    FilterProjects,
    ShowSkills,
    ShowContact,
}

impl IntentKind {
    /// Wire name, e.g. `"filter-projects"`.
    pub fn as_str(self) -> &'static str {
        match self {
            IntentKind::ShowAbout => "show-about",
            IntentKind::FilterProjects => "filter-projects",
            IntentKind::ShowSkills => "show-skills",
            IntentKind::ShowContact => "show-contact",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skill groups the skills panel can be narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Programming,
    Server,
    Client,
    Cloud,
    Database,
    Tools,
}

impl SkillCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Server => "server",
            SkillCategory::Client => "client",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Database => "database",
            SkillCategory::Tools => "tools",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional filter data carried by an intent. Empty means "show all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentPayload {
    /// Canonical technology name for project filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    /// Skill category for skill filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SkillCategory>,
}

impl IntentPayload {
    pub fn is_empty(&self) -> bool {
        self.technology.is_none() && self.category.is_none()
    }
}

/// A recognized content command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(rename = "type")]
    pub kind: IntentKind,
    /// The input text as the user typed it.
    pub command: String,
    #[serde(default)]
    pub payload: IntentPayload,
}

impl Intent {
    /// An intent with an empty payload.
    pub fn new(kind: IntentKind, command: &str) -> Self {
        Self {
            kind,
            command: command.to_string(),
            payload: IntentPayload::default(),
        }
    }

    pub fn with_technology(mut self, technology: &str) -> Self {
        self.payload.technology = Some(technology.to_string());
        self
    }

    pub fn with_category(mut self, category: SkillCategory) -> Self {
        self.payload.category = Some(category);
        self
    }

    /// The transcript line acknowledging this intent.
    pub fn response_text(&self) -> String {
        match self.kind {
            IntentKind::ShowAbout => "Displaying about information...".to_string(),
            IntentKind::FilterProjects => match &self.payload.technology {
                Some(tech) => format!("Filtering projects by technology: {tech}..."),
                None => "Displaying all projects...".to_string(),
            },
            IntentKind::ShowSkills => match self.payload.category {
                Some(category) => format!("Displaying {category} skills..."),
                None => "Displaying all skills...".to_string(),
            },
            IntentKind::ShowContact => "Displaying contact information...".to_string(),
        }
    }

    /// JSON form, `{"type": ..., "command": ..., "payload": {...}}`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Receives every intent the session dispatches.
///
/// Panels filter on [`Intent::kind`] themselves and ignore the rest.
pub trait IntentListener {
    fn on_intent(&mut self, intent: &Intent);
}

impl<T: IntentListener + ?Sized> IntentListener for Rc<RefCell<T>> {
    fn on_intent(&mut self, intent: &Intent) {
        self.borrow_mut().on_intent(intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_wire_names() {
        assert_eq!(IntentKind::ShowAbout.as_str(), "show-about");
        assert_eq!(IntentKind::FilterProjects.as_str(), "filter-projects");
        assert_eq!(IntentKind::ShowSkills.as_str(), "show-skills");
        assert_eq!(IntentKind::ShowContact.as_str(), "show-contact");
    }

    #[test]
    fn kind_serde_matches_as_str() {
        for kind in [
            IntentKind::ShowAbout,
            IntentKind::FilterProjects,
            IntentKind::ShowSkills,
            IntentKind::ShowContact,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn category_display_is_lowercase() {
        assert_eq!(SkillCategory::Database.to_string(), "database");
        assert_eq!(SkillCategory::Tools.to_string(), "tools");
    }

    #[test]
    fn response_text_table() {
        assert_eq!(
            Intent::new(IntentKind::ShowAbout, "about").response_text(),
            "Displaying about information..."
        );
        assert_eq!(
            Intent::new(IntentKind::FilterProjects, "projects").response_text(),
            "Displaying all projects..."
        );
        assert_eq!(
            Intent::new(IntentKind::FilterProjects, "projects node")
                .with_technology("Node.js")
                .response_text(),
            "Filtering projects by technology: Node.js..."
        );
        assert_eq!(
            Intent::new(IntentKind::ShowSkills, "skills").response_text(),
            "Displaying all skills..."
        );
        assert_eq!(
            Intent::new(IntentKind::ShowSkills, "skills db")
                .with_category(SkillCategory::Database)
                .response_text(),
            "Displaying database skills..."
        );
        assert_eq!(
            Intent::new(IntentKind::ShowContact, "contact").response_text(),
            "Displaying contact information..."
        );
    }

    #[test]
    fn json_shape_with_payload() {
        let intent = Intent::new(IntentKind::FilterProjects, "projects react").with_technology("React");
        let v: serde_json::Value = serde_json::from_str(&intent.to_json().unwrap()).unwrap();
        assert_eq!(v["type"], "filter-projects");
        assert_eq!(v["command"], "projects react");
        assert_eq!(v["payload"]["technology"], "React");
        assert!(v["payload"].get("category").is_none());
    }

    #[test]
    fn json_empty_payload_is_empty_object() {
        let intent = Intent::new(IntentKind::ShowAbout, "about");
        let v: serde_json::Value = serde_json::from_str(&intent.to_json().unwrap()).unwrap();
        assert_eq!(v["payload"], serde_json::json!({}));
        assert!(intent.payload.is_empty());
    }

    #[test]
    fn shared_listener_receives_intents() {
        struct Counter(usize);
        impl IntentListener for Counter {
            fn on_intent(&mut self, _intent: &Intent) {
                self.0 += 1;
            }
        }
        let shared = Rc::new(RefCell::new(Counter(0)));
        let mut handle = Rc::clone(&shared);
        handle.on_intent(&Intent::new(IntentKind::ShowContact, "contact"));
        handle.on_intent(&Intent::new(IntentKind::ShowAbout, "about"));
        assert_eq!(shared.borrow().0, 2);
    }
}
