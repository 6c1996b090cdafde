//! Portfolio content and the panels that display it.
//!
//! Content is read from TOML (the built-in copy is compiled in). Panels
//! subscribe to session intents to pick up their filters; the board
//! renders whichever panel the session reports as active.

pub mod model;
pub mod panels;

pub use model::{About, ContactLink, Portfolio, Project, Skill, load_portfolio};
pub use panels::{AboutPanel, ContactPanel, Panel, PanelBoard, ProjectsPanel, SkillsPanel};
