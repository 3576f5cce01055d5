use crate::domain::model::Place;
use crate::domain::ports::{Alerter, Container, InputField};
use crate::utils::error::Result;
use minijinja::{context, Environment};
use serde::Serialize;
use std::fmt::Write;

const CONTAINER_TEMPLATE: &str = include_str!("container.html.jinja");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Node {
    Placeholder(String),
    Card(Place),
}

/// In-memory results container. Starts hidden and empty.
#[derive(Debug, Clone)]
pub struct PageContainer {
    id: String,
    visible: bool,
    nodes: Vec<Node>,
}

impl PageContainer {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            visible: false,
            nodes: Vec::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn card_names(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Card(place) => Some(place.name.as_str()),
                Node::Placeholder(_) => None,
            })
            .collect()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.nodes.iter().find_map(|node| match node {
            Node::Placeholder(message) => Some(message.as_str()),
            Node::Card(_) => None,
        })
    }

    /// Renders the container through an auto-escaping HTML template.
    pub fn to_html(&self) -> Result<String> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template("container.html", CONTAINER_TEMPLATE)?;

        let template = env.get_template("container.html")?;
        let display = if self.visible { "flex" } else { "none" };

        Ok(template.render(context! {
            id => &self.id,
            display,
            nodes => &self.nodes,
        })?)
    }

    /// Terminal rendering; a hidden container renders as nothing.
    pub fn to_text(&self) -> String {
        if !self.visible {
            return String::new();
        }

        let mut text = String::new();
        for node in &self.nodes {
            match node {
                Node::Placeholder(message) => {
                    let _ = writeln!(text, "{}", message);
                }
                Node::Card(place) => {
                    let _ = writeln!(text, "* {}", place.name);
                    let _ = writeln!(text, "  {}", place.description);
                    if !place.image_url.is_empty() {
                        let _ = writeln!(text, "  [{}]", place.image_url);
                    }
                }
            }
        }
        text
    }
}

impl Container for PageContainer {
    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn push_placeholder(&mut self, message: &str) {
        self.nodes.push(Node::Placeholder(message.to_string()));
    }

    fn push_card(&mut self, place: &Place) {
        self.nodes.push(Node::Card(place.clone()));
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
}

impl InputField for TextInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn clear(&mut self) {
        self.value.clear();
    }
}

/// Prints alerts to stderr so they never mix with rendered output.
#[derive(Debug, Default)]
pub struct TerminalAlerter;

impl Alerter for TerminalAlerter {
    fn alert(&mut self, message: &str) {
        eprintln!("⚠️  {}", message);
    }
}

#[derive(Debug, Default)]
pub struct RecordingAlerter {
    alerts: Vec<String>,
}

impl RecordingAlerter {
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Alerter for RecordingAlerter {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
