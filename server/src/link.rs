use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub const FILIALEN_PATH: &str = "/filialen";
pub const SELF_REL: &str = "self";
pub const WERKNEMERS_REL: &str = "werknemers";

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Link {
    href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

// Serialized as a HAL `_links` object, in insertion order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Links(Vec<(&'static str, Link)>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, rel: &'static str, link: Link) -> Self {
        self.0.push((rel, link));
        self
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (rel, link) in &self.0 {
            map.serialize_entry(rel, link)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FiliaalLinks {
    base: String,
}

impl FiliaalLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection_uri(&self) -> String {
        format!("{}{}", self.base, FILIALEN_PATH)
    }

    pub fn item_uri(&self, id: i64) -> String {
        format!("{}{}/{}", self.base, FILIALEN_PATH, id)
    }

    pub fn collection(&self) -> Links {
        Links::new().with(SELF_REL, Link::new(self.collection_uri()))
    }

    pub fn summary(&self, id: i64) -> Links {
        Links::new().with(SELF_REL, Link::new(self.item_uri(id)))
    }

    pub fn item(&self, id: i64) -> Links {
        let uri = self.item_uri(id);
        let werknemers = format!("{uri}/{WERKNEMERS_REL}");
        Links::new()
            .with(SELF_REL, Link::new(uri))
            .with(WERKNEMERS_REL, Link::new(werknemers))
    }
}
