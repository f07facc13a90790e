use serde::Serialize;

/// Root `<rss>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rss {
    pub channel: Channel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    pub title: String,
    pub description: String,
    pub link: String,
    pub items: Vec<Item>,
}

/// A single `<item>` as decoded from the feed.
///
/// Sub-elements that are absent decode to empty strings. Serializing an
/// `Item` directly produces the raw output shape with capitalized keys and an
/// always-present `GUID`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Item {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "GUID")]
    pub guid: String,
}

impl Item {
    pub fn new(title: String, link: String, description: String) -> Self {
        Self {
            title,
            link,
            description,
            guid: String::new(),
        }
    }

    pub fn with_guid(mut self, guid: String) -> Self {
        self.guid = guid;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_item_keeps_empty_guid() {
        let item = Item::new("A".to_string(), "http://a".to_string(), "d".to_string());
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["Title"], "A");
        assert_eq!(json["Link"], "http://a");
        assert_eq!(json["Description"], "d");
        assert_eq!(json["GUID"], "");
    }
}
