use serde::Serialize;

use super::feed::Item;

/// JSON-facing projection of an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub title: String,
    pub link: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
}

impl From<Item> for OutputRecord {
    fn from(item: Item) -> Self {
        let guid = if item.guid.is_empty() {
            None
        } else {
            Some(item.guid)
        };

        Self {
            title: item.title,
            link: item.link,
            description: item.description,
            guid,
        }
    }
}

/// Project items into output records, preserving order.
pub fn project(items: Vec<Item>) -> Vec<OutputRecord> {
    items.into_iter().map(OutputRecord::from).collect()
}

/// Shape of the JSON written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lowercase keys, `guid` omitted when empty.
    #[default]
    Projected,
    /// Items as decoded, capitalized keys, `GUID` always present.
    Raw,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Projected => "projected",
            OutputFormat::Raw => "raw",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "projected" => Ok(OutputFormat::Projected),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(guid: &str) -> Item {
        Item::new("A".to_string(), "http://a".to_string(), "d".to_string())
            .with_guid(guid.to_string())
    }

    #[test]
    fn test_non_empty_guid_is_kept() {
        let record = OutputRecord::from(item("g1"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["guid"], "g1");
    }

    #[test]
    fn test_empty_guid_is_omitted() {
        let record = OutputRecord::from(item(""));
        assert_eq!(record.guid, None);

        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("guid"));
        assert_eq!(object.len(), 3);
    }

    #[test]
    fn test_project_preserves_order_and_length() {
        let items = vec![
            Item::new("1".to_string(), String::new(), String::new()),
            Item::new("2".to_string(), String::new(), String::new()).with_guid("x".to_string()),
            Item::new("3".to_string(), String::new(), String::new()),
        ];

        let records = project(items);
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["1", "2", "3"]);
        assert_eq!(records[1].guid.as_deref(), Some("x"));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("raw".parse::<OutputFormat>(), Ok(OutputFormat::Raw));
        assert_eq!("Projected".parse::<OutputFormat>(), Ok(OutputFormat::Projected));
        assert!("xml".parse::<OutputFormat>().is_err());
        assert!("a".parse::<OutputFormat>().is_err());
    }
}
