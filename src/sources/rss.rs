use quick_xml::errors::IllFormedError;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::domain::{Channel, Item, Rss};
use crate::errors::{FeederError, FeederResult};

/// Elements read from `<channel>` and `<item>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
    Description,
    Guid,
}

impl Field {
    /// Only unprefixed names match, so `atom:link` or `media:title` are ignored.
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"title" => Some(Field::Title),
            b"link" => Some(Field::Link),
            b"description" => Some(Field::Description),
            b"guid" => Some(Field::Guid),
            _ => None,
        }
    }
}

/// Text being collected for a field element open at `depth`.
struct Capture {
    field: Field,
    depth: usize,
    in_item: bool,
    text: String,
}

/// Decode an RSS 2.0 document.
///
/// Reads `title`, `link` and `description` of the channel and `title`,
/// `link`, `description` and `guid` of each item; every other element is
/// skipped. A repeated field keeps its last value. Text is kept verbatim,
/// and only the field's own character data counts, so markup nested inside
/// a field is dropped. Fails when the bytes are not well-formed XML or the
/// root has no `channel`.
pub fn parse_feed(bytes: &[u8]) -> FeederResult<Rss> {
    let mut reader = Reader::from_reader(bytes);
    let config = reader.config_mut();
    config.trim_text(false);
    config.expand_empty_elements = true;

    let mut buf = Vec::new();
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut channel: Option<Channel> = None;
    let mut item: Option<Item> = None;
    let mut capture: Option<Capture> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                path.push(e.name().as_ref().to_vec());
                let depth = path.len();
                let in_channel = depth >= 2 && path[1] == b"channel";
                let name = e.name();

                if depth == 2 && in_channel {
                    channel.get_or_insert_with(Channel::default);
                } else if depth == 3 && in_channel && name.as_ref() == b"item" {
                    item = Some(Item::default());
                } else if let Some(field) = Field::from_name(name.as_ref()) {
                    let in_item = depth == 4 && in_channel && path[2] == b"item";
                    let on_channel = depth == 3 && in_channel && field != Field::Guid;
                    if in_item || on_channel {
                        capture = Some(Capture {
                            field,
                            depth,
                            in_item,
                            text: String::new(),
                        });
                    }
                }
            }
            Event::Text(e) => {
                if let Some(capture) = capture.as_mut().filter(|c| c.depth == path.len()) {
                    capture.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(capture) = capture.as_mut().filter(|c| c.depth == path.len()) {
                    capture
                        .text
                        .push_str(&e.decode().map_err(quick_xml::Error::from)?);
                }
            }
            Event::End(_) => {
                let depth = path.len();
                if capture.as_ref().is_some_and(|c| c.depth == depth) {
                    if let Some(done) = capture.take() {
                        store(done, channel.as_mut(), item.as_mut());
                    }
                } else if depth == 3 && path[1] == b"channel" && path[2] == b"item" {
                    if let (Some(channel), Some(done)) = (channel.as_mut(), item.take()) {
                        channel.items.push(done);
                    }
                }
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = path.last() {
        let name = String::from_utf8_lossy(open).into_owned();
        return Err(quick_xml::Error::IllFormed(IllFormedError::MissingEndTag(name)).into());
    }

    let channel = channel.ok_or(FeederError::MissingChannel)?;
    tracing::debug!(
        channel = %channel.title,
        items = channel.items.len(),
        "Parsed feed"
    );

    Ok(Rss { channel })
}

/// Items of the feed in document order.
pub fn parse_items(bytes: &[u8]) -> FeederResult<Vec<Item>> {
    parse_feed(bytes).map(|rss| rss.channel.items)
}

fn store(capture: Capture, channel: Option<&mut Channel>, item: Option<&mut Item>) {
    let Capture {
        field,
        in_item,
        text,
        ..
    } = capture;

    if in_item {
        if let Some(item) = item {
            match field {
                Field::Title => item.title = text,
                Field::Link => item.link = text,
                Field::Description => item.description = text,
                Field::Guid => item.guid = text,
            }
        }
    } else if let Some(channel) = channel {
        match field {
            Field::Title => channel.title = text,
            Field::Link => channel.link = text,
            Field::Description => channel.description = text,
            Field::Guid => {}
        }
    }
}
