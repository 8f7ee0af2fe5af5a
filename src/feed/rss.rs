//! RSS 2.0 serialization

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::{FeedDocument, FeedError, FeedSerializer};
use crate::helpers::{absolute_url, date_rss};

/* Example
<?xml version="1.0" encoding="UTF-8"?>
<?xml-stylesheet href="/rss/styles.xsl" type="text/xsl"?>
<rss version="2.0">
  <channel>
    <title>Axel Padilla’s Blog</title>
    <description>Sharing my thoughts on software development, productivity, and life.</description>
    <link>https://blog.axelpadilla.me/</link>
    <item>
      <title>Hello World</title>
      <link>https://blog.axelpadilla.me/hello-world/</link>
      <guid isPermaLink="true">https://blog.axelpadilla.me/hello-world/</guid>
      <description>First post</description>
      <pubDate>Sun, 15 Jan 2023 00:00:00 +0000</pubDate>
    </item>
  </channel>
</rss>
*/

type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Writes a [`FeedDocument`] as RSS 2.0
#[derive(Debug, Clone, Copy)]
pub struct RssSerializer {
    indent: usize,
}

impl Default for RssSerializer {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl RssSerializer {
    /// Serializer writing everything on one line
    pub fn compact() -> Self {
        Self { indent: 0 }
    }
}

impl FeedSerializer for RssSerializer {
    fn serialize(&self, doc: &FeedDocument) -> Result<String, FeedError> {
        let cursor = Cursor::new(Vec::new());
        let mut writer = if self.indent > 0 {
            Writer::new_with_indent(cursor, b' ', self.indent)
        } else {
            Writer::new(cursor)
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        if let Some(href) = &doc.stylesheet {
            let pi = format!(
                r#"xml-stylesheet href="{}" type="text/xsl""#,
                quick_xml::escape::escape(href.as_str())
            );
            writer.write_event(Event::PI(BytesPI::new(pi)))?;
        }

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        writer.write_event(Event::Start(rss))?;
        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        push_text(&mut writer, "title", &doc.title)?;
        push_text(&mut writer, "description", &doc.description)?;
        push_text(&mut writer, "link", &doc.site)?;

        for item in &doc.items {
            writer.write_event(Event::Start(BytesStart::new("item")))?;

            let link = absolute_url(&doc.site, &item.link);
            push_text(&mut writer, "title", &item.title)?;
            push_text(&mut writer, "link", &link)?;

            let mut guid = BytesStart::new("guid");
            guid.push_attribute(("isPermaLink", "true"));
            writer.write_event(Event::Start(guid))?;
            writer.write_event(Event::Text(BytesText::new(&link)))?;
            writer.write_event(Event::End(BytesEnd::new("guid")))?;

            push_text(&mut writer, "description", &item.description)?;
            push_text(&mut writer, "pubDate", &date_rss(&item.pub_date))?;

            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        let xml = String::from_utf8(writer.into_inner().into_inner())?;
        Ok(xml)
    }
}

fn push_text(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<(), FeedError> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
