//! Slack Block Kit message construction.
//!
//! One payload per series: a header with the series title, then for each
//! event a context block (event title), a section with start/end/link
//! fields, and a divider. Payloads are never batched across series; a
//! single oversized message may be rejected by the platform.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::event::{Event, SeriesEvents};

/// Sender name shown on webhook messages.
const USERNAME: &str = "connpass-events-notifier";

/// Emoji icon shown on webhook messages.
const ICON_EMOJI: &str = ":calendar:";

/// A webhook message body in Slack's Block Kit schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookPayload {
    pub username: String,
    pub icon_emoji: String,
    pub blocks: Vec<Block>,
}

/// A Block Kit display segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header { text: Text },
    Context { elements: Vec<Text> },
    Section { fields: Vec<Text> },
    Divider,
}

/// A Block Kit text object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    PlainText { text: String },
    Mrkdwn { text: String },
}

impl Text {
    fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }
}

/// Builds the webhook payload for one aggregated series.
///
/// Pure transform; the aggregator guarantees `series.events` is non-empty.
pub fn format(series: &SeriesEvents) -> WebhookPayload {
    WebhookPayload {
        username: USERNAME.to_string(),
        icon_emoji: ICON_EMOJI.to_string(),
        blocks: build_blocks(series),
    }
}

fn build_blocks(series: &SeriesEvents) -> Vec<Block> {
    let mut blocks = vec![Block::Header {
        text: Text::plain(series.series_title.as_str()),
    }];

    for event in &series.events {
        blocks.push(Block::Context {
            elements: vec![Text::plain(event.title.as_str())],
        });
        blocks.push(Block::Section {
            fields: event_fields(event),
        });
        blocks.push(Block::Divider);
    }

    blocks
}

fn event_fields(event: &Event) -> Vec<Text> {
    vec![
        Text::plain(format!("開始日時: {}", format_datetime(event.started_at))),
        Text::plain(format!("終了日時: {}", format_datetime(event.ended_at))),
        Text::mrkdwn(format!("イベントページ: <{}>", event.url)),
    ]
}

/// Renders a timestamp as `YYYY-MM-DD HH:MM` in the event's own offset.
fn format_datetime(t: DateTime<FixedOffset>) -> String {
    t.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_series() -> SeriesEvents {
        SeriesEvents {
            series_id: "123".to_string(),
            series_title: "Tokyo Rust Meetup".to_string(),
            events: vec![Event {
                title: "Rust LT Night #12".to_string(),
                url: "https://example.connpass.com/event/9999/".to_string(),
                started_at: "2024-03-05T09:30:00+09:00".parse().unwrap(),
                ended_at: "2024-03-05T11:00:00+09:00".parse().unwrap(),
            }],
        }
    }

    #[test]
    fn formats_datetime_zero_padded() {
        let t = "2024-03-05T09:30:00+09:00".parse().unwrap();
        assert_eq!(format_datetime(t), "2024-03-05 09:30");
    }

    #[test]
    fn formats_datetime_in_the_events_own_offset() {
        // Same instant as 09:30+09:00, but reported in UTC.
        let t = "2024-03-05T00:30:00+00:00".parse().unwrap();
        assert_eq!(format_datetime(t), "2024-03-05 00:30");
    }

    #[test]
    fn payload_serializes_to_block_kit_shape() {
        let payload = format(&sample_series());
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "username": "connpass-events-notifier",
                "icon_emoji": ":calendar:",
                "blocks": [
                    {
                        "type": "header",
                        "text": { "type": "plain_text", "text": "Tokyo Rust Meetup" }
                    },
                    {
                        "type": "context",
                        "elements": [
                            { "type": "plain_text", "text": "Rust LT Night #12" }
                        ]
                    },
                    {
                        "type": "section",
                        "fields": [
                            { "type": "plain_text", "text": "開始日時: 2024-03-05 09:30" },
                            { "type": "plain_text", "text": "終了日時: 2024-03-05 11:00" },
                            { "type": "mrkdwn", "text": "イベントページ: <https://example.connpass.com/event/9999/>" }
                        ]
                    },
                    { "type": "divider" }
                ]
            })
        );
    }

    #[test]
    fn one_header_plus_three_blocks_per_event() {
        let mut series = sample_series();
        series.events.push(Event {
            title: "Rust Hands-on".to_string(),
            url: "https://example.connpass.com/event/10000/".to_string(),
            started_at: "2024-03-09T13:00:00+09:00".parse().unwrap(),
            ended_at: "2024-03-09T17:00:00+09:00".parse().unwrap(),
        });

        let payload = format(&series);
        assert_eq!(payload.blocks.len(), 1 + 3 * 2);
        assert!(matches!(payload.blocks[0], Block::Header { .. }));
        assert!(matches!(payload.blocks[3], Block::Divider));
        assert!(matches!(payload.blocks[6], Block::Divider));
    }

    #[test]
    fn block_order_per_event_is_context_section_divider() {
        let payload = format(&sample_series());

        assert!(matches!(payload.blocks[1], Block::Context { .. }));
        assert!(matches!(payload.blocks[2], Block::Section { .. }));
        assert!(matches!(payload.blocks[3], Block::Divider));
    }
}
