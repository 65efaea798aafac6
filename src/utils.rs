use super::*;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.clamp(1, area.width.max(1)).min(area.width);
  let height = height.clamp(1, area.height.max(1)).min(area.height);

  let x = area.x + (area.width.saturating_sub(width)) / 2;
  let y = area.y + (area.height.saturating_sub(height)) / 2;

  Rect::new(x, y, width, height)
}

pub(crate) fn deserialize_timestamp<'de, D>(
  deserializer: D,
) -> Result<NaiveDateTime, D::Error>
where
  D: Deserializer<'de>,
{
  let value = String::deserialize(deserializer)?;

  parse_timestamp(&value).map_err(de::Error::custom)
}

pub(crate) fn format_timestamp(timestamp: NaiveDateTime) -> String {
  timestamp.format("%Y-%m-%d %H:%M").to_string()
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
  NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
    .or_else(|_| value.parse::<NaiveDateTime>())
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = text.chars().take(max_chars).collect::<String>();

  result.truncate(result.trim_end().len());
  result.push_str("...");

  result
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for paragraph in text.lines() {
    let mut current = String::new();
    let mut current_width = 0;

    for word in paragraph.split_whitespace() {
      let word_width = word.chars().count();

      if current.is_empty() {
        current.push_str(word);
        current_width = word_width;
      } else if current_width + 1 + word_width <= width {
        current.push(' ');
        current.push_str(word);
        current_width += 1 + word_width;
      } else {
        lines.push(std::mem::take(&mut current));
        current.push_str(word);
        current_width = word_width;
      }
    }

    lines.push(current);
  }

  lines
}
