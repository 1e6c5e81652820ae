//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format a value with exactly one decimal place (slider labels)
pub fn format_one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

/// Format a share with one decimal place and a percent suffix
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format a number for display inside a number input.
///
/// Whole numbers keep one decimal place (`10` becomes `10.0`), anything else
/// uses its shortest representation.
pub fn format_display_number(value: f64) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Format time with milliseconds
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

/// Reduce an HTML fragment to readable text lines.
///
/// Tags are dropped, `<br>`/block boundaries become line breaks, common
/// entities are decoded and blank lines are collapsed.
pub fn fragment_text(html: &str) -> Vec<String> {
    let mut text = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();
    let mut skip_until: Option<&'static str> = None;

    while let Some(c) = chars.next() {
        if c != '<' {
            if skip_until.is_none() {
                text.push(c);
            }
            continue;
        }

        let mut tag = String::new();
        for t in chars.by_ref() {
            if t == '>' {
                break;
            }
            tag.push(t);
        }
        let name: String = tag
            .trim_start_matches('/')
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        if let Some(end) = skip_until {
            if tag.starts_with('/') && name == end {
                skip_until = None;
            }
            continue;
        }

        match name.as_str() {
            "script" => skip_until = Some("script"),
            "style" => skip_until = Some("style"),
            "br" | "p" | "div" | "tr" | "h1" | "h2" | "h3" | "li" | "table" => text.push('\n'),
            "td" | "th" => text.push(' '),
            _ => {}
        }
    }

    decode_entities(&text)
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}

fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&copy;", "©")
        .replace("&amp;", "&")
}

/// Truncate a string to max chars with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_decimal_labels() {
        assert_eq!(format_one_decimal(1.0), "1.0");
        assert_eq!(format_one_decimal(2.26), "2.3");
        assert_eq!(format_percent(65.1), "65.1%");
        assert_eq!(format_percent(100.0 - 65.1), "34.9%");
    }

    #[test]
    fn test_display_number() {
        assert_eq!(format_display_number(10.0), "10.0");
        assert_eq!(format_display_number(-0.0), "0.0");
        assert_eq!(format_display_number(12.5), "12.5");
        assert_eq!(format_display_number(-40.0), "-40.0");
    }

    #[test]
    fn test_fragment_text() {
        let html = "<div id=\"inspector\"><h2 class='sidebar-title'>Inspecting: <i>Oxford Road</i></h2>\
                    <script>var x = 1;</script><table><tr><td>Speed Limit</td><td>30mph</td></tr>\
                    <tr><td>Oneway&nbsp;Road</td><td>Yes &amp; No</td></tr></table></div>";
        let lines = fragment_text(html);
        assert_eq!(
            lines,
            vec![
                "Inspecting: Oxford Road".to_string(),
                "Speed Limit 30mph".to_string(),
                "Oneway Road Yes & No".to_string(),
            ]
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }
}
