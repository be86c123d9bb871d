//! 画像読み込み失敗時の代替SVG
//!
//! 背景色で塗りつぶした300x200の矩形に、タイトルとカテゴリを白文字で重ねる。

use crate::types::ProjectRecord;

const WIDTH: u32 = 300;
const HEIGHT: u32 = 200;

/// 代替画像のSVG本体
pub fn placeholder_svg(record: &ProjectRecord) -> String {
    format!(
        concat!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>",
            "<rect width='{w}' height='{h}' fill='#{color}'/>",
            "<text x='50%' y='45%' font-size='16' fill='#ffffff' text-anchor='middle' dominant-baseline='middle'>{title}</text>",
            "<text x='50%' y='65%' font-size='12' fill='#ffffff' text-anchor='middle' dominant-baseline='middle'>{category}</text>",
            "</svg>"
        ),
        w = WIDTH,
        h = HEIGHT,
        color = record.color,
        title = escape_xml(&record.title),
        category = escape_xml(&record.category),
    )
}

/// `<img src>` にそのまま使えるdata URI
pub fn placeholder_data_uri(record: &ProjectRecord) -> String {
    format!("data:image/svg+xml,{}", urlencoding::encode(&placeholder_svg(record)))
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, category: &str) -> ProjectRecord {
        ProjectRecord {
            id: 3,
            title: title.to_string(),
            category: category.to_string(),
            image: "/images/projects/project-3.jpg".to_string(),
            color: "f59e0b".to_string(),
            year: 2020,
        }
    }

    #[test]
    fn test_svg_contents() {
        let svg = placeholder_svg(&record("PetCare 3", "Branding"));
        assert!(svg.contains("fill='#f59e0b'"));
        assert!(svg.contains(">PetCare 3</text>"));
        assert!(svg.contains(">Branding</text>"));
        assert!(svg.contains("viewBox='0 0 300 200'"));
    }

    #[test]
    fn test_svg_escapes_text() {
        let svg = placeholder_svg(&record("A&B <3>", "SaaS"));
        assert!(svg.contains("A&amp;B &lt;3&gt;"));
    }

    #[test]
    fn test_data_uri_encoding() {
        let uri = placeholder_data_uri(&record("HealthCare+ 3", "E-commerce"));
        assert!(uri.starts_with("data:image/svg+xml,%3Csvg"));
        assert!(uri.contains("fill%3D%27%23f59e0b%27"));
        assert!(uri.contains("x%3D%2750%25%27"));
        assert!(uri.contains("HealthCare%2B%203"));
        assert!(!uri.contains('#'));
        assert!(!uri.contains(' '));
    }

    #[test]
    fn test_data_uri_encodes_reserved_and_non_ascii() {
        let uri = placeholder_data_uri(&record("Café {A&B}", "SaaS"));
        let body = uri.trim_start_matches("data:image/svg+xml,");
        assert!(body.contains("Caf%C3%A9"));
        assert!(body.contains("%7BA%26amp%3BB%7D"));
        assert!(!body.contains('&'));
        assert!(!body.contains('{'));
        assert!(body.is_ascii());
    }
}
