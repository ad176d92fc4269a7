use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::region::model::Region;

/// Lightening amount the widget uses when none is configured.
pub const DEFAULT_LIGHTENING: u32 = 50;

/// Stable id the widget derives for a region that has none:
/// `region-` + base64 of `{"content":..,"start":..,"end":..}`.
///
/// Numbers are formatted the way a browser's `JSON.stringify` does (`1`, not `1.0`).
/// The widget encodes with `btoa`, which rejects text outside Latin-1, so ids for such
/// labels will not match anything the widget produces.
pub fn region_id(region: &Region) -> String {
    let json = format!(
        "{{\"content\":{},\"start\":{},\"end\":{}}}",
        serde_json::Value::String(region.content.clone()),
        js_number(region.start),
        js_number(region.end),
    );
    format!("region-{}", BASE64.encode(json.as_bytes()))
}

/// Brighten `rgba(...)`, `rgb(...)` or `#rrggbb` colors by `amount` per channel, saturating
/// at 255. Other formats come back unchanged.
pub fn lighten_color(color: &str, amount: u32) -> String {
    let amount = f64::from(amount);
    if let Some(inner) = color.strip_prefix("rgba(") {
        let inner = inner.strip_suffix(')').unwrap_or(inner);
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 4 {
            return color.to_string();
        }
        let Some(v) = parts
            .iter()
            .map(|p| parse_float_prefix(p.trim()))
            .collect::<Option<Vec<f64>>>()
        else {
            return color.to_string();
        };
        return format!(
            "rgba({}, {}, {}, {})",
            js_number((v[0] + amount).min(255.0)),
            js_number((v[1] + amount).min(255.0)),
            js_number((v[2] + amount).min(255.0)),
            js_number(v[3]),
        );
    }

    if let Some(inner) = color.strip_prefix("rgb(") {
        let inner = inner.strip_suffix(')').unwrap_or(inner);
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 3 {
            return color.to_string();
        }
        let Some(v) = parts
            .iter()
            .map(|p| parse_int_prefix(p.trim()))
            .collect::<Option<Vec<i64>>>()
        else {
            return color.to_string();
        };
        let bump = |c: i64| js_number((c as f64 + amount).min(255.0));
        return format!("rgb({}, {}, {})", bump(v[0]), bump(v[1]), bump(v[2]));
    }

    if let Some(hex) = color.strip_prefix('#') {
        let bits = parse_hex_prefix(hex);
        let channel = |shift: u32| ((bits >> shift) & 255) as f64;
        let bump = |c: f64| (c + amount).min(255.0) as u32;
        let (r, g, b) = (bump(channel(16)), bump(channel(8)), bump(channel(0)));
        return format!("#{:06x}", (r << 16) | (g << 8) | b);
    }

    color.to_string()
}

/// Format like JavaScript's `JSON.stringify` for a number.
pub(crate) fn js_number(x: f64) -> String {
    if !x.is_finite() {
        return "null".to_string();
    }
    let abs = x.abs();
    if abs != 0.0 && !(1e-6..1e21).contains(&abs) {
        let s = format!("{x:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}

fn parse_float_prefix(s: &str) -> Option<f64> {
    let end = s
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    s[..end].parse().ok()
}

fn parse_int_prefix(s: &str) -> Option<i64> {
    let end = s
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    s[..end].parse().ok()
}

// Leading hex digits, wrapped to 32 bits; no digits reads as 0.
fn parse_hex_prefix(s: &str) -> u32 {
    s.chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u32, |acc, d| acc.wrapping_mul(16).wrapping_add(d))
}

#[cfg(test)]
#[path = "../../tests/unit/region/color.rs"]
mod tests;
