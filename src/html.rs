//! Minimal HTML parser producing a [`Dom`]. Handles start/end/void tags,
//! quoted and unquoted attributes, comments, doctype, and the common
//! character references. `<script>` and `<style>` bodies are consumed and
//! discarded: this crate never interprets either.

use std::collections::HashMap;

use crate::dom::{Dom, NodeId};
use crate::{Error, Result};

pub(crate) fn parse_html(html: &str) -> Result<Dom> {
    let mut dom = Dom::new();
    let bytes = html.as_bytes();
    let mut stack: Vec<NodeId> = vec![dom.root];
    let mut i = 0usize;
    let mut text_start = 0usize;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }

        flush_text(&mut dom, &stack, html, text_start, i);

        if starts_with_at(bytes, i, b"<!--") {
            let end = find_subslice(bytes, i + 4, b"-->")
                .ok_or_else(|| Error::HtmlParse("unterminated comment".into()))?;
            i = end + 3;
            text_start = i;
            continue;
        }

        if starts_with_at(bytes, i, b"<!") {
            let end = find_byte(bytes, i, b'>')
                .ok_or_else(|| Error::HtmlParse("unterminated declaration".into()))?;
            i = end + 1;
            text_start = i;
            continue;
        }

        if starts_with_at(bytes, i, b"</") {
            let (tag, next) = parse_end_tag(html, i)?;
            close_tag(&mut stack, &dom, &tag);
            i = next;
            text_start = i;
            continue;
        }

        let (tag, attrs, self_closing, next) = parse_start_tag(html, i)?;
        i = next;

        if tag == "script" || tag == "style" {
            let close = format!("</{tag}");
            let end = find_subslice(bytes, i, close.as_bytes())
                .ok_or_else(|| Error::HtmlParse(format!("unterminated <{tag}>")))?;
            let after = find_byte(bytes, end, b'>')
                .ok_or_else(|| Error::HtmlParse(format!("unterminated </{tag}>")))?;
            i = after + 1;
            text_start = i;
            continue;
        }

        let parent = stack.last().copied().unwrap_or(dom.root);
        let node = dom.create_element(parent, tag.clone(), attrs);
        if !self_closing && !is_void_tag(&tag) {
            stack.push(node);
        }
        text_start = i;
    }

    flush_text(&mut dom, &stack, html, text_start, bytes.len());
    Ok(dom)
}

fn flush_text(dom: &mut Dom, stack: &[NodeId], html: &str, from: usize, to: usize) {
    if from >= to {
        return;
    }
    let raw = &html[from..to];
    if raw.trim().is_empty() {
        return;
    }
    let parent = stack.last().copied().unwrap_or(dom.root);
    dom.create_text(parent, decode_character_references(raw));
}

fn close_tag(stack: &mut Vec<NodeId>, dom: &Dom, tag: &str) {
    // Pop to the nearest matching open tag; an unmatched end tag is ignored.
    if let Some(pos) = stack.iter().rposition(|node| {
        dom.tag_name(*node)
            .map(|name| name.eq_ignore_ascii_case(tag))
            .unwrap_or(false)
    }) {
        stack.truncate(pos);
    }
}

fn parse_start_tag(html: &str, at: usize) -> Result<(String, HashMap<String, String>, bool, usize)> {
    let bytes = html.as_bytes();
    let mut i = at + 1;

    let tag_start = i;
    while i < bytes.len() && is_tag_char(bytes[i]) {
        i += 1;
    }
    if i == tag_start {
        return Err(Error::HtmlParse(format!(
            "malformed tag at byte {at}: {}",
            snippet(html, at)
        )));
    }
    let tag = html[tag_start..i].to_ascii_lowercase();

    let mut attrs = HashMap::new();
    let mut self_closing = false;
    loop {
        skip_ws(bytes, &mut i);
        if i >= bytes.len() {
            return Err(Error::HtmlParse(format!("unterminated <{tag}>")));
        }
        if bytes[i] == b'>' {
            i += 1;
            break;
        }
        if bytes[i] == b'/' {
            self_closing = true;
            i += 1;
            continue;
        }

        let name_start = i;
        while i < bytes.len() && is_attr_name_char(bytes[i]) {
            i += 1;
        }
        if i == name_start {
            return Err(Error::HtmlParse(format!(
                "malformed attribute in <{tag}>: {}",
                snippet(html, i)
            )));
        }
        let name = html[name_start..i].to_ascii_lowercase();

        skip_ws(bytes, &mut i);
        let value = if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            skip_ws(bytes, &mut i);
            parse_attr_value(html, bytes, &mut i)?
        } else {
            String::new()
        };
        attrs.insert(name, decode_character_references(&value));
    }

    Ok((tag, attrs, self_closing, i))
}

fn parse_attr_value(html: &str, bytes: &[u8], i: &mut usize) -> Result<String> {
    if *i >= bytes.len() {
        return Err(Error::HtmlParse("unterminated attribute value".into()));
    }
    let quote = bytes[*i];
    if quote == b'"' || quote == b'\'' {
        *i += 1;
        let start = *i;
        let end = find_byte(bytes, *i, quote)
            .ok_or_else(|| Error::HtmlParse("unterminated quoted attribute".into()))?;
        *i = end + 1;
        Ok(html[start..end].to_string())
    } else {
        let start = *i;
        while *i < bytes.len() && !bytes[*i].is_ascii_whitespace() && bytes[*i] != b'>' {
            *i += 1;
        }
        Ok(html[start..*i].to_string())
    }
}

fn parse_end_tag(html: &str, at: usize) -> Result<(String, usize)> {
    let bytes = html.as_bytes();
    let mut i = at + 2;
    let tag_start = i;
    while i < bytes.len() && is_tag_char(bytes[i]) {
        i += 1;
    }
    if i == tag_start {
        return Err(Error::HtmlParse(format!(
            "malformed end tag: {}",
            snippet(html, at)
        )));
    }
    let tag = html[tag_start..i].to_ascii_lowercase();
    let end = find_byte(bytes, i, b'>')
        .ok_or_else(|| Error::HtmlParse(format!("unterminated </{tag}>")))?;
    Ok((tag, end + 1))
}

fn decode_character_references(src: &str) -> String {
    if !src.contains('&') {
        return src.to_string();
    }
    let mut out = String::with_capacity(src.len());
    let mut rest = src;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        // Entity names are short; a distant semicolon means a bare ampersand.
        let Some(end) = rest.find(';').filter(|&end| end <= 10) else {
            out.push('&');
            rest = &rest[1..];
            continue;
        };
        let entity = &rest[1..end];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some('\u{a0}'),
            _ => decode_numeric_reference(entity),
        };
        match decoded {
            Some(ch) => {
                out.push(ch);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_numeric_reference(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };
    char::from_u32(code)
}

fn skip_ws(bytes: &[u8], i: &mut usize) {
    while *i < bytes.len() && bytes[*i].is_ascii_whitespace() {
        *i += 1;
    }
}

fn is_tag_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

fn is_attr_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn starts_with_at(bytes: &[u8], at: usize, needle: &[u8]) -> bool {
    bytes.len() >= at + needle.len() && &bytes[at..at + needle.len()] == needle
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes[from..].iter().position(|b| *b == needle).map(|p| from + p)
}

fn find_subslice(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || bytes.len() < needle.len() {
        return None;
    }
    (from..=bytes.len() - needle.len()).find(|&at| &bytes[at..at + needle.len()] == needle)
}

fn snippet(html: &str, at: usize) -> String {
    let end = html
        .char_indices()
        .map(|(idx, _)| idx)
        .filter(|idx| *idx >= at)
        .nth(30)
        .unwrap_or(html.len());
    html[at..end].to_string()
}
