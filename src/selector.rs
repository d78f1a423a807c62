//! CSS selector subset covering the behavior hooks: tag, `#id`, `.class`,
//! compound steps, `[attr]` / `[attr=value]`, descendant and child
//! combinators, and comma-separated groups. Anything else is rejected with
//! `Error::UnsupportedSelector` so a typo in a hook fails loudly instead of
//! silently matching nothing.

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SelectorAttrCondition {
    Exists { key: String },
    Eq { key: String, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SelectorStep {
    pub(crate) tag: Option<String>,
    pub(crate) universal: bool,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: Vec<SelectorAttrCondition>,
}

impl SelectorStep {
    pub(crate) fn id_only(&self) -> Option<&str> {
        if !self.universal && self.tag.is_none() && self.classes.is_empty() && self.attrs.is_empty()
        {
            self.id.as_deref()
        } else {
            None
        }
    }

    fn is_empty(&self) -> bool {
        !self.universal
            && self.tag.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attrs.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectorCombinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectorPart {
    pub(crate) step: SelectorStep,
    // Relation to previous (left) selector part.
    pub(crate) combinator: Option<SelectorCombinator>,
}

pub(crate) fn parse_selector_groups(selector: &str) -> Result<Vec<Vec<SelectorPart>>> {
    let mut groups = Vec::new();
    for group in selector.split(',') {
        groups.push(parse_selector_chain(group)?);
    }
    Ok(groups)
}

pub(crate) fn parse_selector_chain(selector: &str) -> Result<Vec<SelectorPart>> {
    let trimmed = selector.trim();
    if trimmed.is_empty() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }

    let tokens = tokenize_selector(trimmed)?;
    let mut parts: Vec<SelectorPart> = Vec::new();
    let mut pending_combinator: Option<SelectorCombinator> = None;

    for token in tokens {
        if token == ">" {
            if pending_combinator.is_some() || parts.is_empty() {
                return Err(Error::UnsupportedSelector(trimmed.into()));
            }
            pending_combinator = Some(SelectorCombinator::Child);
            continue;
        }

        let step = parse_selector_step(&token)?;
        let combinator = if parts.is_empty() {
            None
        } else {
            Some(pending_combinator.unwrap_or(SelectorCombinator::Descendant))
        };
        pending_combinator = None;
        parts.push(SelectorPart { step, combinator });
    }

    if pending_combinator.is_some() || parts.is_empty() {
        return Err(Error::UnsupportedSelector(trimmed.into()));
    }
    Ok(parts)
}

fn tokenize_selector(selector: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_brackets = false;

    for ch in selector.chars() {
        match ch {
            '[' => {
                if in_brackets {
                    return Err(Error::UnsupportedSelector(selector.into()));
                }
                in_brackets = true;
                current.push(ch);
            }
            ']' => {
                if !in_brackets {
                    return Err(Error::UnsupportedSelector(selector.into()));
                }
                in_brackets = false;
                current.push(ch);
            }
            c if c.is_whitespace() && !in_brackets => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            '>' if !in_brackets => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(">".to_string());
            }
            _ => current.push(ch),
        }
    }
    if in_brackets {
        return Err(Error::UnsupportedSelector(selector.into()));
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

fn parse_selector_step(token: &str) -> Result<SelectorStep> {
    let mut step = SelectorStep::default();
    let bytes = token.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'*' => {
                if step.universal || step.tag.is_some() || i != 0 {
                    return Err(Error::UnsupportedSelector(token.into()));
                }
                step.universal = true;
                i += 1;
            }
            b'#' => {
                let (ident, next) = parse_selector_ident(token, i + 1)
                    .ok_or_else(|| Error::UnsupportedSelector(token.into()))?;
                if step.id.is_some() {
                    return Err(Error::UnsupportedSelector(token.into()));
                }
                step.id = Some(ident);
                i = next;
            }
            b'.' => {
                let (ident, next) = parse_selector_ident(token, i + 1)
                    .ok_or_else(|| Error::UnsupportedSelector(token.into()))?;
                step.classes.push(ident);
                i = next;
            }
            b'[' => {
                let close = token[i..]
                    .find(']')
                    .map(|offset| i + offset)
                    .ok_or_else(|| Error::UnsupportedSelector(token.into()))?;
                let body = &token[i + 1..close];
                step.attrs.push(parse_selector_attr_condition(body, token)?);
                i = close + 1;
            }
            b':' | b'+' | b'~' => {
                return Err(Error::UnsupportedSelector(token.into()));
            }
            _ => {
                let (ident, next) = parse_selector_ident(token, i)
                    .ok_or_else(|| Error::UnsupportedSelector(token.into()))?;
                if i != 0 || step.tag.is_some() || step.universal {
                    return Err(Error::UnsupportedSelector(token.into()));
                }
                step.tag = Some(ident.to_ascii_lowercase());
                i = next;
            }
        }
    }

    if step.is_empty() {
        return Err(Error::UnsupportedSelector(token.into()));
    }
    Ok(step)
}

fn parse_selector_attr_condition(body: &str, token: &str) -> Result<SelectorAttrCondition> {
    let body = body.trim();
    if body.is_empty() {
        return Err(Error::UnsupportedSelector(token.into()));
    }

    let Some((key, value)) = body.split_once('=') else {
        if !body.bytes().all(is_selector_attr_name_char) {
            return Err(Error::UnsupportedSelector(token.into()));
        }
        return Ok(SelectorAttrCondition::Exists {
            key: body.to_ascii_lowercase(),
        });
    };

    let key = key.trim();
    // Reject ^= / $= / *= / ~= / |= operators.
    if key.is_empty() || !key.bytes().all(is_selector_attr_name_char) {
        return Err(Error::UnsupportedSelector(token.into()));
    }

    let value = value.trim();
    let value = if (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
        || (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2)
    {
        &value[1..value.len() - 1]
    } else {
        value
    };

    Ok(SelectorAttrCondition::Eq {
        key: key.to_ascii_lowercase(),
        value: value.to_string(),
    })
}

fn parse_selector_ident(src: &str, start: usize) -> Option<(String, usize)> {
    let bytes = src.as_bytes();
    let mut end = start;
    while end < bytes.len() && is_selector_ident_char(bytes[end]) {
        end += 1;
    }
    if end == start {
        return None;
    }
    Some((src[start..end].to_string(), end))
}

fn is_selector_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

fn is_selector_attr_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_step_with_classes_and_attr() -> Result<()> {
        let chain = parse_selector_chain("button.slider-btn.prev")?;
        assert_eq!(chain.len(), 1);
        let step = &chain[0].step;
        assert_eq!(step.tag.as_deref(), Some("button"));
        assert_eq!(step.classes, vec!["slider-btn", "prev"]);

        let chain = parse_selector_chain("input[type=email]")?;
        assert_eq!(
            chain[0].step.attrs,
            vec![SelectorAttrCondition::Eq {
                key: "type".into(),
                value: "email".into()
            }]
        );

        let chain = parse_selector_chain(".product-card[data-category]")?;
        assert_eq!(
            chain[0].step.attrs,
            vec![SelectorAttrCondition::Exists {
                key: "data-category".into()
            }]
        );
        Ok(())
    }

    #[test]
    fn combinators_and_groups_parse() -> Result<()> {
        let chain = parse_selector_chain(".mobile-nav a")?;
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[1].combinator, Some(SelectorCombinator::Descendant));

        let chain = parse_selector_chain("ul > li")?;
        assert_eq!(chain[1].combinator, Some(SelectorCombinator::Child));

        let groups = parse_selector_groups(".nav-links a, .mobile-nav a")?;
        assert_eq!(groups.len(), 2);
        Ok(())
    }

    #[test]
    fn quoted_attr_values_are_unwrapped() -> Result<()> {
        let chain = parse_selector_chain(r#"input[type="email"]"#)?;
        assert_eq!(
            chain[0].step.attrs,
            vec![SelectorAttrCondition::Eq {
                key: "type".into(),
                value: "email".into()
            }]
        );
        Ok(())
    }

    #[test]
    fn unsupported_syntax_is_rejected() {
        for selector in [
            "",
            "  ",
            "li:first-child",
            "a + b",
            "a ~ b",
            "[href^=http]",
            "div >",
            "..broken",
        ] {
            assert!(
                matches!(
                    parse_selector_groups(selector),
                    Err(Error::UnsupportedSelector(_))
                ),
                "expected rejection for {selector:?}"
            );
        }
    }
}
