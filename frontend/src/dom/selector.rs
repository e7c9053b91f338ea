/// One compound part of a selector, e.g. `tr`, `.nav-tab.active`, `#leaveModal`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Step {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Step {
    fn parse(part: &str) -> Self {
        let mut step = Step::default();
        let mut rest = part;
        let tag_end = rest.find(['.', '#']).unwrap_or(rest.len());
        if tag_end > 0 {
            step.tag = Some(rest[..tag_end].to_ascii_lowercase());
        }
        rest = &rest[tag_end..];
        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let name = body[..end].to_string();
            if marker == '#' {
                step.id = Some(name);
            } else {
                step.classes.push(name);
            }
            rest = &body[end..];
        }
        step
    }

    pub fn matches(&self, tag: &str, id: Option<&str>, has_class: impl Fn(&str) -> bool) -> bool {
        if let Some(want) = &self.tag {
            if !want.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(want) = &self.id {
            if id != Some(want.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| has_class(class))
    }
}

/// Compound selectors joined by the descendant combinator.
///
/// The browser backend hands [`Selector::css`] to the DOM; the in-memory
/// backend matches [`Selector::steps`] itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    css: String,
    steps: Vec<Step>,
}

impl Selector {
    pub fn parse(css: &str) -> Self {
        Self {
            css: css.trim().to_string(),
            steps: css.split_whitespace().map(Step::parse).collect(),
        }
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}
