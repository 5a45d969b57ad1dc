use askama::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Dark,
    Light,
}

impl ButtonVariant {
    fn css_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Dark => "btn-dark",
            ButtonVariant::Light => "btn-light",
        }
    }
}

/// Styled link that looks like a button.
#[derive(Debug, Clone, Template)]
#[template(path = "partials/button.html")]
pub struct ButtonView {
    pub label: String,
    pub href: String,
    pub css_class: String,
}

impl ButtonView {
    /// `extra_class` is appended to the variant's classes as is.
    pub fn new(label: &str, href: impl Into<String>, variant: ButtonVariant, extra_class: &str) -> Self {
        let css_class = if extra_class.is_empty() {
            format!("btn {}", variant.css_class())
        } else {
            format!("btn {} {}", variant.css_class(), extra_class)
        };
        Self {
            label: label.to_string(),
            href: href.into(),
            css_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes() {
        let html = ButtonView::new("Learn More", "service-1.html", ButtonVariant::Outline, "flex-1")
            .render()
            .unwrap();
        assert_eq!(
            html.trim_end(),
            r#"<a class="btn btn-outline flex-1" href="service-1.html">Learn More</a>"#
        );
    }

    #[test]
    fn test_label_and_href_are_escaped() {
        let html = ButtonView::new("Q&A", "a?x=1&y=2", ButtonVariant::Primary, "")
            .render()
            .unwrap();
        assert!(html.contains(r#"class="btn btn-primary""#));
        assert!(html.contains(r#"href="a?x=1&amp;y=2""#));
        assert!(html.contains(">Q&amp;A<"));
    }
}
