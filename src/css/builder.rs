//! Incremental assembly of CSS rule blocks

use super::CssConfig;

/// A single rule: class selector plus its declarations
#[derive(Debug, Clone)]
struct Rule {
    class: String,
    declarations: Vec<(String, String)>,
}

/// Build CSS rules incrementally
pub struct CssBuilder {
    config: CssConfig,
    rules: Vec<Rule>,
}

impl CssBuilder {
    /// Create a new CSS builder
    pub fn new(config: CssConfig) -> Self {
        Self {
            config,
            rules: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    /// Start a new rule for the given class suffix (prefix applied)
    pub fn start_rule(&mut self, class: &str) {
        let class = format!("{}{}", self.prefix(), class);
        self.rules.push(Rule {
            class,
            declarations: vec![],
        });
    }

    /// Add a declaration to the current rule.
    ///
    /// Declarations before the first `start_rule` are dropped.
    pub fn decl(&mut self, property: &str, value: impl Into<String>) {
        if let Some(rule) = self.rules.last_mut() {
            rule.declarations.push((property.to_string(), value.into()));
        }
    }

    /// Build the final stylesheet string
    pub fn build(self) -> String {
        let mut css = String::new();

        for (i, rule) in self.rules.iter().enumerate() {
            if self.config.pretty_print {
                if i > 0 {
                    css.push('\n');
                }
                css.push_str(&format!(".{} {{\n", rule.class));
                for (property, value) in &rule.declarations {
                    css.push_str(&format!("  {}: {};\n", property, value));
                }
                css.push_str("}\n");
            } else {
                let body = rule
                    .declarations
                    .iter()
                    .map(|(property, value)| format!("{}:{}", property, value))
                    .collect::<Vec<_>>()
                    .join(";");
                css.push_str(&format!(".{}{{{}}}", rule.class, body));
            }
        }

        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_output() {
        let mut builder = CssBuilder::new(CssConfig::default());
        builder.start_rule("overlay");
        builder.decl("background", "red");
        builder.decl("opacity", "0.5");
        let css = builder.build();

        insta::assert_snapshot!(css, @r###"
        .ov-overlay {
          background: red;
          opacity: 0.5;
        }
        "###);
    }

    #[test]
    fn test_compact_output() {
        let config = CssConfig::default().with_pretty_print(false);
        let mut builder = CssBuilder::new(config);
        builder.start_rule("overlay");
        builder.decl("background", "red");
        builder.decl("opacity", "0.5");
        let css = builder.build();

        assert_eq!(css, ".ov-overlay{background:red;opacity:0.5}");
    }

    #[test]
    fn test_prefix_applied_to_every_rule() {
        let config = CssConfig::default().with_class_prefix("brand-");
        let mut builder = CssBuilder::new(config);
        builder.start_rule("overlay");
        builder.decl("background", "red");
        builder.start_rule("logo");
        builder.decl("left", "50%");
        let css = builder.build();

        assert!(css.contains(".brand-overlay"));
        assert!(css.contains(".brand-logo"));
    }

    #[test]
    fn test_without_prefix() {
        let config = CssConfig::default().without_class_prefix();
        let mut builder = CssBuilder::new(config);
        builder.start_rule("overlay");
        builder.decl("background", "red");
        let css = builder.build();

        assert!(css.contains(".overlay {"));
    }

    #[test]
    fn test_declaration_without_rule_is_dropped() {
        let mut builder = CssBuilder::new(CssConfig::default());
        builder.decl("background", "red");
        assert_eq!(builder.build(), "");
    }
}
