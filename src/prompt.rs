use serde_json::Value;

use crate::schema::response_schema;

const DESCRIPTION_SLOT: &str = "{{description}}";

pub const GENERATE_CODE_TEMPLATE: &str = r#"You are a web development expert specializing in modern, clean design. Generate HTML, CSS, and JavaScript code based on the user's description. Return the code snippets in separate fields.

Description: {{description}}

IMPORTANT COLOR GUIDELINES:
When the user specifies colors (like purple, blue, red, etc.), ALWAYS use proper CSS color names or hex codes:
- purple: #800080 or purple
- blue: #0000ff or blue
- red: #ff0000 or red
- green: #008000 or green
- yellow: #ffff00 or yellow
- orange: #ffa500 or orange

ENSURE that colors are applied correctly and visibly in the CSS. For example, if asked for a "purple button":
- Use button { background-color: purple; } or button { background-color: #800080; }
- Make sure text has sufficient contrast (e.g., white text on dark buttons)
- Apply the color to the correct element as specified in the description

Ensure HTML is semantic and well-structured.
If no specific colors are requested, style the CSS using:
- Primary color: Slate gray (#334155)
- Secondary color: Light gray (#cbd5e1)
- Accent color: Teal (#2dd4bf)

Always use a clean, modern sans-serif font stack.
The JavaScript should enhance functionality if described, otherwise keep it minimal.

Do not include code section comments.
Return ONLY the raw code for each section.
"#;

/// Instruction template plus the schema the reply must satisfy.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct PromptSpec {
    template: &'static str,
    response_schema: Value,
}

impl PromptSpec {
    pub fn compile() -> serde_json::Result<Self> {
        Ok(Self {
            template: GENERATE_CODE_TEMPLATE,
            response_schema: response_schema()?,
        })
    }

    pub fn response_schema(&self) -> &Value {
        &self.response_schema
    }

    /// Fills the description slot. The description is inserted as-is, so
    /// braces inside it are never reinterpreted.
    pub fn render(&self, enhanced_description: &str) -> String {
        self.template.replacen(DESCRIPTION_SLOT, enhanced_description, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_has_exactly_one_slot() {
        assert_eq!(GENERATE_CODE_TEMPLATE.matches(DESCRIPTION_SLOT).count(), 1);
    }

    #[test]
    fn render_interpolates_description() {
        let spec = PromptSpec::compile().unwrap();
        let prompt = spec.render("a login form with {{description}} literally in it");
        assert!(prompt.contains("Description: a login form with {{description}} literally in it\n"));
        assert!(prompt.starts_with("You are a web development expert"));
    }

    #[test]
    fn template_carries_style_guide() {
        for needle in ["#334155", "#cbd5e1", "#2dd4bf", "sans-serif", "semantic", "Do not include code section comments.", "Return ONLY the raw code"] {
            assert!(GENERATE_CODE_TEMPLATE.contains(needle), "{needle}");
        }
    }
}
