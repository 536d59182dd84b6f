use crate::models::GenerationResult;

pub const DOCUMENT_FILE_NAME: &str = "generated_component.html";

/// One of the three generated files, downloadable on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Html,
    Css,
    Javascript,
}

impl Artifact {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "html" => Some(Self::Html),
            "css" => Some(Self::Css),
            "javascript" | "js" => Some(Self::Javascript),
            _ => None,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Html => "index.html",
            Self::Css => "style.css",
            Self::Javascript => "script.js",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Css => "text/css",
            Self::Javascript => "text/javascript",
        }
    }

    pub fn contents(self, result: &GenerationResult) -> &str {
        match self {
            Self::Html => &result.html,
            Self::Css => &result.css,
            Self::Javascript => &result.javascript,
        }
    }
}

/// Stitches the three artifacts into one standalone page.
pub fn render_document(result: &GenerationResult) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Generated Component</title>
    <style>
{css}
    </style>
</head>
<body>
{html}
<script>
{javascript}
</script>
</body>
</html>"#,
        css = result.css,
        html = result.html,
        javascript = result.javascript,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> GenerationResult {
        GenerationResult {
            html: "<nav>Home</nav>".into(),
            css: "nav{color:#334155}".into(),
            javascript: "console.log(1)".into(),
        }
    }

    #[test]
    fn document_embeds_every_artifact() {
        let doc = render_document(&sample());
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<style>\nnav{color:#334155}\n    </style>"));
        assert!(doc.contains("<body>\n<nav>Home</nav>\n<script>"));
        assert!(doc.contains("<script>\nconsole.log(1)\n</script>"));
    }

    #[test]
    fn artifacts_map_to_files() {
        let result = sample();
        assert_eq!(Artifact::from_slug("css"), Some(Artifact::Css));
        assert_eq!(Artifact::from_slug("js"), Some(Artifact::Javascript));
        assert_eq!(Artifact::from_slug("pdf"), None);
        assert_eq!(Artifact::Javascript.file_name(), "script.js");
        assert_eq!(Artifact::Html.mime_type(), "text/html");
        assert_eq!(Artifact::Css.contents(&result), "nav{color:#334155}");
    }
}
