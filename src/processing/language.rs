//! Programming language definitions and detection.
//!
//! Detection is extension-only: the lower-cased extension is looked up in a
//! fixed table and anything not listed is `Language::Unknown`.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Languages recognised by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    // Web
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
    Html,
    Css,
    Scss,

    // General purpose
    Python,
    Java,
    C,
    Cpp,
    CSharp,
    Go,
    Ruby,
    Php,
    Swift,
    Kotlin,
    Rust,

    // Data/markup
    Json,
    Markdown,
    Xml,
    Yaml,

    // Scripts
    Shell,
    Batch,
    PowerShell,

    Unknown,
}

impl Language {
    /// Get the label written to artifacts and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Jsx => "jsx",
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::Html => "html",
            Language::Css => "css",
            Language::Scss => "scss",
            Language::Python => "python",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Ruby => "ruby",
            Language::Php => "php",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Rust => "rust",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::Xml => "xml",
            Language::Yaml => "yaml",
            Language::Shell => "shell",
            Language::Batch => "batch",
            Language::PowerShell => "powershell",
            Language::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extension table, keys include the leading dot.
pub const EXTENSION_TABLE: &[(&str, Language)] = &[
    (".js", Language::JavaScript),
    (".jsx", Language::Jsx),
    (".ts", Language::TypeScript),
    (".tsx", Language::Tsx),
    (".py", Language::Python),
    (".java", Language::Java),
    (".c", Language::C),
    (".cpp", Language::Cpp),
    (".h", Language::C),
    (".hpp", Language::Cpp),
    (".cs", Language::CSharp),
    (".go", Language::Go),
    (".rb", Language::Ruby),
    (".php", Language::Php),
    (".swift", Language::Swift),
    (".kt", Language::Kotlin),
    (".rs", Language::Rust),
    (".html", Language::Html),
    (".css", Language::Css),
    (".scss", Language::Scss),
    (".json", Language::Json),
    (".md", Language::Markdown),
    (".xml", Language::Xml),
    (".yaml", Language::Yaml),
    (".yml", Language::Yaml),
    (".sh", Language::Shell),
    (".bat", Language::Batch),
    (".ps1", Language::PowerShell),
];

/// Extension-based language detector.
pub struct LanguageDetector {
    extension_map: HashMap<&'static str, Language>,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector {
    /// Create a detector loaded with the default extension table.
    pub fn new() -> Self {
        Self {
            extension_map: EXTENSION_TABLE.iter().copied().collect(),
        }
    }

    /// Detect the language of `path` from its extension.
    pub fn detect(&self, path: impl AsRef<Path>) -> Language {
        let Some(extension) = path.as_ref().extension().and_then(|e| e.to_str()) else {
            return Language::Unknown;
        };

        let ext_key = format!(".{}", extension.to_lowercase());
        self.extension_map
            .get(ext_key.as_str())
            .copied()
            .unwrap_or(Language::Unknown)
    }
}
