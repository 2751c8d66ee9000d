//! Prompt construction for grounded explanations.
//!
//! The system instruction is fixed; the user instruction carries the
//! resource identity, the output language, and the context document
//! verbatim. Nothing here verifies the model's answer afterwards.

/// Output language of an explanation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    /// English (the default for any unrecognized code)
    #[default]
    English,
    /// German
    German,
}

impl Language {
    /// Maps a language code to a language.
    ///
    /// Codes starting with `de` (any case) select German; everything
    /// else, including the empty string, selects English.
    pub fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("de") {
            Language::German
        } else {
            Language::English
        }
    }

    /// English name used inside the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "German",
        }
    }
}

/// Fixed system instruction for every explanation.
pub const SYSTEM_PROMPT: &str = "\
You are an expert Terraform assistant. You receive structured documentation \
about one provider resource and its attributes for a specific provider version.

Explain the resource and its attributes clearly and accurately, using only the \
documentation you are given as ground truth. Never invent attributes, types, \
defaults or versions that are not in the provided context. If something is not \
present in the context, say that you do not have that information instead of \
guessing.

For every attribute you explain:
- state whether it is required or optional
- state the provider version it is available since, as given
- mention the version it was removed in, if one is given

Always reference the documentation URL from the context.
";

/// Builds the per-call user instruction.
pub fn user_prompt(resource_name: &str, version: &str, language: Language, context: &str) -> String {
    format!(
        "Explain the Terraform resource '{resource_name}' for provider version '{version}' in {}.\n\n\
         Use the following documentation as your only source of truth:\n\n\
         {context}\n\n\
         Do not invent additional attributes or options. If you are unsure about \
         something because it is not in the context, say so explicitly.",
        language.name()
    )
}
