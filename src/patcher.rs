//! Rewrites the category page product-loading script
//!
//! Category pages used to call `loadCategoryProducts(category, gender)` from a
//! plain `DOMContentLoaded` handler right after `js/main.js`. That races the
//! Firebase module import, so the block is replaced by one that imports
//! `js/firebase-config.js` as a module first and loads products after a short
//! delay, keeping the page's own category and gender.
//!
//! # Matching
//!
//! The old block is matched verbatim (indentation included) with two captures:
//! the category and the gender literals. Every occurrence in a file is
//! replaced, each with its own captures, but the outcome only reports the
//! first match's pair.
//!
//! A patched file no longer matches, so a second run reports
//! "pattern not found" and leaves the file alone.

use anyhow::{Context, Result};
use regex::Regex;
use std::borrow::Cow;
use std::io::Write;

use crate::config::PatchConfig;
use crate::models::{PatchOutcome, PatchReport, PatchStatus};

/// The inline script block written by the old page template
pub const OLD_SCRIPT_PATTERN: &str = r#"    <script src="js/main\.js"></script>
    <script>
        // Load products filtered by category and gender
        document\.addEventListener\('DOMContentLoaded', async function\(\) \{
            await loadCategoryProducts\('([^']+)', '([^']+)'\);
        \}\);</script>"#;

/// Replacement block; `${1}` is the category and `${2}` the gender.
///
/// Ends by opening the page's own `loadCategoryProducts` definition, which
/// followed the old block in every template.
pub const NEW_SCRIPT_TEMPLATE: &str = r#"    <!-- Load Firebase first as module -->
    <script type="module">
        // Initialize Firebase
        import('./js/firebase-config.js');
    </script>
    <script src="js/main.js"></script>
    <script type="module">
        // Make sure Firebase is ready before loading products
        import('./js/firebase-config.js').then(() => {
            setTimeout(async () => {
                await loadCategoryProducts('${1}', '${2}');
            }, 500);
        });

        async function loadCategoryProducts(category, gender) {"#;

/// Completion line printed after every file has been processed
pub const DONE_MESSAGE: &str = "Done!";

/// Content after a successful rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedContent {
    /// Full rewritten text
    pub content: String,
    /// Category captured by the first match
    pub category: String,
    /// Gender captured by the first match
    pub gender: String,
    /// Number of blocks replaced
    pub replacements: usize,
}

/// Applies the script rewrite to files
pub struct Patcher {
    pattern: Regex,
}

impl Patcher {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(OLD_SCRIPT_PATTERN)
            .context("Failed to compile script block pattern")?;
        Ok(Self { pattern })
    }

    /// Rewrite every old script block in `content`
    ///
    /// Returns `None` when there is nothing to replace.
    pub fn patch_content(&self, content: &str) -> Option<PatchedContent> {
        let first = self.pattern.captures(content)?;
        let category = first[1].to_string();
        let gender = first[2].to_string();

        let replacements = self.pattern.find_iter(content).count();
        let content = self
            .pattern
            .replace_all(content, NEW_SCRIPT_TEMPLATE)
            .into_owned();

        Some(PatchedContent {
            content,
            category,
            gender,
            replacements,
        })
    }

    /// Patch a single file under the configured base directory
    ///
    /// Missing files and files without the block are reported, not errors.
    /// Read, decode and write failures are. Line endings are read as text:
    /// `\r\n` and lone `\r` become `\n`, so a rewritten page is saved with LF
    /// endings while an unmatched page is never touched.
    pub fn patch_file(&self, config: &PatchConfig, file: &str) -> Result<PatchOutcome> {
        let path = config.path_for(file);

        if !path.exists() {
            log::debug!("{} does not exist", path.display());
            return Ok(PatchOutcome::FileNotFound { path });
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let content = normalize_newlines(&content);

        let Some(patched) = self.patch_content(&content) else {
            log::debug!("No script block in {}", path.display());
            return Ok(PatchOutcome::PatternNotFound {
                file: file.to_string(),
            });
        };

        if patched.replacements > 1 {
            log::warn!(
                "{} contains {} script blocks; reporting only the first (category={}, gender={})",
                file,
                patched.replacements,
                patched.category,
                patched.gender
            );
        }

        std::fs::write(&path, &patched.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        log::info!(
            "Rewrote {} (category={}, gender={}, blocks={})",
            path.display(),
            patched.category,
            patched.gender,
            patched.replacements
        );

        Ok(PatchOutcome::Fixed {
            file: file.to_string(),
            category: patched.category,
            gender: patched.gender,
        })
    }

    /// Process every configured file in order
    ///
    /// Each status line is written to `out` as soon as its file is done,
    /// followed by a blank line and the completion line.
    pub fn run<W: Write>(&self, config: &PatchConfig, out: &mut W) -> Result<PatchReport> {
        log::info!(
            "Patching {} files under {}",
            config.files.len(),
            config.base_dir.display()
        );

        let mut report = PatchReport::new();

        for file in &config.files {
            let outcome = self.patch_file(config, file)?;
            log::debug!("{}: {}", file, outcome.status());
            writeln!(out, "{}", outcome)?;
            report.push(outcome);
        }

        writeln!(out)?;
        writeln!(out, "{}", DONE_MESSAGE)?;
        out.flush()?;

        log::info!(
            "Finished: {} fixed, {} without pattern, {} missing",
            report.count(PatchStatus::Fixed),
            report.count(PatchStatus::PatternNotFound),
            report.count(PatchStatus::FileNotFound)
        );

        Ok(report)
    }
}

/// Translate `\r\n` and lone `\r` to `\n`
fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}
