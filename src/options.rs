//! Configuration options for the filter.
//!
//! [`FilterOptions`] is parsed from the command line by `fz` (with the `cli`
//! feature) and can be built programmatically through [`FilterOptionsBuilder`].

use derive_builder::Builder;

/// How matching records are written out
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", value(rename_all = "snake_case"))]
pub enum OutputFormat {
    /// The matching record itself, optionally with its score and highlights
    #[default]
    Plain,
    /// One JSON object per record: `{"text": ..., "score": ..., "indices": [...]}`
    Json,
}

/// fz - subsequence fuzzy filter
///
/// Prints every candidate the query matches as a case-insensitive
/// subsequence, in input order. Candidates come from the arguments, or from
/// stdin when none are given.
///
/// Options are also read from the FUZZY_DEFAULT_OPTIONS environment variable;
/// flags given on the command line take precedence.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "fz", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct FilterOptions {
    //  --- Search ---
    /// Pattern to look for
    #[builder(setter(into, strip_option))]
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Search"))]
    pub query: Option<String>,

    //  --- Input ---
    /// Read input delimited by ASCII NUL characters instead of newlines
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input"))]
    pub read0: bool,

    /// Candidates to match; read from stdin when empty
    #[builder(setter(each(name = "haystack", into)))]
    #[cfg_attr(feature = "cli", arg(value_name = "HAYSTACK", help_heading = "Input"))]
    pub haystacks: Vec<String>,

    //  --- Output ---
    /// Output format
    #[cfg_attr(
        feature = "cli",
        arg(long, value_enum, default_value = "plain", help_heading = "Output")
    )]
    pub format: OutputFormat,

    /// Prefix each plain output line with its score and a tab
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub print_score: bool,

    /// Wrap matched characters in square brackets (plain format only)
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub highlight: bool,

    /// Print output delimited by ASCII NUL characters instead of newlines
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub print0: bool,
}

impl FilterOptions {
    /// Record delimiter on input.
    pub fn input_delimiter(&self) -> u8 {
        if self.read0 { b'\0' } else { b'\n' }
    }

    /// Record terminator on output.
    pub fn output_ending(&self) -> &'static str {
        if self.print0 { "\0" } else { "\n" }
    }
}
