//! Line filter: match every input record against one query.
//!
//! Matching records are written in input order; ranking them is left to
//! the consumer (`--print-score` or `--format json` expose the score).

use std::borrow::Cow;
use std::io::{BufRead, Write};

use serde::Serialize;

use crate::error::MatchError;
use crate::fuzzy_matcher::util::wrap_matches;
use crate::fuzzy_matcher::{FuzzyMatcher, IndexType, ScoreType, SubsequenceMatcher};
use crate::options::{FilterOptions, OutputFormat};

/// JSON shape of a matching record
#[derive(Serialize)]
struct MatchRecord<'a> {
    text: &'a str,
    score: ScoreType,
    indices: &'a [IndexType],
}

/// Write the records matching `options.query` to `output`, and return how many matched.
///
/// Records are `options.haystacks` when it is not empty; otherwise they are
/// read from `input`, split on [`FilterOptions::input_delimiter`]. Empty
/// records never match.
///
/// Fails with [`MatchError::InvalidArgument`] when no query is set.
///
/// ```
/// use fuzzysearch::{FilterOptionsBuilder, filter};
///
/// let options = FilterOptionsBuilder::default().query("mf").build().unwrap();
/// let mut output = Vec::new();
/// let matched = filter(&options, "MyFile.txt\nREADME.md\nmain.rs\n".as_bytes(), &mut output).unwrap();
/// assert_eq!(matched, 1);
/// assert_eq!(output, b"MyFile.txt\n");
/// ```
pub fn filter<R: BufRead, W: Write>(options: &FilterOptions, input: R, mut output: W) -> Result<usize, MatchError> {
    let query = options.query.as_deref().ok_or(MatchError::InvalidArgument("pattern"))?;
    let matcher = SubsequenceMatcher::new();
    debug!("filter: query {:?}, format {:?}", query, options.format);

    let mut total = 0;
    let mut matched = 0;
    let mut emit = |record: &str| -> Result<(), MatchError> {
        total += 1;
        if let Some((score, indices)) = matcher.fuzzy_indices(record, query) {
            matched += 1;
            write_record(options, &mut output, record, score, &indices)?;
        }
        Ok(())
    };

    if options.haystacks.is_empty() {
        for record in input.split(options.input_delimiter()) {
            let record = record?;
            emit(&strip_carriage_return(options, String::from_utf8_lossy(&record)))?;
        }
    } else {
        for record in &options.haystacks {
            emit(record)?;
        }
    }

    output.flush()?;
    debug!("filter: {} of {} records matched", matched, total);
    Ok(matched)
}

// newline-delimited input may come with CRLF endings
fn strip_carriage_return<'a>(options: &FilterOptions, record: Cow<'a, str>) -> Cow<'a, str> {
    if options.read0 {
        return record;
    }
    match record.strip_suffix('\r') {
        Some(stripped) => Cow::Owned(stripped.to_owned()),
        None => record,
    }
}

fn write_record<W: Write>(
    options: &FilterOptions,
    output: &mut W,
    record: &str,
    score: ScoreType,
    indices: &[IndexType],
) -> Result<(), MatchError> {
    match options.format {
        OutputFormat::Plain => {
            if options.print_score {
                write!(output, "{score}\t")?;
            }
            if options.highlight {
                write!(output, "{}", wrap_matches(record, indices))?;
            } else {
                write!(output, "{record}")?;
            }
        }
        OutputFormat::Json => {
            let line = serde_json::to_string(&MatchRecord {
                text: record,
                score,
                indices,
            })?;
            write!(output, "{line}")?;
        }
    }
    write!(output, "{}", options.output_ending())?;
    Ok(())
}
