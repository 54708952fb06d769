use fuzzysearch::{FilterOptions, FilterOptionsBuilder, OutputFormat, filter};

const INPUT: &str = "\
src/lib.rs
src/filter.rs
src/fuzzy_matcher/scored.rs
src/fuzzy_matcher/subsequence.rs
benches/matcher_micro.rs
MyFile.txt
my_other_file.txt
README.md
";

fn run(options: &FilterOptions) -> String {
    let mut output = Vec::new();
    filter(options, INPUT.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn filter_plain() {
    let options = FilterOptionsBuilder::default().query("sfs").build().unwrap();
    insta::assert_snapshot!(run(&options), @r"
src/filter.rs
src/fuzzy_matcher/scored.rs
src/fuzzy_matcher/subsequence.rs
");
}

#[test]
fn filter_highlight() {
    let options = FilterOptionsBuilder::default().query("mf").highlight(true).build().unwrap();
    insta::assert_snapshot!(run(&options), @r"
[M]y[F]ile.txt
[m]y_other_[f]ile.txt
");
}

#[test]
fn filter_highlight_word_starts() {
    let options = FilterOptionsBuilder::default().query("fm").highlight(true).build().unwrap();
    insta::assert_snapshot!(run(&options), @r"
src/[f]uzzy_[m]atcher/scored.rs
src/[f]uzzy_[m]atcher/subsequence.rs
");
}

#[test]
fn filter_json() {
    let options = FilterOptionsBuilder::default()
        .query("mf")
        .format(OutputFormat::Json)
        .build()
        .unwrap();
    insta::assert_snapshot!(run(&options), @r#"
{"text":"MyFile.txt","score":12,"indices":[0,2]}
{"text":"my_other_file.txt","score":5,"indices":[0,9]}
"#);
}

#[test]
fn filter_no_match() {
    let options = FilterOptionsBuilder::default().query("zzz").build().unwrap();
    let mut output = Vec::new();
    assert_eq!(filter(&options, INPUT.as_bytes(), &mut output).unwrap(), 0);
    assert!(output.is_empty());
}
