use std::fs;

use serde::Serialize;

use lipi_core::search::SearchQuery;

use crate::die;

/// A line of the searched file whose key contains the query key.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SearchHit<'a> {
    pub line: usize,
    pub text: &'a str,
}

pub fn search_lines<'a>(term: &str, content: &'a str) -> Vec<SearchHit<'a>> {
    let query = SearchQuery::new(term);
    content
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty() && query.matches(text))
        .map(|(i, text)| SearchHit { line: i + 1, text })
        .collect()
}

pub fn search_cmd(term: &str, file: &str, json: bool) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let hits = search_lines(term, &content);
    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&hits), "Error encoding JSON: {}")
        );
        return;
    }
    for hit in &hits {
        println!("{:>5}: {}", hit.line, hit.text);
    }
    eprintln!(
        "{} match(es) for {:?} (key {:?})",
        hits.len(),
        term,
        SearchQuery::new(term).key()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYEES: &str = "सुरेश कुमार\nRamesh Traders\n\nSureesh Medical\nकिराना स्टोर\n";

    #[test]
    fn finds_both_scripts() {
        let hits = search_lines("suresh", PAYEES);
        assert_eq!(
            hits,
            vec![
                SearchHit {
                    line: 1,
                    text: "सुरेश कुमार"
                },
                SearchHit {
                    line: 4,
                    text: "Sureesh Medical"
                },
            ]
        );
    }

    #[test]
    fn blank_lines_never_match() {
        let hits = search_lines("", PAYEES);
        assert_eq!(hits.len(), 4);
        assert!(hits.iter().all(|h| h.line != 3));
    }

    #[test]
    fn devanagari_query() {
        let hits = search_lines("किराना", PAYEES);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].line, 5);
    }

    #[test]
    fn hits_serialize() {
        let hits = search_lines("ramesh", PAYEES);
        let json = serde_json::to_string(&hits).unwrap();
        assert_eq!(json, r#"[{"line":2,"text":"Ramesh Traders"}]"#);
    }
}
