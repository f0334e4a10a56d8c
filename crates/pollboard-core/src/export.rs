#![forbid(unsafe_code)]

//! Board export formatting.
//!
//! Polls are emitted in the caller's category sequence (the fixed column
//! order), then by order key inside each category; polls in categories not
//! listed sort last. Two formats:
//!
//! - plain text: description line, numbered option lines, blank line
//!   between polls;
//! - pipe-delimited: one record per line as `description|opt1|opt2|...`
//!   with `|` and newlines sanitized out of the fields, records separated
//!   by `---` lines, for consumption by the external chat-automation tool.

use crate::poll::{CategoryId, Poll, PollSet};

fn sanitize(text: &str) -> String {
    text.replace('|', "/").replace('\n', " ")
}

fn sorted_for_export<'a>(polls: &'a PollSet, category_sequence: &[CategoryId]) -> Vec<&'a Poll> {
    let rank = |category: &CategoryId| -> usize {
        category_sequence
            .iter()
            .position(|c| c == category)
            .unwrap_or(usize::MAX)
    };
    let mut list: Vec<&Poll> = polls.values().collect();
    list.sort_by(|a, b| {
        rank(&a.category)
            .cmp(&rank(&b.category))
            .then(a.order.total_cmp(&b.order))
    });
    list
}

/// Render the board as readable text, one block per poll.
#[must_use]
pub fn export_plain_text(polls: &PollSet, category_sequence: &[CategoryId]) -> String {
    let mut out = String::new();
    for poll in sorted_for_export(polls, category_sequence) {
        out.push_str(&poll.description);
        out.push('\n');
        for (index, option) in poll.options.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", index + 1, option.text.trim()));
        }
        out.push('\n');
    }
    let mut out = out.trim_end().to_owned();
    out.push('\n');
    out
}

/// Render the board as pipe-delimited records separated by `---` lines.
#[must_use]
pub fn export_pipe_delimited(polls: &PollSet, category_sequence: &[CategoryId]) -> String {
    let lines: Vec<String> = sorted_for_export(polls, category_sequence)
        .into_iter()
        .map(|poll| {
            let mut parts = vec![sanitize(&poll.description)];
            parts.extend(poll.options.iter().map(|o| sanitize(o.text.trim())));
            parts.join("|")
        })
        .collect();
    lines.join("\n---\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::{PollId, PollOption};

    fn poll(id: &str, category: &str, order: f64, description: &str, options: &[&str]) -> Poll {
        Poll {
            id: PollId::from(id),
            category: CategoryId::from(category),
            description: description.to_owned(),
            options: options
                .iter()
                .enumerate()
                .map(|(i, t)| PollOption::new(format!("o{i}"), *t))
                .collect(),
            tags: Vec::new(),
            thread_title: None,
            order,
        }
    }

    fn board(polls: &[Poll]) -> PollSet {
        polls
            .iter()
            .map(|p| (p.id.clone(), p.clone()))
            .collect()
    }

    fn sequence(ids: &[&str]) -> Vec<CategoryId> {
        ids.iter().map(|id| CategoryId::from(*id)).collect()
    }

    #[test]
    fn plain_text_orders_by_category_then_key() {
        let set = board(&[
            poll("z1", "ZERG", 10.0, "zerg question", &["yes", "no"]),
            poll("g1", "GENERAL", 20.0, "second general", &[]),
            poll("g0", "GENERAL", 10.0, "first general", &[]),
        ]);
        let text = export_plain_text(&set, &sequence(&["GENERAL", "ZERG"]));
        assert_eq!(
            text,
            "first general\n\nsecond general\n\nzerg question\n1. yes\n2. no\n"
        );
    }

    #[test]
    fn plain_text_trims_option_whitespace() {
        let set = board(&[poll("a", "ZERG", 10.0, "q", &["  padded  "])]);
        let text = export_plain_text(&set, &sequence(&["ZERG"]));
        assert_eq!(text, "q\n1. padded\n");
    }

    #[test]
    fn unknown_categories_sort_last() {
        let set = board(&[
            poll("m", "MYSTERY", 10.0, "mystery", &[]),
            poll("z", "ZERG", 10.0, "zerg", &[]),
        ]);
        let text = export_plain_text(&set, &sequence(&["ZERG"]));
        assert!(text.starts_with("zerg\n"));
    }

    #[test]
    fn pipe_format_joins_and_separates() {
        let set = board(&[
            poll("a", "ZERG", 10.0, "first", &["yes", "no"]),
            poll("b", "ZERG", 20.0, "second", &["ok"]),
        ]);
        let text = export_pipe_delimited(&set, &sequence(&["ZERG"]));
        assert_eq!(text, "first|yes|no\n---\nsecond|ok");
    }

    #[test]
    fn pipe_format_sanitizes_fields() {
        let set = board(&[poll("a", "ZERG", 10.0, "a|b\nc", &["x|y"])]);
        let text = export_pipe_delimited(&set, &sequence(&["ZERG"]));
        assert_eq!(text, "a/b c|x/y");
    }

    #[test]
    fn empty_board_exports_cleanly() {
        let set = PollSet::new();
        assert_eq!(export_plain_text(&set, &[]), "\n");
        assert_eq!(export_pipe_delimited(&set, &[]), "");
    }
}
