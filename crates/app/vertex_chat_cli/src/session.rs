//! Terminal front end for the chat bubble: print replies, open links.

use std::io::{BufRead, Write};

use tokio::runtime::Runtime;
use vertex_chat_core::actions::{ActionSink, LinkActionRecorder};
use vertex_chat_core::markup::{Link, extract_links};
use vertex_chat_core::responder::ChatBackend;

/// One line of interactive input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Open(usize),
    BadOpen(&'a str),
    Query(&'a str),
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed == ":quit" {
            return Input::Quit;
        }
        match trimmed.strip_prefix(":open") {
            Some(arg) => arg
                .trim()
                .parse()
                .map(Input::Open)
                .unwrap_or(Input::BadOpen(arg.trim())),
            None => Input::Query(line),
        }
    }
}

/// Prints a reply followed by its numbered links, returning the links.
pub fn print_reply(out: &mut impl Write, reply: &str) -> std::io::Result<Vec<Link>> {
    writeln!(out, "{reply}")?;
    let links = extract_links(reply);
    for (i, link) in links.iter().enumerate() {
        writeln!(out, "  [{}] {} -> {}", i + 1, link.label, link.href)?;
    }
    Ok(links)
}

/// Reads queries from `input` until EOF or `:quit`, one request at a time.
pub fn run<B, S>(
    runtime: &Runtime,
    backend: &B,
    recorder: &LinkActionRecorder<S>,
    input: impl BufRead,
    out: &mut impl Write,
) -> std::io::Result<()>
where
    B: ChatBackend + ?Sized,
    S: ActionSink,
{
    let mut last_links: Vec<Link> = Vec::new();

    for line in input.lines() {
        let line = line?;
        match Input::parse(&line) {
            Input::Quit => break,
            Input::Open(n) => match n.checked_sub(1).and_then(|i| last_links.get(i)) {
                Some(link) => recorder.record(&link.href),
                None => writeln!(out, "no link [{n}] in the last reply")?,
            },
            Input::BadOpen(arg) => writeln!(out, "usage: :open N (got '{arg}')")?,
            Input::Query(query) => {
                let reply = runtime.block_on(backend.respond(query)).content;
                last_links = print_reply(out, &reply)?;
            }
        }
        out.flush()?;
    }

    Ok(())
}
