use crate::client::ProfileSource;
use crate::fetcher;
use crate::render;
use crate::session::SearchSession;
use std::io::{BufRead, Write};

const PROMPT: &str = "GitHub username (:more to toggle, :quit to leave)> ";

enum Input<'a> {
    Search(&'a str),
    Toggle,
    Quit,
    Nothing,
}

fn parse_line(line: &str) -> Input<'_> {
    match line.trim() {
        "" => Input::Nothing,
        ":q" | ":quit" | ":exit" => Input::Quit,
        ":m" | ":more" | ":less" | ":toggle" => Input::Toggle,
        handle => Input::Search(handle),
    }
}

/// Read handles from `input` until EOF or `:quit`, redrawing the view after
/// every search or toggle.
pub fn run_session<R: BufRead, W: Write>(
    source: &dyn ProfileSource,
    session: &mut SearchSession,
    input: R,
    out: &mut W,
) -> std::io::Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Input::Quit => break,
            Input::Nothing => {}
            Input::Toggle => {
                if session.has_more() {
                    session.toggle_show_all();
                    write!(out, "{}", render::session_view(session))?;
                } else {
                    writeln!(out, "Nothing to toggle.")?;
                }
            }
            Input::Search(handle) => {
                if let Some(ticket) = session.begin_search(handle) {
                    write!(out, "{}", render::session_view(session))?;
                    out.flush()?;
                    let result = fetcher::fetch_profile(source, handle, session.fetch_options());
                    session.complete_search(ticket, result);
                    write!(out, "{}", render::session_view(session))?;
                }
            }
        }
        write!(out, "\n{}", PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::{Call, FakeSource};
    use crate::session::FetchStatus;
    use crate::types::fixtures;
    use std::io::Cursor;

    fn drive(source: &FakeSource, script: &str) -> (SearchSession, String) {
        let mut session = SearchSession::default();
        let mut out = Vec::new();
        run_session(
            source,
            &mut session,
            Cursor::new(script.to_string()),
            &mut out,
        )
        .unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn search_then_toggle() {
        let source = FakeSource::found(fixtures::profile("octocat"), fixtures::repositories(8));
        let (session, out) = drive(&source, "octocat\n:more\n");

        assert_eq!(session.status(), FetchStatus::Success);
        assert!(session.show_all());
        assert!(out.contains(render::LOADING));
        assert!(out.contains("[Show All (8)]"));
        assert!(out.contains("[Show Less]"));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let source = FakeSource::found(fixtures::profile("octocat"), fixtures::repositories(2));
        let (session, _) = drive(&source, "\n   \n");
        assert_eq!(session.status(), FetchStatus::Idle);
        assert!(source.calls().is_empty());
    }

    #[test]
    fn quit_stops_reading() {
        let source = FakeSource::found(fixtures::profile("octocat"), fixtures::repositories(2));
        let (session, _) = drive(&source, ":quit\noctocat\n");
        assert_eq!(session.status(), FetchStatus::Idle);
        assert!(source.calls().is_empty());
    }

    #[test]
    fn unknown_user_then_nothing_to_toggle() {
        let source = FakeSource::missing();
        let (session, out) = drive(&source, "ghost\n:more\n");

        assert_eq!(session.error(), Some("User not found"));
        assert!(out.contains("Nothing to toggle."));
        assert_eq!(source.calls(), [Call::User]);
    }

    #[test]
    fn handle_is_trimmed() {
        let source = FakeSource::found(fixtures::profile("octocat"), fixtures::repositories(1));
        let (session, _) = drive(&source, "  octocat  \n");
        assert_eq!(session.handle(), "octocat");
    }
}
