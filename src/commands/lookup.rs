use crate::client::ProfileSource;
use crate::render;
use crate::session::{FetchStatus, SearchSession};
use std::io::Write;

/// One search, printed once. Returns whether the user was found.
pub fn lookup_user<W: Write>(
    source: &dyn ProfileSource,
    session: &mut SearchSession,
    handle: &str,
    show_all: bool,
    out: &mut W,
) -> std::io::Result<bool> {
    if handle.is_empty() {
        writeln!(out, "Give me a handle to look up.")?;
        return Ok(false);
    }

    writeln!(out, "{}", render::LOADING)?;
    session.start_search(source, handle);

    if show_all && session.has_more() {
        session.toggle_show_all();
    }
    write!(out, "{}", render::session_view(session))?;

    Ok(session.status() == FetchStatus::Success)
}
