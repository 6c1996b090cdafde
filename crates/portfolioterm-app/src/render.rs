//! Screen composition: transcript, input line, and the active panel.

use portfolioterm_content::PanelBoard;
use portfolioterm_terminal::TerminalSession;

/// Rows given to the panel when one is shown, as a fraction of the screen.
const PANEL_SHARE_DIVISOR: usize = 2;

/// Split `text` into rows of at most `width` characters. Embedded newlines
/// start new rows; an empty string yields one empty row.
///
/// `width` counts `char`s, not display columns: each char is assumed to
/// take one terminal cell. That holds for the portfolio content and the
/// box-drawing and arrow glyphs it uses. Double-width glyphs (CJK, most
/// emoji) count as one and will overflow a row.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|c| c.iter().collect::<String>()));
    }
    rows
}

/// Transcript rows followed by the typing or prompt line.
pub fn transcript_rows(session: &TerminalSession, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for entry in session.transcript().entries() {
        let glyph = entry.kind.prompt();
        for (i, line) in entry.text.split('\n').enumerate() {
            let prefix = if i == 0 { glyph } else { " " };
            rows.extend(wrap(&format!("{prefix} {line}"), width));
        }
    }
    if session.is_typing() {
        rows.extend(wrap(&format!("> {}_", session.typing_line()), width));
    } else {
        rows.extend(wrap(&format!("$ {}_", session.input()), width));
    }
    rows
}

/// Keep the last `max` rows.
pub fn trim_rows(rows: &mut Vec<String>, max: usize) {
    if rows.len() > max {
        rows.drain(..rows.len() - max);
    }
}

/// Compose a full screen of at most `height` rows.
pub fn compose(
    session: &TerminalSession,
    board: &PanelBoard,
    width: usize,
    height: usize,
) -> Vec<String> {
    let panel: Vec<String> = board
        .render(session.active_intent())
        .iter()
        .flat_map(|line| wrap(line, width))
        .collect();

    let mut rows = transcript_rows(session, width);
    if panel.is_empty() || height < 4 {
        trim_rows(&mut rows, height);
        return rows;
    }

    // Panel gets up to half the screen (plus the separator), shown from the top.
    let panel_rows = panel.len().min(height / PANEL_SHARE_DIVISOR);
    trim_rows(&mut rows, height - panel_rows - 1);
    rows.push("─".repeat(width.max(1)));
    rows.extend(panel.into_iter().take(panel_rows));
    rows
}
