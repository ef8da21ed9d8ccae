//! Whole-file decode and encode.
//!
//! Decoding is a single pass over the input. Each line goes to the first
//! matching record grammar, then to the national rating fallback (lines that
//! start with a federation code), then to the `XX`/`BB` extension maps.
//! Anything else is skipped. Encoding walks the grammar table in order and
//! appends the national blocks and extension fields after it.

use log::{debug, info, trace};
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use super::entry::{
    ENTRIES, load_national_player, match_entry, national_player_header, national_player_lines,
};
use super::error::Result;
use super::federation::is_federation;
use super::types::Tournament;

/// Output settings for [`dumps_with`] and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpOptions {
    /// Write a blank line and a `### <columns>` comment before each section.
    pub section_headers: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            section_headers: true,
        }
    }
}

#[derive(Default)]
struct Decoder {
    tournament: Tournament,
    records: usize,
    skipped: usize,
}

impl Decoder {
    fn feed(&mut self, line: &str) -> Result<()> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some((entry, data)) = match_entry(line) {
            trace!("{} {:?}", entry.din, entry.record);
            self.records += 1;
            return entry.load(&mut self.tournament, data);
        }

        if let Some(federation) = line.get(..3)
            && is_federation(federation)
            && let Some(data) = line[3..].strip_prefix(' ')
        {
            trace!("{federation} national player");
            self.records += 1;
            return load_national_player(&mut self.tournament, federation, data);
        }

        let fields = if line.starts_with("XX") {
            &mut self.tournament.xx_fields
        } else if line.starts_with("BB") {
            &mut self.tournament.bb_fields
        } else {
            if !line.trim().is_empty() {
                debug!("Skipping unrecognised line: {line}");
                self.skipped += 1;
            }
            return Ok(());
        };
        let (key, value) = line.split_once(' ').unwrap_or((line, ""));
        fields.insert(key, value.trim().to_string());
        self.records += 1;
        Ok(())
    }

    fn finish(self) -> Tournament {
        let t = self.tournament;
        info!(
            "Decoded tournament '{}': {} records, {} players, {} teams, {} rounds ({} lines skipped)",
            t.name,
            self.records,
            t.players.len(),
            t.teams.len(),
            t.num_rounds_estimation(),
            self.skipped
        );
        t
    }
}

/// Decodes a tournament from individual lines. A trailing `\r` on a line is
/// ignored.
pub fn load_lines<I, S>(lines: I) -> Result<Tournament>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut decoder = Decoder::default();
    for line in lines {
        decoder.feed(line.as_ref())?;
    }
    Ok(decoder.finish())
}

/// Decodes a tournament from the full text of a report.
pub fn loads(text: &str) -> Result<Tournament> {
    load_lines(text.lines())
}

/// Decodes a tournament from a reader, line by line.
pub fn load<R: BufRead>(reader: R) -> Result<Tournament> {
    let mut decoder = Decoder::default();
    for line in reader.lines() {
        decoder.feed(&line?)?;
    }
    Ok(decoder.finish())
}

pub fn dump_lines(t: &Tournament) -> Vec<String> {
    dump_lines_with(t, &DumpOptions::default())
}

/// Renders every line of the report, without terminators.
pub fn dump_lines_with(t: &Tournament, options: &DumpOptions) -> Vec<String> {
    let mut out = Vec::new();

    for entry in &ENTRIES {
        let rows = entry.lines(t);
        if rows.is_empty() {
            continue;
        }
        debug!("Writing {} line(s) of {}", rows.len(), entry.din);
        if options.section_headers
            && let Some(header) = entry.header(t)
        {
            out.push(String::new());
            out.push(format!("### {header}"));
        }
        out.extend(rows.into_iter().map(|row| format!("{} {}", entry.din, row)));
    }

    for (federation, players) in t.national_players_by_federation() {
        debug!("Writing {} national player(s) of {}", players.len(), federation);
        if options.section_headers {
            out.push(String::new());
            out.push(format!("### {}", national_player_header()));
        }
        out.extend(
            national_player_lines(&players)
                .into_iter()
                .map(|row| format!("{federation} {row}")),
        );
    }

    for (key, value) in t.xx_fields.iter().chain(t.bb_fields.iter()) {
        out.push(format!("{key} {value}"));
    }

    out
}

pub fn dumps(t: &Tournament) -> String {
    dumps_with(t, &DumpOptions::default())
}

/// Renders the report as text, one `\n`-terminated line per record.
pub fn dumps_with(t: &Tournament, options: &DumpOptions) -> String {
    let mut text = String::new();
    for line in dump_lines_with(t, options) {
        text.push_str(&line);
        text.push('\n');
    }
    text
}

/// Writes the report to `writer`. Only I/O errors can occur.
pub fn dump<W: Write>(mut writer: W, t: &Tournament) -> Result<()> {
    for line in dump_lines(t) {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

impl FromStr for Tournament {
    type Err = super::error::TrfError;

    fn from_str(s: &str) -> Result<Self> {
        loads(s)
    }
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in dump_lines(self) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
