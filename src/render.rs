use std::borrow::Cow;
use std::io::{self, Write};

use crate::models::{PageWindow, RepositorySummary, SearchRequest, SearchResult};

pub const DESCRIPTION_LIMIT: usize = 100;
pub const NO_DESCRIPTION: &str = "No description";
const ELLIPSIS: &str = "...";
const RULE_WIDTH: usize = 80;

/// Cuts `text` to at most `max_chars` characters, appending `...` when
/// anything was removed. Counts characters, not bytes.
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

fn rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

pub fn searching<W: Write>(out: &mut W, query: &str) -> io::Result<()> {
    writeln!(out, "🔎 Searching for '{query}'...")
}

pub fn no_results<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "🔍 No matching repositories found.")
}

fn repository<W: Write>(out: &mut W, repo: &RepositorySummary) -> io::Result<()> {
    let description = repo
        .description
        .as_deref()
        .map(|d| truncate(d, DESCRIPTION_LIMIT))
        .unwrap_or(Cow::Borrowed(NO_DESCRIPTION));

    writeln!(out, "🌟 {}", repo.full_name)?;
    writeln!(out, "   👤 Owner: {}", repo.owner_login)?;
    writeln!(out, "   ⭐ Stars: {}", repo.star_count)?;
    writeln!(out, "   📝 Description: {description}")?;
    writeln!(out, "   🔗 URL: {}", repo.web_url)?;
    rule(out)
}

/// Writes the header, one block per repository, and a next-page hint when
/// more pages remain.
pub fn results<W: Write>(
    out: &mut W,
    request: &SearchRequest,
    result: &SearchResult,
) -> io::Result<()> {
    let window = PageWindow::new(request.page, request.per_page, result.total_count);

    writeln!(
        out,
        "\n🎉 Found {} repositories, showing {}-{} ({} pages, page {}):\n",
        result.total_count,
        window.start_index,
        window.end_index,
        window.total_pages,
        request.page
    )?;
    rule(out)?;

    for repo in &result.items {
        repository(out, repo)?;
    }

    if u64::from(request.page) < window.total_pages {
        writeln!(
            out,
            "\n💡 Tip: use --page {} to see the next page",
            request.page + 1
        )?;
    }
    Ok(())
}
