//! HTML rendering for directory listings.
//!
//! Produces a complete HTML5 document from a [`ListingResult`]:
//! breadcrumb header, entry table, per-extension file icons, and a
//! theme switcher backed by CSS custom properties and localStorage.

use crate::fs::{ListingEntry, ListingResult};

/// Known theme names; the first is the default.
pub const THEMES: &[&str] = &["auto", "nord", "squirrel", "archlinux", "monokai", "zenburn"];

/// Percent-encode each segment of a path for use in an href, keeping
/// the `/` separators. Without this, names containing `#` or `?` would
/// be cut short by the browser's fragment/query parsing.
fn encode_href(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Escape HTML special characters to prevent XSS via entry names.
fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render a listing into a full HTML document.
pub fn render_listing(listing: &ListingResult) -> String {
    let title = html_escape(&listing.path);
    let theme = if THEMES.contains(&listing.theme.as_str()) {
        listing.theme.as_str()
    } else {
        THEMES[0]
    };

    let breadcrumbs = render_breadcrumbs(&listing.path);
    let switcher = render_theme_switcher(theme);
    let rows: String = listing.entries.iter().map(render_row).collect();

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} &ndash; srvdir</title>
    <style>{STYLES}</style>
</head>
<body data-theme="{theme}">
    <nav>{switcher}</nav>
    <header>{breadcrumbs}</header>
    <main>
        <table>
            <thead>
                <tr>
                    <th class="name">Name</th>
                    <th class="size">Size</th>
                    <th class="date">Modified</th>
                </tr>
            </thead>
            <tbody>
{rows}            </tbody>
        </table>
    </main>
    <script>{THEME_SCRIPT}</script>
</body>
</html>
"##
    )
}

/// One table row for a listing entry.
fn render_row(entry: &ListingEntry) -> String {
    let (icon, class) = if entry.name == ".." {
        ("\u{2B06}\u{FE0F}", "name parent")
    } else if entry.is_dir {
        ("\u{1F4C1}", "name dir")
    } else {
        (file_icon(&entry.name), "name file")
    };

    format!(
        "                <tr>\n                    <td class=\"{class}\"><span class=\"icon\">{icon}</span><a href=\"{href}\">{name}</a></td>\n                    <td class=\"size\">{size}</td>\n                    <td class=\"date\">{modified}</td>\n                </tr>\n",
        href = html_escape(&encode_href(&entry.href)),
        name = html_escape(&entry.name),
        size = html_escape(&entry.size),
        modified = html_escape(&entry.modified),
    )
}

/// Breadcrumb trail for the current path: every ancestor is a link, the
/// last segment is plain text.
fn render_breadcrumbs(path: &str) -> String {
    if path == "/" {
        return r#"<div class="breadcrumbs"><span class="crumb root">/</span></div>"#.to_string();
    }

    let mut crumbs = String::from(r##"<a class="crumb root" href="/">~</a>"##);
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    let mut current = String::new();
    for (i, segment) in segments.iter().enumerate() {
        current.push('/');
        current.push_str(segment);
        crumbs.push_str(r#"<span class="separator">/</span>"#);
        if i == segments.len() - 1 {
            crumbs.push_str(&format!(
                r#"<span class="crumb current">{}</span>"#,
                html_escape(segment)
            ));
        } else {
            crumbs.push_str(&format!(
                r#"<a class="crumb" href="{}/">{}</a>"#,
                html_escape(&encode_href(&current)),
                html_escape(segment)
            ));
        }
    }

    format!(r#"<div class="breadcrumbs">{crumbs}</div>"#)
}

fn render_theme_switcher(current: &str) -> String {
    let labels = ["Auto", "Nord", "Squirrel", "Archlinux", "Monokai", "Zenburn"];

    let mut options = String::new();
    for (value, label) in THEMES.iter().zip(labels) {
        let selected = if *value == current { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{value}"{selected}>{label}</option>"#
        ));
    }

    format!(
        r##"<div class="theme-switcher"><label for="theme-select">Theme</label><select id="theme-select" onchange="setTheme(this.value)">{options}</select></div>"##
    )
}

/// Pick an icon for a file based on its extension.
fn file_icon(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" | "png" | "gif" | "svg" | "webp" | "ico" => "\u{1F5BC}\u{FE0F}",
        "pdf" => "\u{1F4C4}",
        "doc" | "docx" | "odt" => "\u{1F4DD}",
        "go" | "py" | "js" | "ts" | "rs" | "c" | "cpp" | "h" | "java" | "rb" | "php" | "sh"
        | "fish" => "\u{1F4DC}",
        "json" | "yaml" | "yml" | "toml" | "xml" | "ini" | "conf" => "\u{2699}\u{FE0F}",
        "zip" | "tar" | "gz" | "bz2" | "xz" | "7z" | "rar" => "\u{1F4E6}",
        "mp3" | "wav" | "flac" | "ogg" | "m4a" => "\u{1F3B5}",
        "mp4" | "mkv" | "avi" | "mov" | "webm" => "\u{1F3AC}",
        "md" | "txt" | "rst" => "\u{1F4C3}",
        "html" | "htm" | "css" => "\u{1F310}",
        _ => "\u{1F4C4}",
    }
}

const STYLES: &str = r#"
:root {
  --bg: #eceff4; --bg-card: #fff; --text: #2e3440; --text-muted: #4c566a;
  --link-dir: #5e81ac; --link-file: #4c566a; --header-bg: #e5e9f0;
  --row-hover: #e5e9f0; --border: #d8dee9; --select-bg: #fff; --accent: #5e81ac;
}
[data-theme="nord"] {
  --bg: #2e3440; --bg-card: #3b4252; --text: #eceff4; --text-muted: #d8dee9;
  --link-dir: #88c0d0; --link-file: #81a1c1; --header-bg: #434c5e;
  --row-hover: #434c5e; --border: #4c566a; --select-bg: #3b4252; --accent: #88c0d0;
}
[data-theme="squirrel"] {
  --bg: #faf8f5; --bg-card: #fff; --text: #3d3d3d; --text-muted: #666;
  --link-dir: #d02474; --link-file: #555; --header-bg: #f0eeeb;
  --row-hover: #f5f3f0; --border: #e0ddd8; --select-bg: #fff; --accent: #d02474;
}
[data-theme="archlinux"] {
  --bg: #383c4a; --bg-card: #404552; --text: #fefefe; --text-muted: #ccc;
  --link-dir: #03a9f4; --link-file: #ea95ff; --header-bg: #2f343f;
  --row-hover: #4b5162; --border: #4c566a; --select-bg: #404552; --accent: #03a9f4;
}
[data-theme="monokai"] {
  --bg: #272822; --bg-card: #3e3d32; --text: #f8f8f2; --text-muted: #a6a68a;
  --link-dir: #66d9ef; --link-file: #a6e22e; --header-bg: #1e1f1c;
  --row-hover: #49483e; --border: #49483e; --select-bg: #3e3d32; --accent: #f92672;
}
[data-theme="zenburn"] {
  --bg: #3f3f3f; --bg-card: #4f4f4f; --text: #dcdccc; --text-muted: #9f9f8f;
  --link-dir: #8cd0d3; --link-file: #cc9393; --header-bg: #2b2b2b;
  --row-hover: #5f5f5f; --border: #6f6f6f; --select-bg: #4f4f4f; --accent: #f0dfaf;
}
@media (prefers-color-scheme: dark) {
  [data-theme="auto"] {
    --bg: #2e3440; --bg-card: #3b4252; --text: #eceff4; --text-muted: #d8dee9;
    --link-dir: #88c0d0; --link-file: #81a1c1; --header-bg: #434c5e;
    --row-hover: #434c5e; --border: #4c566a; --select-bg: #3b4252; --accent: #88c0d0;
  }
}
* { box-sizing: border-box; }
body {
  font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
  background: var(--bg); color: var(--text);
  margin: 0; padding: 0; line-height: 1.6; min-height: 100vh;
}
nav {
  display: flex; justify-content: flex-end; padding: 0.75rem 1.5rem;
  border-bottom: 1px solid var(--border); background: var(--bg-card);
}
.theme-switcher {
  display: flex; align-items: center; gap: 0.5rem;
  font-size: 0.85rem; color: var(--text-muted);
}
select {
  background: var(--select-bg); color: var(--text);
  border: 1px solid var(--border); padding: 0.35rem 0.5rem;
  border-radius: 4px; font-size: 0.85rem; cursor: pointer;
}
select:focus { outline: 2px solid var(--accent); outline-offset: 1px; }
header {
  padding: 1rem 1.5rem; background: var(--bg-card);
  border-bottom: 1px solid var(--border);
}
.breadcrumbs {
  display: flex; align-items: center; flex-wrap: wrap;
  gap: 0.25rem; font-size: 1.1rem;
}
.crumb { color: var(--link-dir); text-decoration: none; font-weight: 500; }
a.crumb:hover { text-decoration: underline; }
.crumb.root { font-size: 1.2rem; }
.crumb.current { color: var(--text); font-weight: 600; }
.separator { color: var(--text-muted); margin: 0 0.15rem; }
main { padding: 1rem 1.5rem 2rem; }
table {
  width: 100%; border-collapse: collapse; background: var(--bg-card);
  border-radius: 8px; overflow: hidden;
  box-shadow: 0 1px 3px rgba(0,0,0,0.08);
}
thead { background: var(--header-bg); }
th {
  text-align: left; padding: 0.75rem 1rem; font-weight: 600;
  font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.03em;
  color: var(--text-muted); border-bottom: 1px solid var(--border);
}
td { padding: 0.6rem 1rem; border-bottom: 1px solid var(--border); }
tbody tr:last-child td { border-bottom: none; }
tbody tr:hover td { background: var(--row-hover); }
.name { width: 55%; }
.size {
  width: 15%; text-align: right; color: var(--text-muted);
  font-variant-numeric: tabular-nums;
}
.date { width: 30%; color: var(--text-muted); font-variant-numeric: tabular-nums; }
th.size, th.date, td.date { text-align: right; }
.icon { margin-right: 0.5rem; }
a { text-decoration: none; }
.dir a { color: var(--link-dir); font-weight: 500; }
.parent a { color: var(--text-muted); }
.file a { color: var(--link-file); }
td a:hover { text-decoration: underline; }
@media (max-width: 700px) {
  nav, header, main { padding-left: 1rem; padding-right: 1rem; }
  .breadcrumbs { font-size: 1rem; }
  th, td { padding: 0.5rem 0.6rem; }
  .date { display: none; }
  .name { width: 70%; }
  .size { width: 30%; }
}
@media (max-width: 400px) {
  .theme-switcher label { display: none; }
}
"#;

const THEME_SCRIPT: &str = r#"
function setTheme(theme) {
  document.body.setAttribute('data-theme', theme);
  localStorage.setItem('srvdir-theme', theme);
}
(function() {
  const saved = localStorage.getItem('srvdir-theme');
  if (saved) {
    document.body.setAttribute('data-theme', saved);
    const select = document.getElementById('theme-select');
    if (select) select.value = saved;
  }
})();
"#;
