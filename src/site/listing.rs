//! Directory listing scraping
//!
//! Static file servers answer a GET on a directory with an HTML page of
//! anchors, one per entry. Nothing else on the page is relied upon: every
//! `href` is resolved against the listing's own URL and then filtered.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

fn href_regex() -> &'static Regex {
    static HREF: OnceLock<Regex> = OnceLock::new();
    HREF.get_or_init(|| {
        Regex::new(r#"(?is)<a\b[^>]*?\bhref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#)
            .expect("href regex is valid")
    })
}

fn image_regex() -> &'static Regex {
    static IMAGE: OnceLock<Regex> = OnceLock::new();
    IMAGE.get_or_init(|| Regex::new(r"(?i)\.(png|jpg|jpeg|gif)$").expect("image regex is valid"))
}

/// Raw `href` values of every anchor, in document order
pub fn anchor_hrefs(html: &str) -> Vec<String> {
    href_regex()
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| unescape(m.as_str()))
        .collect()
}

/// Every anchor resolved to an absolute URL; unresolvable ones are dropped
pub fn links(page_url: &Url, html: &str) -> Vec<Url> {
    anchor_hrefs(html)
        .iter()
        .filter_map(|href| page_url.join(href).ok())
        .collect()
}

/// Project folder identifiers in order of appearance.
///
/// A link counts when its URL contains `marker`; the identifier is the first
/// path segment that contains it.
pub fn project_folders(page_url: &Url, html: &str, marker: &str) -> Vec<String> {
    links(page_url, html)
        .iter()
        .filter(|link| link.as_str().contains(marker))
        .filter_map(|link| {
            link.path_segments()?
                .find(|segment| segment.contains(marker))
                .map(str::to_string)
        })
        .collect()
}

/// Whether a URL or file name ends in png, jpg, jpeg or gif (any case)
pub fn is_image(name: &str) -> bool {
    image_regex().is_match(name)
}

/// File names of the image links on a listing page, in order
pub fn image_files(page_url: &Url, html: &str) -> Vec<String> {
    links(page_url, html)
        .iter()
        .filter(|link| is_image(link.as_str()))
        .map(file_name)
        .collect()
}

/// Last `/`-separated part of a URL
pub fn file_name(link: &Url) -> String {
    link.as_str().rsplit('/').next().unwrap_or_default().to_string()
}

/// Display title for a folder: marker removed, underscores become spaces,
/// and the first letter of every word is upper-cased.
///
/// `entry_my_project` becomes `My Project`.
pub fn project_title(folder: &str, marker: &str) -> String {
    let name = if marker.is_empty() {
        folder.to_string()
    } else {
        folder.replacen(marker, "", 1)
    };
    let name = name.replace('_', " ");

    let mut title = String::with_capacity(name.len());
    let mut in_word = false;
    for c in name.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !in_word {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        in_word = is_word;
    }
    title
}

fn unescape(href: &str) -> String {
    href.replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What `python -m http.server` serves
    const PYTHON_ROOT: &str = r#"<!DOCTYPE HTML>
<html lang="en">
<head><title>Directory listing for /project_entries/</title></head>
<body>
<h1>Directory listing for /project_entries/</h1>
<hr>
<ul>
<li><a href="entry_alpha/">entry_alpha/</a></li>
<li><a href="notes.txt">notes.txt</a></li>
<li><a href="entry_beta/">entry_beta/</a></li>
</ul>
<hr>
</body>
</html>"#;

    /// Apache mod_autoindex with sort links and a parent entry
    const APACHE_FOLDER: &str = r#"<html><body><h1>Index of /project_entries/entry_alpha</h1>
<table>
<tr><th><a href="?C=N;O=D">Name</a></th><th><a href="?C=M;O=A">Last modified</a></th></tr>
<tr><td><a href="/project_entries/">Parent Directory</a></td></tr>
<tr><td><a href="gallery/">gallery/</a></td></tr>
<tr><td><a href="github.txt">github.txt</a></td></tr>
<tr><td><a href="Cover.PNG">Cover.PNG</a></td></tr>
<tr><td><a href="second.jpg">second.jpg</a></td></tr>
<tr><td><a href="summary.txt">summary.txt</a></td></tr>
</table></body></html>"#;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_anchor_hrefs_quote_styles() {
        let html = r#"<a href="one">1</a><A HREF='two'>2</A><a class=x href=three>3</a><a name="none">"#;
        assert_eq!(anchor_hrefs(html), ["one", "two", "three"]);
    }

    #[test]
    fn test_anchor_hrefs_unescapes_entities() {
        let html = r#"<a href="a&amp;b.png">a&amp;b.png</a>"#;
        assert_eq!(anchor_hrefs(html), ["a&b.png"]);
    }

    #[test]
    fn test_project_folders_keep_listing_order() {
        let root = url("http://localhost:8000/project_entries/");
        assert_eq!(
            project_folders(&root, PYTHON_ROOT, "entry_"),
            ["entry_alpha", "entry_beta"]
        );
    }

    #[test]
    fn test_project_folders_absolute_hrefs() {
        let root = url("http://localhost:8000/project_entries/");
        let html = r#"<a href="/project_entries/entry_gamma/">entry_gamma/</a>
                      <a href="/">Parent</a>"#;
        assert_eq!(project_folders(&root, html, "entry_"), ["entry_gamma"]);
    }

    #[test]
    fn test_project_folders_none() {
        let root = url("http://localhost:8000/project_entries/");
        assert!(project_folders(&root, "<p>empty</p>", "entry_").is_empty());
    }

    #[test]
    fn test_image_files_case_insensitive_in_order() {
        let folder = url("http://localhost:8000/project_entries/entry_alpha/");
        assert_eq!(image_files(&folder, APACHE_FOLDER), ["Cover.PNG", "second.jpg"]);
    }

    #[test]
    fn test_is_image() {
        assert!(is_image("a.png"));
        assert!(is_image("a.JPEG"));
        assert!(is_image("http://h/x/y.Gif"));
        assert!(!is_image("a.webp"));
        assert!(!is_image("png"));
        assert!(!is_image("a.png.txt"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(&url("http://h/p/entry_a/gallery/shot.png")), "shot.png");
    }

    #[test]
    fn test_project_title() {
        assert_eq!(project_title("entry_my_project", "entry_"), "My Project");
        assert_eq!(project_title("entry_alpha", "entry_"), "Alpha");
        assert_eq!(project_title("entry_web-app_v2", "entry_"), "Web-App V2");
        // Only the first letter of a word changes
        assert_eq!(project_title("entry_rust_CLI", "entry_"), "Rust CLI");
    }
}
