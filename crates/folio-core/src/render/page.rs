//! HTML for each [`Instruction`].

use std::io::{self, Write};

use super::{plan, HtmlWriter, Instruction};
use crate::config::SiteConfig;
use crate::project::Project;

const EXTERNAL_REL: &str = "noopener noreferrer";

/// Renders the portfolio page for one request.
pub struct Page<'a> {
    pub site: &'a SiteConfig,
    /// Upper bound of the footer copyright range.
    pub year: i32,
    /// Version shown in the footer signature.
    pub version: &'a str,
}

impl<'a> Page<'a> {
    pub fn new(site: &'a SiteConfig, year: i32, version: &'a str) -> Self {
        Self {
            site,
            year,
            version,
        }
    }

    /// Streams the whole document for `projects` into `out`.
    pub fn render<W: Write>(
        &self,
        projects: &[Project],
        out: &mut HtmlWriter<W>,
    ) -> io::Result<()> {
        for instruction in plan(projects) {
            self.emit(instruction, out)?;
        }
        out.flush()
    }

    /// Writes the HTML for a single instruction.
    pub fn emit<W: Write>(
        &self,
        instruction: Instruction<'_>,
        out: &mut HtmlWriter<W>,
    ) -> io::Result<()> {
        match instruction {
            Instruction::Head => self.head(out),
            Instruction::Header => self.header(out),
            Instruction::MainOpen => {
                out.open("main", &[("class", "stack")])?;
                out.newline()
            }
            Instruction::Entry(project) => entry(project, out),
            Instruction::MainClose => out.close("main"),
            Instruction::Fallback => fallback(out),
            Instruction::Footer => self.footer(out),
        }
    }

    fn head<W: Write>(&self, out: &mut HtmlWriter<W>) -> io::Result<()> {
        let site = self.site;
        let title = site.title();

        out.doctype()?;
        out.open("html", &[("lang", "en-US")])?;
        out.newline()?;
        out.open("head", &[])?;
        out.newline()?;
        out.void("meta", &[("charset", "utf-8")])?;
        out.element("title", &[], &title)?;
        for (name, content) in [
            ("viewport", "width=device-width, initial-scale=1"),
            ("author", site.author.as_str()),
            ("description", site.description.as_str()),
            ("keywords", site.keywords.as_str()),
            ("theme-color", site.theme_color.as_str()),
        ] {
            out.void("meta", &[("content", content), ("name", name)])?;
        }
        for (property, content) in [
            ("og:type", "website"),
            ("og:title", title.as_str()),
            ("og:url", site.url.as_str()),
            ("og:description", site.description.as_str()),
            ("og:image", site.og_image.as_str()),
        ] {
            out.void("meta", &[("content", content), ("property", property)])?;
        }
        out.void("link", &[("rel", "icon"), ("href", site.logo.as_str())])?;
        out.void(
            "link",
            &[
                ("rel", "mask-icon"),
                ("href", site.logo.as_str()),
                ("color", site.theme_color.as_str()),
            ],
        )?;
        out.void(
            "link",
            &[
                ("rel", "preload stylesheet"),
                ("href", site.stylesheet.as_str()),
                ("type", "text/css"),
                ("as", "style"),
            ],
        )?;
        out.close("head")
    }

    fn header<W: Write>(&self, out: &mut HtmlWriter<W>) -> io::Result<()> {
        out.open("body", &[("class", "cover")])?;
        out.newline()?;
        out.open("header", &[])?;
        out.newline()?;
        out.open("nav", &[("class", "cluster"), ("data-align", "center")])?;
        out.newline()?;
        out.open("a", &[("data-style", "logo"), ("href", "/")])?;
        out.open(
            "img",
            &[
                ("height", "30"),
                ("width", "30"),
                ("src", self.site.logo.as_str()),
                ("alt", "Logo"),
            ],
        )?;
        out.close("a")?;
        out.open("div", &[])?;
        out.element("span", &[], &self.site.heading)?;
        out.close("div")?;
        out.close("nav")?;
        out.close("header")
    }

    fn footer<W: Write>(&self, out: &mut HtmlWriter<W>) -> io::Result<()> {
        out.open("footer", &[("class", "stack")])?;
        out.newline()?;
        out.open("nav", &[("class", "cluster"), ("data-justify", "center")])?;
        out.newline()?;
        for link in &self.site.links {
            if link.external {
                out.element(
                    "a",
                    &[
                        ("href", link.href.as_str()),
                        ("target", "_blank"),
                        ("rel", EXTERNAL_REL),
                    ],
                    &link.label,
                )?;
            } else {
                out.element("a", &[("href", link.href.as_str())], &link.label)?;
            }
        }
        out.close("nav")?;
        out.open("p", &[("class", "text-align:center")])?;
        out.open("small", &[])?;
        out.text(&format!("© {} — {} ", self.site.since, self.year))?;
        out.element("em", &[], &format!("{}@{}", self.site.author, self.version))?;
        out.close("small")?;
        out.close("p")?;
        out.close("footer")?;
        out.close("body")?;
        out.close("html")
    }
}

fn entry<W: Write>(project: &Project, out: &mut HtmlWriter<W>) -> io::Result<()> {
    out.open("article", &[])?;
    out.open(
        "a",
        &[
            ("href", project.url.as_str()),
            ("target", "_blank"),
            ("rel", EXTERNAL_REL),
        ],
    )?;
    out.text(&project.name)?;
    out.close("a")?;
    out.text(" ")?;
    out.element("code", &[], &project.badge())?;
    out.element("p", &[], &project.description)?;
    out.close("article")
}

fn fallback<W: Write>(out: &mut HtmlWriter<W>) -> io::Result<()> {
    out.open(
        "main",
        &[
            ("class", "cluster"),
            ("data-justify", "center"),
            ("data-align", "center"),
        ],
    )?;
    out.newline()?;
    out.open("section", &[("class", "text-align:center")])?;
    out.newline()?;
    out.element("h1", &[], "No Projects Found")?;
    out.close("section")?;
    out.close("main")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{Language, License};

    fn render(projects: &[Project]) -> String {
        let site = SiteConfig::default();
        let page = Page::new(&site, 2026, "1.0");
        let mut out = HtmlWriter::new(Vec::new());
        page.render(projects, &mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    fn project(name: &str, lang: Language, lic: License) -> Project {
        Project {
            name: name.to_string(),
            description: format!("{name} description"),
            url: format!("https://github.com/josegpt/{name}"),
            license: lic,
            language: lang,
        }
    }

    #[test]
    fn empty_renders_fallback_only() {
        let html = render(&[]);
        assert!(html.contains("<h1>No Projects Found</h1>"));
        assert!(!html.contains("<article>"));
        assert!(!html.contains("<main class=\"stack\">"));
        assert_eq!(html.matches("<main").count(), 1);
    }

    #[test]
    fn two_entries_in_order() {
        let html = render(&[
            project("dwm", Language::C, License::Mit),
            project("dotfiles", Language::Shell, License::Isc),
        ]);
        assert!(!html.contains("No Projects Found"));
        assert_eq!(html.matches("<article>").count(), 2);

        let first = html.find("dwm description").unwrap();
        let second = html.find("dotfiles description").unwrap();
        assert!(first < second);

        assert!(html.contains(
            "<a href=\"https://github.com/josegpt/dwm\" target=\"_blank\" rel=\"noopener noreferrer\">dwm</a>"
        ));
        assert!(html.contains("<code>c@mit</code>"));
        assert!(html.contains("<code>shell@isc</code>"));
        assert!(html.contains("<p>dwm description</p>"));
    }

    #[test]
    fn sentinels_rendered_literally() {
        let html = render(&[Project::default()]);
        assert!(html.contains(">noname</a>"));
        assert!(html.contains("href=\"nourl\""));
        assert!(html.contains("<p>nodescription</p>"));
        assert!(html.contains("<code>unknown@none</code>"));
    }

    #[test]
    fn project_text_is_escaped() {
        let mut p = project("x", Language::Html, License::Gpl3);
        p.description = "<script>alert(1)</script>".to_string();
        let html = render(&[p]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn chrome_is_static() {
        let html = render(&[]);
        assert!(html.starts_with("<!doctype html>\n<html lang=\"en-US\">"));
        assert!(html.contains("<title>josegpt / Projects</title>"));
        assert!(html.contains("<meta content=\"josegpt / Projects\" property=\"og:title\">"));
        assert!(html.contains("<a href=\"mailto:josegpt27@gmail.com\">Email</a>"));
        assert!(html.contains(
            "<a href=\"https://github.com/josegpt\" target=\"_blank\" rel=\"noopener noreferrer\">GitHub</a>"
        ));
        assert!(html.contains("© 2017 — 2026 <em>josegpt@1.0</em>"));
        assert!(html.trim_end().ends_with("</html>"));

        let with_projects = render(&[Project::default()]);
        let head_end = html.find("</header>").unwrap();
        assert_eq!(&with_projects[..head_end], &html[..head_end]);
    }
}
